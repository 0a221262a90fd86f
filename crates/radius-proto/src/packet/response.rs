use super::{Code, PacketError, HEADER_LENGTH};
use crate::attributes::decode_attributes;
use serde::Serialize;
use std::collections::BTreeMap;

/// Outcome carried by a response packet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseCode {
    Accept,
    Reject,
    Challenge,
}

impl ResponseCode {
    pub fn from_code(code: Code) -> Option<Self> {
        match code {
            Code::AccessAccept => Some(ResponseCode::Accept),
            Code::AccessReject => Some(ResponseCode::Reject),
            Code::AccessChallenge => Some(ResponseCode::Challenge),
            Code::AccessRequest => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ResponseCode::Accept => "accept",
            ResponseCode::Reject => "reject",
            ResponseCode::Challenge => "challenge",
        }
    }
}

impl std::fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value taken from the wire without any integrity check.
///
/// The Response Authenticator is not recomputed from the shared secret, so a
/// response is trusted as soon as its identifier and length check out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unverified<T>(T);

impl<T> Unverified<T> {
    pub fn new(value: T) -> Self {
        Unverified(value)
    }

    pub fn get_unverified(&self) -> &T {
        &self.0
    }

    pub fn into_unverified(self) -> T {
        self.0
    }
}

/// Decoded Access-Accept, Access-Reject or Access-Challenge
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Response {
    pub code: ResponseCode,
    #[serde(skip)]
    pub identifier: u8,
    /// Declared packet length, equal to the datagram size
    #[serde(skip)]
    pub length: u16,
    #[serde(skip)]
    pub authenticator: Unverified<[u8; 16]>,
    /// Attribute text values keyed by type; repeated types keep wire order
    pub attributes: BTreeMap<u8, Vec<String>>,
}

impl Response {
    /// First value of an attribute type, if present
    pub fn first(&self, attr_type: u8) -> Option<&str> {
        self.attributes
            .get(&attr_type)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// All values of an attribute type, in wire order
    pub fn all(&self, attr_type: u8) -> &[String] {
        self.attributes
            .get(&attr_type)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// Validate and decode a response datagram for the request `expected_id`.
///
/// Checks run in a fixed order and the first failure ends decoding; no partial
/// response is ever returned.
pub fn decode_response(data: &[u8], expected_id: u8) -> Result<Response, PacketError> {
    if data.len() < HEADER_LENGTH {
        return Err(PacketError::PacketTooShort(data.len()));
    }

    let code = data[0];
    let identifier = data[1];
    let length = u16::from_be_bytes([data[2], data[3]]);

    if identifier != expected_id {
        return Err(PacketError::IdMismatch {
            expected: expected_id,
            actual: identifier,
        });
    }

    if length as usize != data.len() {
        return Err(PacketError::LengthMismatch {
            declared: length as usize,
            actual: data.len(),
        });
    }

    let code = Code::from_u8(code)
        .and_then(ResponseCode::from_code)
        .ok_or(PacketError::UnknownCode(code))?;

    let mut authenticator = [0u8; 16];
    authenticator.copy_from_slice(&data[4..HEADER_LENGTH]);

    let mut attributes: BTreeMap<u8, Vec<String>> = BTreeMap::new();
    for attr in decode_attributes(data, HEADER_LENGTH, length as usize)? {
        attributes
            .entry(attr.attr_type)
            .or_default()
            .push(attr.as_text());
    }

    Ok(Response {
        code,
        identifier,
        length,
        authenticator: Unverified::new(authenticator),
        attributes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response_bytes(code: u8, id: u8, attrs: &[(u8, &[u8])]) -> Vec<u8> {
        let mut data = vec![code, id, 0, 0];
        data.extend_from_slice(&[0xaa; 16]);
        for (attr_type, value) in attrs {
            data.push(*attr_type);
            data.push((value.len() + 2) as u8);
            data.extend_from_slice(value);
        }
        let len = data.len() as u16;
        data[2..4].copy_from_slice(&len.to_be_bytes());
        data
    }

    #[test]
    fn test_minimal_accept() {
        let mut data = vec![2, 5, 0, 20];
        data.extend_from_slice(&[0u8; 16]);

        let response = decode_response(&data, 5).unwrap();
        assert_eq!(response.code, ResponseCode::Accept);
        assert_eq!(response.identifier, 5);
        assert_eq!(response.length, 20);
        assert!(response.attributes.is_empty());
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            serde_json::json!({"code": "accept", "attributes": {}})
        );
    }

    #[test]
    fn test_nineteen_bytes_too_short() {
        let data = [2u8; 19];
        assert_eq!(
            decode_response(&data, 2),
            Err(PacketError::PacketTooShort(19))
        );
    }

    #[test]
    fn test_id_mismatch() {
        for code in [2, 3, 4, 9] {
            let data = response_bytes(code, 7, &[(18, b"hello")]);
            assert_eq!(
                decode_response(&data, 8),
                Err(PacketError::IdMismatch { expected: 8, actual: 7 })
            );
        }
    }

    #[test]
    fn test_length_mismatch() {
        let mut data = response_bytes(2, 1, &[]);
        data.push(0);
        assert_eq!(
            decode_response(&data, 1),
            Err(PacketError::LengthMismatch { declared: 20, actual: 21 })
        );

        let mut data = response_bytes(2, 1, &[(18, b"abc")]);
        data.truncate(22);
        assert_eq!(
            decode_response(&data, 1),
            Err(PacketError::LengthMismatch { declared: 25, actual: 22 })
        );
    }

    #[test]
    fn test_codes() {
        let cases = [
            (2, ResponseCode::Accept),
            (3, ResponseCode::Reject),
            (4, ResponseCode::Challenge),
        ];
        for (code, expected) in cases {
            let data = response_bytes(code, 1, &[]);
            assert_eq!(decode_response(&data, 1).unwrap().code, expected);
        }

        for code in [0, 1, 5, 11, 255] {
            let data = response_bytes(code, 1, &[]);
            assert_eq!(decode_response(&data, 1), Err(PacketError::UnknownCode(code)));
        }
    }

    #[test]
    fn test_repeated_attributes_kept_in_order() {
        let data = response_bytes(
            3,
            9,
            &[(18, b"first"), (25, b"class-a"), (18, b"second"), (18, b"")],
        );
        let response = decode_response(&data, 9).unwrap();

        assert_eq!(response.code, ResponseCode::Reject);
        assert_eq!(response.all(18), &["first", "second", ""]);
        assert_eq!(response.first(25), Some("class-a"));
        assert_eq!(response.first(1), None);
        assert!(response.all(1).is_empty());
    }

    #[test]
    fn test_attribute_length_one_fails_whole_response() {
        let mut data = response_bytes(2, 1, &[(18, b"ok")]);
        data.extend_from_slice(&[25, 1]);
        let len = data.len() as u16;
        data[2..4].copy_from_slice(&len.to_be_bytes());

        assert_eq!(
            decode_response(&data, 1),
            Err(PacketError::AttributeTooShort { attr_type: 25, offset: 24, length: 1 })
        );
    }

    #[test]
    fn test_attribute_past_declared_length() {
        let mut data = response_bytes(2, 1, &[]);
        data.extend_from_slice(&[18, 10, b'a', b'b']);
        let len = data.len() as u16;
        data[2..4].copy_from_slice(&len.to_be_bytes());

        assert_eq!(
            decode_response(&data, 1),
            Err(PacketError::AttributeOutOfBounds { offset: 20, length: 10, boundary: 24 })
        );
    }

    #[test]
    fn test_authenticator_is_exposed_unverified() {
        let data = response_bytes(2, 1, &[]);
        let response = decode_response(&data, 1).unwrap();
        assert_eq!(response.authenticator.get_unverified(), &[0xaa; 16]);
    }
}
