use super::{Code, PacketError, HEADER_LENGTH, MAX_PACKET_SIZE};
use crate::attributes::{Attribute, AttributeType, AttributeValue};
use crate::auth::{encrypt_user_password, generate_request_authenticator};

/// RADIUS Access-Request as defined in RFC 2865 Section 4.1
///
/// ```text
///  0                   1                   2                   3
///  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |     Code      |  Identifier   |            Length             |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                                                               |
/// |                     Request Authenticator                     |
/// |                                                               |
/// |                                                               |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |  Attributes ...
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// ```
#[derive(Debug, Clone)]
pub struct AccessRequest {
    /// Packet identifier for matching the response (1 byte)
    pub identifier: u8,
    /// Request Authenticator (16 bytes), also the salt for User-Password hiding
    pub authenticator: [u8; 16],
    /// Attributes in wire order; User-Password is already hidden
    pub attributes: Vec<Attribute>,
}

impl AccessRequest {
    /// Build a request with a fresh random authenticator
    pub fn build<V>(
        identifier: u8,
        secret: &[u8],
        attributes: impl IntoIterator<Item = (u8, V)>,
    ) -> Result<Self, PacketError>
    where
        V: Into<AttributeValue>,
    {
        Self::with_authenticator(
            identifier,
            generate_request_authenticator(),
            secret,
            attributes,
        )
    }

    /// Build a request around a caller-chosen authenticator.
    ///
    /// User-Password values are hidden with `secret` and `authenticator`; every
    /// other value is carried literally.
    pub fn with_authenticator<V>(
        identifier: u8,
        authenticator: [u8; 16],
        secret: &[u8],
        attributes: impl IntoIterator<Item = (u8, V)>,
    ) -> Result<Self, PacketError>
    where
        V: Into<AttributeValue>,
    {
        let mut encoded = Vec::new();
        for (attr_type, value) in attributes {
            let value = value.into();
            let attribute = if attr_type == AttributeType::UserPassword.as_u8() {
                let hidden = encrypt_user_password(value.as_bytes(), secret, &authenticator);
                Attribute::new(attr_type, hidden)?
            } else {
                Attribute::new(attr_type, value.into_bytes())?
            };
            encoded.push(attribute);
        }

        Ok(AccessRequest {
            identifier,
            authenticator,
            attributes: encoded,
        })
    }

    /// Get the length of the encoded packet
    pub fn length(&self) -> usize {
        HEADER_LENGTH
            + self
                .attributes
                .iter()
                .map(Attribute::encoded_length)
                .sum::<usize>()
    }

    /// Encode packet to bytes
    pub fn encode(&self) -> Result<Vec<u8>, PacketError> {
        let total_length = self.length();
        if total_length > MAX_PACKET_SIZE {
            return Err(PacketError::PacketTooLarge(total_length));
        }

        let mut buffer = Vec::with_capacity(total_length);
        buffer.push(Code::AccessRequest.as_u8());
        buffer.push(self.identifier);
        buffer.extend_from_slice(&(total_length as u16).to_be_bytes());
        buffer.extend_from_slice(&self.authenticator);

        for attr in &self.attributes {
            attr.encode_into(&mut buffer)?;
        }

        Ok(buffer)
    }
}

/// Build and encode an Access-Request in one step
pub fn build_access_request<V>(
    identifier: u8,
    secret: &[u8],
    attributes: impl IntoIterator<Item = (u8, V)>,
) -> Result<Vec<u8>, PacketError>
where
    V: Into<AttributeValue>,
{
    AccessRequest::build(identifier, secret, attributes)?.encode()
}
