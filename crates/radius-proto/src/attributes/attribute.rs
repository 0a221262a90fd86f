use crate::packet::PacketError;

/// RADIUS Attribute structure as defined in RFC 2865 Section 5
///
/// ```text
///  0                   1                   2
///  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |     Type      |    Length     |  Value ...
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// Attribute type (1 byte)
    pub attr_type: u8,
    /// Attribute value (0-253 bytes)
    pub value: Vec<u8>,
}

/// Caller-supplied attribute value before it is put on the wire.
///
/// Numbers are carried as their decimal text, which is how the monitor
/// definitions hand them over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeValue {
    Text(String),
    Bytes(Vec<u8>),
}

impl AttributeValue {
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            AttributeValue::Text(s) => s.as_bytes(),
            AttributeValue::Bytes(b) => b,
        }
    }

    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            AttributeValue::Text(s) => s.into_bytes(),
            AttributeValue::Bytes(b) => b,
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::Text(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue::Text(value)
    }
}

impl From<Vec<u8>> for AttributeValue {
    fn from(value: Vec<u8>) -> Self {
        AttributeValue::Bytes(value)
    }
}

impl From<&[u8]> for AttributeValue {
    fn from(value: &[u8]) -> Self {
        AttributeValue::Bytes(value.to_vec())
    }
}

impl From<u32> for AttributeValue {
    fn from(value: u32) -> Self {
        AttributeValue::Text(value.to_string())
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        AttributeValue::Text(value.to_string())
    }
}

impl Attribute {
    /// Minimum attribute length (type + length fields = 2 bytes)
    pub const MIN_LENGTH: usize = 2;
    /// Maximum attribute length (255 bytes including type and length)
    pub const MAX_LENGTH: usize = 255;
    /// Maximum value length (253 bytes)
    pub const MAX_VALUE_LENGTH: usize = 253;

    pub fn new(attr_type: u8, value: Vec<u8>) -> Result<Self, PacketError> {
        if value.len() > Self::MAX_VALUE_LENGTH {
            return Err(PacketError::AttributeTooLong {
                attr_type,
                length: Self::MIN_LENGTH + value.len(),
            });
        }
        Ok(Attribute { attr_type, value })
    }

    /// Create an attribute from a caller-supplied value, taken literally
    pub fn from_value(attr_type: u8, value: impl Into<AttributeValue>) -> Result<Self, PacketError> {
        Self::new(attr_type, value.into().into_bytes())
    }

    /// Encode attribute to bytes
    pub fn encode(&self) -> Result<Vec<u8>, PacketError> {
        let mut buffer = Vec::with_capacity(self.encoded_length());
        self.encode_into(&mut buffer)?;
        Ok(buffer)
    }

    /// Append the encoded attribute to `buffer`
    pub fn encode_into(&self, buffer: &mut Vec<u8>) -> Result<(), PacketError> {
        let length = self.encoded_length();
        if length > Self::MAX_LENGTH {
            return Err(PacketError::AttributeTooLong {
                attr_type: self.attr_type,
                length,
            });
        }

        buffer.push(self.attr_type);
        buffer.push(length as u8);
        buffer.extend_from_slice(&self.value);
        Ok(())
    }

    /// Get the encoded length of this attribute
    pub fn encoded_length(&self) -> usize {
        Self::MIN_LENGTH + self.value.len()
    }

    /// Interpret the value as text, replacing invalid UTF-8 sequences
    pub fn as_text(&self) -> String {
        String::from_utf8_lossy(&self.value).into_owned()
    }
}

/// Decode the attribute records found in `data[start..boundary]`, in wire order.
///
/// Every record must lie entirely before `boundary`; nothing past it is read.
pub fn decode_attributes(
    data: &[u8],
    start: usize,
    boundary: usize,
) -> Result<Vec<Attribute>, PacketError> {
    if boundary > data.len() {
        return Err(PacketError::AttributeOutOfBounds {
            offset: start,
            length: boundary.saturating_sub(start),
            boundary: data.len(),
        });
    }

    let mut attributes = Vec::new();
    let mut offset = start;

    while offset < boundary {
        if offset + Attribute::MIN_LENGTH > boundary {
            return Err(PacketError::AttributeOutOfBounds {
                offset,
                length: Attribute::MIN_LENGTH,
                boundary,
            });
        }

        let attr_type = data[offset];
        let length = data[offset + 1] as usize;

        if length < Attribute::MIN_LENGTH {
            return Err(PacketError::AttributeTooShort {
                attr_type,
                offset,
                length,
            });
        }

        if offset + length > boundary {
            return Err(PacketError::AttributeOutOfBounds {
                offset,
                length,
                boundary,
            });
        }

        attributes.push(Attribute {
            attr_type,
            value: data[offset + Attribute::MIN_LENGTH..offset + length].to_vec(),
        });
        offset += length;
    }

    Ok(attributes)
}
