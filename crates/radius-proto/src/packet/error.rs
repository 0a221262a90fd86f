use thiserror::Error;

/// Encoding and validation failures. Each one is fatal for the exchange it occurs in.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PacketError {
    #[error("Invalid RADIUS packet: too short ({0} bytes, minimum 20)")]
    PacketTooShort(usize),
    #[error("Invalid RADIUS packet: ID mismatch (got {actual}, expected {expected})")]
    IdMismatch { expected: u8, actual: u8 },
    #[error("Invalid RADIUS packet: length mismatch (got {actual}, expected {declared})")]
    LengthMismatch { declared: usize, actual: usize },
    #[error("Invalid RADIUS packet: unknown code {0}")]
    UnknownCode(u8),
    #[error("Invalid RADIUS attribute {attr_type} at offset {offset}: length too small ({length})")]
    AttributeTooShort {
        attr_type: u8,
        offset: usize,
        length: usize,
    },
    #[error(
        "Invalid RADIUS attribute at offset {offset}: length {length} exceeds packet boundary {boundary}"
    )]
    AttributeOutOfBounds {
        offset: usize,
        length: usize,
        boundary: usize,
    },
    #[error("Attribute {attr_type} too long: {length} bytes encoded (max 255)")]
    AttributeTooLong { attr_type: u8, length: usize },
    #[error("Packet too large: {0} bytes")]
    PacketTooLarge(usize),
}
