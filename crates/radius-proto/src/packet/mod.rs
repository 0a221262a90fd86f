//! RADIUS packets: the Access-Request we send and the responses we accept

mod code;
mod error;
mod request;
mod response;

pub use code::Code;
pub use error::PacketError;
pub use request::{build_access_request, AccessRequest};
pub use response::{decode_response, Response, ResponseCode, Unverified};

/// Header size: 1 code + 1 id + 2 length + 16 authenticator
pub const HEADER_LENGTH: usize = 20;
/// Largest value the 16-bit length field can declare
pub const MAX_PACKET_SIZE: usize = u16::MAX as usize;
