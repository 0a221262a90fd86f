//! RADIUS Access-Request/Response codec
//!
//! This crate implements the client side of the RADIUS authentication
//! exchange (RFC 2865) without any third-party RADIUS dependency.
//!
//! # Features
//!
//! - Access-Request encoding with a random Request Authenticator
//! - MD5-based User-Password hiding (RFC 2865 Section 5.2)
//! - Fail-closed decoding of Access-Accept, Access-Reject and Access-Challenge
//!
//! The Response Authenticator is *not* verified; decoded responses carry it
//! wrapped in [`Unverified`].
//!
//! # Example
//!
//! ```rust
//! use radius_proto::{AccessRequest, AttributeType, AttributeValue};
//!
//! let attributes: Vec<(u8, AttributeValue)> = vec![
//!     (AttributeType::UserName.as_u8(), "alice".into()),
//!     (AttributeType::UserPassword.as_u8(), "password".into()),
//! ];
//! let request = AccessRequest::build(1, b"secret", attributes).unwrap();
//!
//! // Encode to bytes
//! let bytes = request.encode().unwrap();
//! assert_eq!(bytes[0], 1);
//! ```

pub mod attributes;
pub mod auth;
pub mod packet;

pub use attributes::{decode_attributes, Attribute, AttributeType, AttributeValue};
pub use auth::{
    decrypt_user_password, encrypt_user_password, generate_identifier,
    generate_request_authenticator,
};
pub use packet::{
    build_access_request, decode_response, AccessRequest, Code, PacketError, Response,
    ResponseCode, Unverified,
};
