//! RADIUS attributes (RFC 2865 Section 5)

mod attribute;
mod types;

pub use attribute::{decode_attributes, Attribute, AttributeValue};
pub use types::AttributeType;
