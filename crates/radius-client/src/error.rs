use crate::config::ConfigError;
use radius_proto::PacketError;
use std::time::Duration;
use thiserror::Error;

/// Failure of a single Access-Request exchange
#[derive(Error, Debug)]
pub enum ClientError {
    /// No datagram arrived within the configured window
    #[error("RADIUS request timed out after {0:?}")]
    Timeout(Duration),
    /// Socket-level failure: resolve, bind, send or receive
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// The request could not be encoded or the response failed validation
    #[error("{0}")]
    Packet(#[from] PacketError),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Host {0} did not resolve to any address")]
    NoAddress(String),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
