//! Minimal RADIUS authentication client
//!
//! Sends a single Access-Request over UDP and resolves it to the server's
//! Access-Accept, Access-Reject or Access-Challenge, built on the
//! `radius-proto` codec.
//!
//! # Features
//!
//! - Async I/O with Tokio, one socket per request
//! - Configurable timeout (default 3000 ms) and port (default 1812)
//! - Fail-closed response validation
//!
//! Requests are never retried, whatever `retries` is set to, and the
//! Response Authenticator is not verified.
//!
//! # Example
//!
//! ```rust,no_run
//! use radius_client::{create_client, AccessRequestOptions, ClientConfig};
//! use radius_proto::AttributeType;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = create_client(ClientConfig::new("127.0.0.1"))?;
//!
//!     let response = client
//!         .access_request(
//!             AccessRequestOptions::new("testing123")
//!                 .attribute(AttributeType::UserName, "alice")
//!                 .attribute(AttributeType::UserPassword, "password"),
//!         )
//!         .await?;
//!
//!     println!("{}", response.code);
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod transport;

pub use client::{create_client, AccessRequestOptions, Client};
pub use config::{ClientConfig, ConfigError};
pub use error::{ClientError, ClientResult};
