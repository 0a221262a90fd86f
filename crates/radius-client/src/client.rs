use crate::config::{ClientConfig, ConfigError};
use crate::error::ClientResult;
use crate::transport;
use radius_proto::{decode_response, generate_identifier, AccessRequest, AttributeValue, Response};
use tracing::{debug, warn};

/// Secret and attributes for one Access-Request
#[derive(Debug, Clone)]
pub struct AccessRequestOptions {
    /// Shared secret, also the key for User-Password hiding
    pub secret: String,
    /// Attributes in the order they go on the wire
    pub attributes: Vec<(u8, AttributeValue)>,
}

impl AccessRequestOptions {
    pub fn new(secret: impl Into<String>) -> Self {
        AccessRequestOptions {
            secret: secret.into(),
            attributes: Vec::new(),
        }
    }

    pub fn attribute(mut self, attr_type: impl Into<u8>, value: impl Into<AttributeValue>) -> Self {
        self.attributes.push((attr_type.into(), value.into()));
        self
    }
}

/// RADIUS authentication client.
///
/// Holds configuration only. Every [`Client::access_request`] call owns its
/// own socket and timer, so one client can be shared between concurrent tasks.
#[derive(Debug, Clone)]
pub struct Client {
    config: ClientConfig,
}

/// Fill in zeroed fields, validate `config` and build a client around it
pub fn create_client(config: ClientConfig) -> Result<Client, ConfigError> {
    Client::new(config)
}

impl Client {
    pub fn new(config: ClientConfig) -> Result<Self, ConfigError> {
        let config = config.with_defaults();
        config.validate()?;
        if config.retries > 1 {
            debug!(
                retries = config.retries,
                "Retry count is recorded but each request is sent once"
            );
        }
        Ok(Client { config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Configured retry count. Not consulted: a timed-out request is not re-sent.
    pub fn retries(&self) -> u32 {
        self.config.retries
    }

    /// Send one Access-Request and wait for its Accept, Reject or Challenge.
    ///
    /// Encoding errors surface before any network I/O. The first datagram
    /// received is the only one considered; it must carry the request's
    /// identifier and pass validation, otherwise the whole exchange fails.
    pub async fn access_request(&self, options: AccessRequestOptions) -> ClientResult<Response> {
        let identifier = generate_identifier();
        let request = AccessRequest::build(
            identifier,
            options.secret.as_bytes(),
            options.attributes,
        )?;
        let packet = request.encode()?;

        debug!(
            host = %self.config.host,
            port = self.config.host_port,
            identifier = identifier,
            length = packet.len(),
            "Sending Access-Request"
        );

        let datagram = transport::send(
            &self.config.host,
            self.config.host_port,
            &packet,
            self.config.timeout(),
        )
        .await?;

        let response = decode_response(&datagram, identifier).inspect_err(|e| {
            warn!(
                host = %self.config.host,
                identifier = identifier,
                error = %e,
                "Rejected RADIUS response"
            );
        })?;

        debug!(
            host = %self.config.host,
            identifier = identifier,
            code = %response.code,
            attributes = response.attributes.len(),
            "Access-Request answered"
        );

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;
    use radius_proto::{AttributeType, PacketError};

    #[test]
    fn test_create_client_validates() {
        assert!(create_client(ClientConfig::new("localhost")).is_ok());
        assert!(create_client(ClientConfig::new("")).is_err());
    }

    #[test]
    fn test_create_client_applies_defaults() {
        let config = ClientConfig::new("localhost")
            .with_port(0)
            .with_timeout(std::time::Duration::ZERO)
            .with_retries(0);
        let client = create_client(config).unwrap();
        assert_eq!(client.config().host_port, 1812);
        assert_eq!(client.config().timeout_ms, 3000);
        assert_eq!(client.retries(), 1);
    }

    #[test]
    fn test_retries_kept_but_exposed() {
        let client = create_client(ClientConfig::new("localhost").with_retries(5)).unwrap();
        assert_eq!(client.retries(), 5);
    }

    #[test]
    fn test_options_builder() {
        let options = AccessRequestOptions::new("secret")
            .attribute(AttributeType::UserName, "alice")
            .attribute(AttributeType::NasPort, 7u32);
        assert_eq!(options.attributes.len(), 2);
        assert_eq!(options.attributes[0].0, 1);
        assert_eq!(options.attributes[1].1, AttributeValue::Text("7".to_string()));
    }

    #[tokio::test]
    async fn test_oversized_attribute_fails_before_io() {
        // Port 9 on a documentation address: reaching the network would time out instead
        let config = ClientConfig::new("192.0.2.1")
            .with_port(9)
            .with_timeout(std::time::Duration::from_secs(30));
        let client = create_client(config).unwrap();

        let options = AccessRequestOptions::new("secret")
            .attribute(AttributeType::ReplyMessage, "x".repeat(300));
        let err = client.access_request(options).await.unwrap_err();
        assert!(matches!(
            err,
            ClientError::Packet(PacketError::AttributeTooLong { .. })
        ));
    }
}
