use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Where and how to reach the RADIUS server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Server hostname or IP address
    pub host: String,

    /// Server authentication port
    #[serde(default = "default_host_port", alias = "hostPort")]
    pub host_port: u16,

    /// Time to wait for a response, in milliseconds
    #[serde(default = "default_timeout_ms", alias = "timeout")]
    pub timeout_ms: u64,

    /// Retry count. Accepted for compatibility with existing monitor
    /// definitions; requests are sent exactly once.
    #[serde(default = "default_retries")]
    pub retries: u32,
}

fn default_host_port() -> u16 {
    1812 // Standard RADIUS authentication port
}

fn default_timeout_ms() -> u64 {
    3000
}

fn default_retries() -> u32 {
    1
}

impl ClientConfig {
    /// Configuration for `host` with every other field at its default
    pub fn new(host: impl Into<String>) -> Self {
        ClientConfig {
            host: host.into(),
            host_port: default_host_port(),
            timeout_ms: default_timeout_ms(),
            retries: default_retries(),
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.host_port = port;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        self
    }

    pub fn with_retries(mut self, retries: u32) -> Self {
        self.retries = retries;
        self
    }

    /// Replace a zero port, timeout or retry count with its default.
    ///
    /// Monitor definitions use 0 to mean "unset".
    pub fn with_defaults(mut self) -> Self {
        if self.host_port == 0 {
            self.host_port = default_host_port();
        }
        if self.timeout_ms == 0 {
            self.timeout_ms = default_timeout_ms();
        }
        if self.retries == 0 {
            self.retries = default_retries();
        }
        self
    }

    /// Parse a JSON configuration, fill in zeroed fields and validate it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config = serde_json::from_str::<ClientConfig>(json)?.with_defaults();
        config.validate()?;
        Ok(config)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Validate configuration. Zeroed fields are not errors; see [`ClientConfig::with_defaults`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::Invalid("Host cannot be empty".to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::new("radius.example.net");
        assert_eq!(config.host_port, 1812);
        assert_eq!(config.timeout(), Duration::from_millis(3000));
        assert_eq!(config.retries, 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_defaults() {
        let config = ClientConfig::from_json(r#"{"host": "10.0.0.5"}"#).unwrap();
        assert_eq!(config, ClientConfig::new("10.0.0.5"));
    }

    #[test]
    fn test_from_json_monitor_field_names() {
        let config =
            ClientConfig::from_json(r#"{"host": "10.0.0.5", "hostPort": 11812, "timeout": 500, "retries": 4}"#)
                .unwrap();
        assert_eq!(config.host_port, 11812);
        assert_eq!(config.timeout_ms, 500);
        assert_eq!(config.retries, 4);
    }

    #[test]
    fn test_config_validation() {
        let mut config = ClientConfig::new("localhost");
        assert!(config.validate().is_ok());

        config.host = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_fields_take_defaults() {
        let config = ClientConfig::new("localhost")
            .with_port(0)
            .with_timeout(Duration::ZERO)
            .with_retries(0)
            .with_defaults();
        assert_eq!(config, ClientConfig::new("localhost"));

        let config = ClientConfig::new("localhost")
            .with_port(1645)
            .with_timeout(Duration::from_millis(250))
            .with_retries(2)
            .with_defaults();
        assert_eq!(config.host_port, 1645);
        assert_eq!(config.timeout_ms, 250);
        assert_eq!(config.retries, 2);
    }

    #[test]
    fn test_from_json_zero_fields_take_defaults() {
        let config =
            ClientConfig::from_json(r#"{"host": "10.0.0.5", "hostPort": 0, "timeout": 0, "retries": 0}"#)
                .unwrap();
        assert_eq!(config, ClientConfig::new("10.0.0.5"));
    }

    #[test]
    fn test_huge_timeout_saturates() {
        let config = ClientConfig::new("localhost").with_timeout(Duration::MAX);
        assert_eq!(config.timeout_ms, u64::MAX);

        let config = ClientConfig::new("localhost").with_timeout(Duration::from_millis(1500));
        assert_eq!(config.timeout_ms, 1500);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(matches!(
            ClientConfig::from_json("{not json"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            ClientConfig::from_json(r#"{"host": ""}"#),
            Err(ConfigError::Invalid(_))
        ));
    }
}
