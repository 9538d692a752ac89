//! Configuration for the description fetcher
//!
//! Controls connection behaviour of [`crate::ScpdClient`]. Per-request
//! timeouts passed to the fetch methods override [`ClientConfig::timeout`].

use std::time::Duration;

/// Configuration for the ScpdClient
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Overall request timeout used when the caller does not pass one
    /// Default: 10 seconds
    pub timeout: Duration,

    /// Timeout for establishing the TCP connection
    /// Default: 5 seconds
    pub connect_timeout: Duration,

    /// Value of the User-Agent header
    /// Default: "upnp-stack/<version> UPnP/1.0"
    pub user_agent: String,

    /// Largest response body accepted, in bytes
    /// Default: 1 MiB
    pub max_body_bytes: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            connect_timeout: Duration::from_secs(5),
            user_agent: format!("upnp-stack/{} UPnP/1.0", env!("CARGO_PKG_VERSION")),
            max_body_bytes: 1024 * 1024,
        }
    }
}

impl ClientConfig {
    /// Create a new ClientConfig with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a ClientConfig for devices on the local segment that answer quickly
    pub fn fast() -> Self {
        Self {
            timeout: Duration::from_secs(2),
            connect_timeout: Duration::from_secs(1),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_max_body_bytes(mut self, limit: usize) -> Self {
        self.max_body_bytes = limit;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.connect_timeout, Duration::from_secs(5));
        assert_eq!(config.max_body_bytes, 1024 * 1024);
        assert!(config.user_agent.starts_with("upnp-stack/"));
    }

    #[test]
    fn test_fast_preset_keeps_other_defaults() {
        let config = ClientConfig::fast();
        assert_eq!(config.timeout, Duration::from_secs(2));
        assert_eq!(config.max_body_bytes, ClientConfig::default().max_body_bytes);
    }

    #[test]
    fn test_builder_setters() {
        let config = ClientConfig::new()
            .with_timeout(Duration::from_millis(750))
            .with_connect_timeout(Duration::from_millis(250))
            .with_user_agent("test-agent")
            .with_max_body_bytes(512);

        assert_eq!(config.timeout, Duration::from_millis(750));
        assert_eq!(config.connect_timeout, Duration::from_millis(250));
        assert_eq!(config.user_agent, "test-agent");
        assert_eq!(config.max_body_bytes, 512);
    }
}
