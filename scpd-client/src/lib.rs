//! Service description fetcher for UPnP devices
//!
//! This crate downloads a service's SCPD document over HTTP and loads it
//! into an [`upnp_typedef::Service`]. All calls are blocking; the only wait
//! is the HTTP request itself, bounded by the timeout the caller passes.
//! Callers that need concurrency run fetches on their own threads; the
//! client is cheap to clone and shares its connection pool.

mod config;
mod error;
pub mod logging;

pub use config::ClientConfig;
pub use error::{FetchError, Result};
pub use scpd::ParseReport;

use std::io::Read;
use std::time::Duration;

use upnp_typedef::Service;
use xmltree::Element;

/// A blocking HTTP client for service description documents
#[derive(Debug, Clone)]
pub struct ScpdClient {
    agent: ureq::Agent,
    config: ClientConfig,
}

impl ScpdClient {
    /// Create a new client with default configuration
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    pub fn with_config(config: ClientConfig) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(config.connect_timeout)
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build();

        Self { agent, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Download the raw description document at `url`.
    ///
    /// Any status other than 200 is an error, including other 2xx codes.
    pub fn fetch_document(&self, url: &str, timeout: Duration) -> Result<Vec<u8>> {
        if url.trim().is_empty() {
            return Err(FetchError::InvalidArgument("empty description URL".to_string()));
        }

        tracing::debug!("Fetching service description: {}", url);

        let response = match self
            .agent
            .get(url)
            .set("Accept", "text/xml, application/xml")
            .timeout(timeout)
            .call()
        {
            Ok(response) => response,
            Err(ureq::Error::Status(code, response)) => {
                let status = response.status_text().to_string();
                tracing::warn!("Service description request failed: {} {} ({})", code, status, url);
                return Err(FetchError::HttpStatus { code, status });
            }
            Err(ureq::Error::Transport(transport)) => {
                if transport.kind() == ureq::ErrorKind::InvalidUrl {
                    return Err(FetchError::InvalidArgument(transport.to_string()));
                }
                return Err(FetchError::Network(transport.to_string()));
            }
        };

        if response.status() != 200 {
            let code = response.status();
            let status = response.status_text().to_string();
            tracing::warn!("Service description request failed: {} {} ({})", code, status, url);
            return Err(FetchError::HttpStatus { code, status });
        }

        let limit = self.config.max_body_bytes;
        let mut body = Vec::new();
        response
            .into_reader()
            .take((limit as u64).saturating_add(1))
            .read_to_end(&mut body)
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if body.len() > limit {
            return Err(FetchError::BodyTooLarge { limit });
        }

        tracing::debug!("Received {} bytes from {}", body.len(), url);
        Ok(body)
    }

    /// Fetch the description at `url` and load it into `service`.
    ///
    /// On error the service is left as it was. On success the returned
    /// report lists the entries that were skipped or rejected.
    pub fn fetch_and_parse(
        &self,
        url: &str,
        service: &mut Service,
        timeout: Duration,
    ) -> Result<ParseReport> {
        let body = self.fetch_document(url, timeout)?;

        let xml = Element::parse(body.as_slice()).map_err(|e| {
            tracing::debug!("Element::parse failed for {}: {}", url, e);
            FetchError::XmlMalformed(e.to_string())
        })?;

        let report = scpd::parse(&xml, service).map_err(|e| {
            tracing::debug!("SCPD parse failed for {}: {}", url, e);
            FetchError::from(e)
        })?;

        Ok(report)
    }

    /// Fetch the description at `url` into a new service
    pub fn fetch(&self, url: &str, timeout: Duration) -> Result<Service> {
        let mut service = Service::new();
        self.fetch_and_parse(url, &mut service, timeout)?;
        Ok(service)
    }
}

impl Default for ScpdClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Fetch and parse with a default client
pub fn fetch_and_parse(url: &str, service: &mut Service, timeout: Duration) -> Result<ParseReport> {
    ScpdClient::new().fetch_and_parse(url, service, timeout)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = ScpdClient::new();
        assert_eq!(client.config(), &ClientConfig::default());

        let fast = ScpdClient::with_config(ClientConfig::fast());
        assert_eq!(fast.config().timeout, Duration::from_secs(2));
    }

    #[test]
    fn test_empty_url_is_invalid_argument() {
        let client = ScpdClient::new();
        let mut service = Service::new();

        let err = client
            .fetch_and_parse("  ", &mut service, Duration::from_secs(1))
            .unwrap_err();

        assert!(matches!(err, FetchError::InvalidArgument(_)));
        assert!(service.is_empty());
    }

    #[test]
    fn test_unparseable_url_is_invalid_argument() {
        let client = ScpdClient::new();
        let err = client
            .fetch_document("not a url", Duration::from_secs(1))
            .unwrap_err();

        assert!(matches!(err, FetchError::InvalidArgument(_)));
    }
}
