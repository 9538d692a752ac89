//! Error types for the description fetcher

use scpd::ScpdError;
use thiserror::Error;

/// Errors that can occur while fetching and loading a service description.
///
/// Each stage of the fetch reports its own variant, so callers can tell a
/// device that is unreachable apart from one that serves a broken document.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request could not be built from the given input
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Network or transport failure before a response was received
    #[error("Network/HTTP error: {0}")]
    Network(String),

    /// The device answered with something other than 200 OK
    #[error("HTTP status {code} {status}")]
    HttpStatus { code: u16, status: String },

    /// The response body exceeded the configured size limit
    #[error("Response body exceeds {limit} bytes")]
    BodyTooLarge { limit: usize },

    /// The response body is not well-formed XML
    #[error("XML parsing error: {0}")]
    XmlMalformed(String),

    /// The XML is not a usable SCPD document
    #[error(transparent)]
    Scpd(#[from] ScpdError),
}

/// Type alias for fetch results
pub type Result<T> = std::result::Result<T, FetchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scpd_error_conversion() {
        let error: FetchError = ScpdError::InvalidDocument("missing <actionList>".to_string()).into();
        assert!(matches!(error, FetchError::Scpd(ScpdError::InvalidDocument(_))));
        assert_eq!(error.to_string(), "Invalid SCPD document: missing <actionList>");
    }

    #[test]
    fn test_http_status_display() {
        let error = FetchError::HttpStatus {
            code: 404,
            status: "Not Found".to_string(),
        };
        assert_eq!(error.to_string(), "HTTP status 404 Not Found");
    }
}
