//! Error types for SCPD parsing and serialization

use thiserror::Error;

/// Errors that can occur while reading or writing an SCPD document
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScpdError {
    /// A required structural element is missing or empty
    #[error("Invalid SCPD document: {0}")]
    InvalidDocument(String),

    /// Allocation failed while building the service model
    #[error("Out of memory: {0}")]
    OutOfMemory(String),

    /// Input text is not well-formed XML
    #[error("Malformed XML: {0}")]
    MalformedXml(String),

    /// Text held by the model contains characters XML cannot represent
    #[error("Text of <{element}> cannot be written as XML: {text:?}")]
    InvalidText { element: &'static str, text: String },

    /// The output sink refused a write
    #[error("Failed to write SCPD document")]
    Write(#[from] std::fmt::Error),

    /// The destination buffer cannot hold the serialized document
    #[error("Buffer too small: {required} bytes required, capacity is {capacity}")]
    BufferTooSmall { required: usize, capacity: usize },
}

/// Result type alias for SCPD operations
pub type Result<T> = std::result::Result<T, ScpdError>;
