//! Error types for the service model

use thiserror::Error;

/// Errors raised while building or mutating a service model
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypedefError {
    /// An action with the same name is already owned by the service
    #[error("Duplicate action: {0}")]
    DuplicateAction(String),

    /// Growing one of the service collections failed
    #[error("Out of memory: {0}")]
    OutOfMemory(String),

    /// The data-type name is not one of the UPnP primitive types
    #[error("Unknown data type: {0}")]
    UnknownDataType(String),

    /// Text could not be converted into a value of the requested data type
    #[error("Invalid value '{value}' for data type {data_type}")]
    InvalidValue { data_type: String, value: String },
}

/// Type alias for results returned by the service model
pub type Result<T> = std::result::Result<T, TypedefError>;
