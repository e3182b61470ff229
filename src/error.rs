//! Error types for vidframe.

use thiserror::Error;

/// Result type for vidframe operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for vidframe operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A required descriptor field is absent in strict mode.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// The descriptor JSON did not match the expected shape.
    #[error("Invalid descriptor: {0}")]
    Descriptor(#[from] serde_json::Error),

    /// A classifier collaborator failed.
    #[error("Classifier error: {0}")]
    Classify(String),

    /// An attribute serializer collaborator failed.
    #[error("Attribute serializer error: {0}")]
    Serialize(String),
}

impl Error {
    /// Create a classifier error.
    pub fn classify(msg: impl Into<String>) -> Self {
        Self::Classify(msg.into())
    }

    /// Create an attribute serializer error.
    pub fn serialize(msg: impl Into<String>) -> Self {
        Self::Serialize(msg.into())
    }
}
