//! Error types for FruityLookup

use thiserror::Error;

/// Core error type for fruit lookups
#[derive(Error, Debug)]
pub enum FruityError {
    /// The API has no fruit with the requested name
    #[error("Fruit '{0}' not found")]
    NotFound(String),

    /// Network failure or unsuccessful (non-404) HTTP response
    #[error("Failed to connect to FruityVice API: {0}")]
    Transport(String),

    /// Unknown output format tag
    #[error("Invalid format type: {0}. Use 'human' or 'machine'.")]
    InvalidFormat(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for FruityLookup operations
pub type Result<T> = std::result::Result<T, FruityError>;

impl From<serde_json::Error> for FruityError {
    fn from(err: serde_json::Error) -> Self {
        FruityError::Serialization(err.to_string())
    }
}
