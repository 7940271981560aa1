/// Core error types for Shelf
use thiserror::Error;

/// Result type alias using `ShelfError`
pub type Result<T> = std::result::Result<T, ShelfError>;

/// Core error type for Shelf
#[derive(Error, Debug)]
pub enum ShelfError {
    /// Configuration could not be built or deserialized
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl From<config::ConfigError> for ShelfError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}
