//! Error types for the biblectl project

use thiserror::Error;

/// Core error type for bible-api client operations
#[derive(Error, Debug)]
pub enum BibleError {
    /// Upstream responded with a non-success HTTP status
    #[error("HTTP {0}")]
    HttpStatus(u16),

    /// Network-level failure (DNS, refused connection)
    #[error("Transport error: {0}")]
    Transport(String),

    /// Response body is not valid JSON
    #[error("Invalid JSON in response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for bible-api client operations
pub type Result<T> = std::result::Result<T, BibleError>;
