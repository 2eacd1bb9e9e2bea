//! Common error types for FBS

use thiserror::Error;

/// Common result type for FBS operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across FBS services
#[derive(Error, Debug)]
pub enum Error {
    /// Database operation error (wraps sqlx::Error)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Requested record not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid submission input (e.g. rating outside 1..=5)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Text generation call failed (network, quota, malformed response)
    #[error("Generation error: {0}")]
    Generation(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}
