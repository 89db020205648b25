//! Error types for Warren.

use thiserror::Error;

/// Common error type for Warren.
#[derive(Error, Debug)]
pub enum WarrenError {
    /// Database error.
    ///
    /// Wraps errors from the underlying store backend. Errors from sqlx are
    /// automatically converted.
    #[error("database error: {0}")]
    Database(String),

    /// Document encode/decode error.
    ///
    /// A stored thread document could not be serialized or deserialized.
    #[error("document error: {0}")]
    Document(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Validation error for user input.
    #[error("validation error: {0}")]
    Validation(String),

    /// The referenced thread does not exist.
    #[error("thread not found")]
    ThreadNotFound,

    /// The referenced reply does not exist within its thread.
    #[error("reply not found")]
    ReplyNotFound,

    /// Delete password did not match the target resource.
    #[error("incorrect password")]
    IncorrectPassword,

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

// Conversion from sqlx errors
impl From<sqlx::Error> for WarrenError {
    fn from(e: sqlx::Error) -> Self {
        WarrenError::Database(e.to_string())
    }
}

// Conversion from serde_json errors (thread document encoding)
impl From<serde_json::Error> for WarrenError {
    fn from(e: serde_json::Error) -> Self {
        WarrenError::Document(e.to_string())
    }
}

/// Result type alias for Warren operations.
pub type Result<T> = std::result::Result<T, WarrenError>;
