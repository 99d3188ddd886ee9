//! Error types for the Marquee library.
//!
//! The grouping and normalization functions themselves are infallible; every
//! input string, including the empty string, falls through to a defined
//! result. Errors only arise at the edges, where the CLI reads venue files
//! and serializes output. All of those are represented by the
//! [`MarqueeError`] enum.

use std::io;

use thiserror::Error;

/// The main error type for Marquee operations.
#[derive(Error, Debug)]
pub enum MarqueeError {
    /// I/O errors (reading venue files, writing output)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid operation
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with MarqueeError.
pub type Result<T> = std::result::Result<T, MarqueeError>;

impl MarqueeError {
    /// Create a new invalid operation error.
    pub fn invalid_operation<S: Into<String>>(msg: S) -> Self {
        MarqueeError::InvalidOperation(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        MarqueeError::Other(msg.into())
    }
}
