//! Error types for the Tashih library.
//!
//! All fallible operations in Tashih report errors through the
//! [`TashihError`] enum. The matching, spell-checking, and orchestration
//! paths themselves are infallible by design and degrade to empty or
//! low-confidence results instead of erroring; `Result` shows up only at
//! the I/O edges (dictionary file loading, CLI output).
//!
//! # Examples
//!
//! ```
//! use tashih::error::{Result, TashihError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(TashihError::dictionary("empty term file"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for Tashih operations.
#[derive(Error, Debug)]
pub enum TashihError {
    /// I/O errors (dictionary files, CLI output, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Dictionary-related errors (malformed term or typo files)
    #[error("Dictionary error: {0}")]
    Dictionary(String),

    /// Intent rule errors (invalid patterns)
    #[error("Intent error: {0}")]
    Intent(String),

    /// Invalid operation
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with TashihError.
pub type Result<T> = std::result::Result<T, TashihError>;

impl TashihError {
    /// Create a new dictionary error.
    pub fn dictionary<S: Into<String>>(msg: S) -> Self {
        TashihError::Dictionary(msg.into())
    }

    /// Create a new intent error.
    pub fn intent<S: Into<String>>(msg: S) -> Self {
        TashihError::Intent(msg.into())
    }

    /// Create a new invalid operation error.
    pub fn invalid_operation<S: Into<String>>(msg: S) -> Self {
        TashihError::InvalidOperation(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        TashihError::Other(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        TashihError::Other(format!("Invalid argument: {}", msg.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = TashihError::dictionary("Test dictionary error");
        assert_eq!(error.to_string(), "Dictionary error: Test dictionary error");

        let error = TashihError::intent("Test intent error");
        assert_eq!(error.to_string(), "Intent error: Test intent error");

        let error = TashihError::invalid_argument("bad input");
        assert_eq!(error.to_string(), "Error: Invalid argument: bad input");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let tashih_error = TashihError::from(io_error);

        match tashih_error {
            TashihError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
