//! Error types for the docsearch library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`DocSearchError`] enum. Absent query matches are not errors: they are
//! reported as an empty result (`Ok(None)`).
//!
//! # Examples
//!
//! ```
//! use docsearch::error::{DocSearchError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(DocSearchError::invalid_key("c4t"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::collections::TryReserveError;
use std::io;

use thiserror::Error;

/// The main error type for docsearch operations.
#[derive(Error, Debug)]
pub enum DocSearchError {
    /// I/O errors (loading documents from disk, reading config files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A word could not be inserted into the trie because it contains
    /// non-alphabetic characters.
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// An allocation needed to build a document or a result could not be made.
    #[error("Resource exhausted: {0}")]
    ResourceExhausted(String),

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with DocSearchError.
pub type Result<T> = std::result::Result<T, DocSearchError>;

impl DocSearchError {
    /// Create a new invalid key error.
    pub fn invalid_key<S: Into<String>>(key: S) -> Self {
        DocSearchError::InvalidKey(key.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        DocSearchError::InvalidConfig(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        DocSearchError::Other(msg.into())
    }

    /// Wrap a failed reservation, naming what was being allocated.
    pub(crate) fn allocation(what: &str, err: TryReserveError) -> Self {
        DocSearchError::ResourceExhausted(format!("{what}: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = DocSearchError::invalid_key("c4t");
        assert_eq!(error.to_string(), "Invalid key: c4t");

        let error = DocSearchError::other("not a directory: docs");
        assert_eq!(error.to_string(), "Error: not a directory: docs");

        let error = DocSearchError::invalid_config("num_buckets must be positive");
        assert_eq!(
            error.to_string(),
            "Invalid configuration: num_buckets must be positive"
        );
    }

    #[test]
    fn test_allocation_error() {
        let err = Vec::<u64>::new().try_reserve(usize::MAX).unwrap_err();
        let error = DocSearchError::allocation("word map buckets", err);

        match error {
            DocSearchError::ResourceExhausted(msg) => assert!(msg.starts_with("word map buckets")),
            _ => panic!("Expected resource exhausted variant"),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = DocSearchError::from(io_error);

        match error {
            DocSearchError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
