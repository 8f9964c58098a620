//! Error types for the Phalanx library.
//!
//! All errors are represented by the [`PhalanxError`] enum. Sub-analyzer
//! failures travel through the combinator untouched, so the variant a caller
//! sees is the variant the failing pipeline produced.
//!
//! # Examples
//!
//! ```
//! use phalanx::error::{PhalanxError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(PhalanxError::invalid_config("missing sub_analyzers"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Phalanx operations.
#[derive(Error, Debug)]
pub enum PhalanxError {
    /// I/O errors (reading settings or input files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (tokenization, filtering, resolution)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Invalid analyzer or combo configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

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

/// Result type alias for operations that may fail with PhalanxError.
pub type Result<T> = std::result::Result<T, PhalanxError>;

impl PhalanxError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        PhalanxError::Analysis(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        PhalanxError::Config(msg.into())
    }

    /// Create a new not found error.
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        PhalanxError::Analysis(format!("Not found: {}", msg.into()))
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        PhalanxError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = PhalanxError::analysis("Test analysis error");
        assert_eq!(error.to_string(), "Analysis error: Test analysis error");

        let error = PhalanxError::invalid_config("no sub_analyzers");
        assert_eq!(error.to_string(), "Invalid configuration: no sub_analyzers");

        let error = PhalanxError::not_found("analyzer [foo]");
        assert_eq!(error.to_string(), "Analysis error: Not found: analyzer [foo]");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let phalanx_error = PhalanxError::from(io_error);

        match phalanx_error {
            PhalanxError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
