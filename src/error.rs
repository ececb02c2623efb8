//! Error types for the Polarity library.
//!
//! All errors are represented by the [`PolarityError`] enum, which provides
//! detailed information about what went wrong at each pipeline stage.
//!
//! # Examples
//!
//! ```
//! use polarity::error::{PolarityError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(PolarityError::invalid_argument("Invalid input"))
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

/// The main error type for Polarity operations.
///
/// This enum represents all possible errors that can occur in the Polarity
/// library. It uses the `thiserror` crate for automatic `Error` trait
/// implementation and provides convenient constructor methods for creating
/// specific error types.
#[derive(Error, Debug)]
pub enum PolarityError {
    /// I/O errors (reading corpus files, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Corpus-related errors (malformed records, bad labels, etc.)
    #[error("Corpus error: {0}")]
    Corpus(String),

    /// An argument was outside its valid range or shape.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// An operation was called in the wrong state (e.g. transform before fit).
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

/// Result type alias for operations that may fail with PolarityError.
pub type Result<T> = std::result::Result<T, PolarityError>;

impl PolarityError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        PolarityError::Analysis(msg.into())
    }

    /// Create a new corpus error.
    pub fn corpus<S: Into<String>>(msg: S) -> Self {
        PolarityError::Corpus(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        PolarityError::InvalidArgument(msg.into())
    }

    /// Create a new invalid operation error.
    pub fn invalid_operation<S: Into<String>>(msg: S) -> Self {
        PolarityError::InvalidOperation(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        PolarityError::Other(msg.into())
    }
}
