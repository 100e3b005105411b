//! Error types for the Marquee library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`MarqueeError`] enum. Load-time failures (a missing or malformed
//! catalogue, an empty corpus) are fatal to engine construction; a title
//! that resolves to nothing is recoverable and is surfaced to callers as a
//! structured outcome rather than a crash.
//!
//! # Examples
//!
//! ```
//! use marquee::error::{MarqueeError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(MarqueeError::invalid_operation("unsupported request"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("success"),
//!     Err(e) => eprintln!("error: {e}"),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Marquee operations.
#[derive(Error, Debug)]
pub enum MarqueeError {
    /// I/O errors (catalogue file access, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Catalogue source missing, unreadable, or malformed.
    #[error("Load error: {0}")]
    Load(String),

    /// The vectorizer was given no usable text.
    #[error("Empty corpus: {0}")]
    EmptyCorpus(String),

    /// Text analysis errors (tokenization, filtering).
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// A user-supplied title resolved to no catalogue entry.
    #[error("Title not found: {0}")]
    TitleNotFound(String),

    /// Invalid operation (dimension mismatch, out-of-range row, etc.)
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic anyhow error.
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with [`MarqueeError`].
pub type Result<T> = std::result::Result<T, MarqueeError>;

impl MarqueeError {
    /// Create a new load error.
    pub fn load<S: Into<String>>(msg: S) -> Self {
        MarqueeError::Load(msg.into())
    }

    /// Create a new empty-corpus error.
    pub fn empty_corpus<S: Into<String>>(msg: S) -> Self {
        MarqueeError::EmptyCorpus(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        MarqueeError::Analysis(msg.into())
    }

    /// Create a new title-not-found error.
    pub fn title_not_found<S: Into<String>>(query: S) -> Self {
        MarqueeError::TitleNotFound(query.into())
    }

    /// Create a new invalid-operation error.
    pub fn invalid_operation<S: Into<String>>(msg: S) -> Self {
        MarqueeError::InvalidOperation(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MarqueeError::load("catalogue file missing");
        assert_eq!(err.to_string(), "Load error: catalogue file missing");

        let err = MarqueeError::title_not_found("xyzzynotamovie");
        assert_eq!(err.to_string(), "Title not found: xyzzynotamovie");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "no such file");
        let err: MarqueeError = io_err.into();
        assert!(matches!(err, MarqueeError::Io(_)));
    }
}
