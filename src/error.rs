//! Error types for symptom-triage.
//!
//! Every fallible operation in the crate returns [`Result`], whose error type
//! is [`TriageError`].
//!
//! # Examples
//!
//! ```
//! use symptom_triage::error::{Result, TriageError};
//!
//! fn load() -> Result<()> {
//!     Err(TriageError::artifact("vocabulary is empty"))
//! }
//!
//! match load() {
//!     Ok(_) => println!("loaded"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for symptom-triage operations.
#[derive(Error, Debug)]
pub enum TriageError {
    /// I/O errors (artifact and resource files, stdin, stdout)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Binary artifact encoding errors
    #[error("Bincode error: {0}")]
    Bincode(#[from] bincode::Error),

    /// Malformed or inconsistent model / vectorizer artifacts
    #[error("Artifact error: {0}")]
    Artifact(String),

    /// Linguistic resource errors (stopword lists, lemma dictionaries)
    #[error("Resource error: {0}")]
    Resource(String),

    /// Analysis-related errors (char filters, tokenization, token filters)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Feature vector does not match the classifier's dimension
    #[error("Dimension mismatch: expected {expected} features, got {actual}")]
    Dimension { expected: usize, actual: usize },

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with TriageError.
pub type Result<T> = std::result::Result<T, TriageError>;

impl TriageError {
    /// Create a new artifact error.
    pub fn artifact<S: Into<String>>(msg: S) -> Self {
        TriageError::Artifact(msg.into())
    }

    /// Create a new resource error.
    pub fn resource<S: Into<String>>(msg: S) -> Self {
        TriageError::Resource(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        TriageError::Analysis(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        TriageError::Config(msg.into())
    }

    /// Create a new dimension mismatch error.
    pub fn dimension(expected: usize, actual: usize) -> Self {
        TriageError::Dimension { expected, actual }
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        TriageError::Other(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        TriageError::Other(format!("Invalid argument: {}", msg.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = TriageError::artifact("missing idf");
        assert_eq!(error.to_string(), "Artifact error: missing idf");

        let error = TriageError::resource("index.noun not found");
        assert_eq!(error.to_string(), "Resource error: index.noun not found");

        let error = TriageError::config("unknown part of speech");
        assert_eq!(
            error.to_string(),
            "Configuration error: unknown part of speech"
        );
    }

    #[test]
    fn test_anyhow_conversion() {
        fn fails() -> Result<()> {
            let cause: anyhow::Result<()> = Err(anyhow::anyhow!("label table is empty"));
            cause?;
            Ok(())
        }

        let error = fails().unwrap_err();
        assert!(matches!(error, TriageError::Anyhow(_)));
        assert_eq!(error.to_string(), "Anyhow error: label table is empty");
    }

    #[test]
    fn test_dimension_message() {
        let error = TriageError::dimension(40, 12);
        assert_eq!(
            error.to_string(),
            "Dimension mismatch: expected 40 features, got 12"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let triage_error = TriageError::from(io_error);

        match triage_error {
            TriageError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
