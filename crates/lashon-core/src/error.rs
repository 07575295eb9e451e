//! Error types for lashon.

use thiserror::Error;

/// Main error type for lashon operations
#[derive(Error, Debug)]
pub enum LashonError {
    /// Gender name could not be parsed
    #[error("Unknown gender '{0}' (expected male, female or neutral)")]
    UnknownGender(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Preferences serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias using LashonError
pub type LashonResult<T> = Result<T, LashonError>;
