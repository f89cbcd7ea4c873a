//! Error types for table loading and code parsing.
//!
//! Normalization itself never fails: every pipeline returns `Option<String>`.
//! The [`NormalizeError`] type covers the edges around it, such as reading a
//! transliteration table or parsing an index code string.

use thiserror::Error;

/// Error type for the phrase-index library.
#[derive(Error, Debug)]
pub enum NormalizeError {
    /// A transliteration table was structurally invalid.
    #[error("Invalid transliteration table: {0}")]
    InvalidTable(String),

    /// An index-type code was not one of the recognized codes.
    #[error("Unknown index type: {0:?}")]
    UnknownIndexType(String),

    /// Malformed JSON in a table or configuration document.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error from the underlying source.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Convenience type alias for [`std::result::Result`] with [`NormalizeError`].
pub type Result<T> = std::result::Result<T, NormalizeError>;
