//! Error types for XML parsing.

use thiserror::Error;

/// Result type for XML operations
pub type Result<T> = std::result::Result<T, XmlError>;

/// Errors that can occur while reading or parsing an XML document
#[derive(Debug, Error)]
pub enum XmlError {
    /// Source file does not exist
    #[error("Source file not found: {0}")]
    SourceNotFound(String),

    /// Reading the document failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The document is not well-formed markup
    #[error("Malformed XML in {path}: {message}")]
    Malformed {
        /// Origin of the document (file path, or "<string>" for in-memory input)
        path: String,
        /// Parser failure detail
        message: String,
    },
}
