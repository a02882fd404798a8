//! Error types for conversion and output writing.

use thiserror::Error;

/// Result type for core conversion operations
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors that can occur while converting a document or writing its output
#[derive(Debug, Error)]
pub enum CoreError {
    /// Reading or parsing the source document failed
    #[error(transparent)]
    Xml(#[from] genviz_xml::XmlError),

    /// Rendering the JSON document failed
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Writing the output file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
