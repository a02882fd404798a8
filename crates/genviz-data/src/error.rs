//! Error types for tabular data sources.

use thiserror::Error;

/// Result type for data operations
pub type Result<T> = std::result::Result<T, DataError>;

/// Errors that can occur while loading a tabular specification
#[derive(Debug, Error)]
pub enum DataError {
    /// Source file missing; callers may treat this as non-fatal
    #[error("Source file not found: {0}")]
    SourceNotFound(String),

    /// Failed to open workbook
    #[error("Failed to open workbook: {0}")]
    WorkbookOpen(String),

    /// Sheet not found in workbook
    #[error("Sheet not found: {0}")]
    SheetNotFound(String),

    /// Source has no header row
    #[error("Source has no header row: {0}")]
    EmptyTable(String),

    /// Required columns absent after header normalization
    #[error("Missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    /// CSV decode failure
    #[error("CSV error: {0}")]
    Csv(String),

    /// Excel decode failure
    #[error("Excel error: {0}")]
    Excel(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<calamine::XlsxError> for DataError {
    fn from(err: calamine::XlsxError) -> Self {
        DataError::Excel(err.to_string())
    }
}

impl From<csv::Error> for DataError {
    fn from(err: csv::Error) -> Self {
        DataError::Csv(err.to_string())
    }
}
