//! Tabular source implementations.
//!
//! A source yields the whole table at once: one header row plus all data
//! rows, every cell stringified. The specification loader consumes that
//! shape without knowing which file format produced it.

pub mod csv;
pub mod excel;

pub use csv::{CsvOptions, CsvSource};
pub use excel::ExcelSource;

use std::path::Path;

use crate::error::{DataError, Result};

/// Raw tabular payload: one header row plus data rows
#[derive(Debug, Clone, PartialEq)]
pub struct TableData {
    /// Header cells as written in the source
    pub headers: Vec<String>,
    /// Data rows in source order
    pub rows: Vec<Vec<String>>,
}

impl TableData {
    /// Split raw rows into a header row and data rows
    ///
    /// Fails with [`DataError::EmptyTable`] when the source yields no rows
    /// at all.
    pub fn from_rows(mut rows: Vec<Vec<String>>, origin: &str) -> Result<Self> {
        if rows.is_empty() {
            return Err(DataError::EmptyTable(origin.to_string()));
        }
        let headers = rows.remove(0);
        Ok(Self { headers, rows })
    }
}

/// Trait for sources that can provide a header row plus data rows
pub trait TableSource {
    /// Read the full table, first row interpreted as headers
    fn read_table(&self) -> Result<TableData>;
}

/// Open the source matching the file extension
///
/// `.xlsx`/`.xlsm` open as Excel workbooks; anything else is read as CSV.
pub fn open_source(path: impl AsRef<Path>) -> Result<Box<dyn TableSource>> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default();

    if extension.eq_ignore_ascii_case("xlsx") || extension.eq_ignore_ascii_case("xlsm") {
        Ok(Box::new(ExcelSource::new(path)?))
    } else {
        Ok(Box::new(CsvSource::new(path)?))
    }
}
