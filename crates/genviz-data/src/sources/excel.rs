//! Excel/XLSX tabular source using calamine.

use std::path::Path;

use calamine::{open_workbook, Data, Reader, Xlsx, XlsxError};

use crate::error::{DataError, Result};
use crate::sources::{TableData, TableSource};

/// Excel workbook source
///
/// Reads one sheet (the first one unless a name is given) as a complete
/// header-plus-rows table.
pub struct ExcelSource {
    /// Path to the Excel file
    path: String,
    /// Sheet to read; first sheet when unset
    sheet: Option<String>,
}

impl ExcelSource {
    /// Create a new Excel source from a file path
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path_str = path.as_ref().display().to_string();

        if !path.as_ref().exists() {
            return Err(DataError::SourceNotFound(path_str));
        }

        Ok(Self {
            path: path_str,
            sheet: None,
        })
    }

    /// Read from a named sheet instead of the first one
    pub fn with_sheet(mut self, sheet: impl Into<String>) -> Self {
        self.sheet = Some(sheet.into());
        self
    }

    /// Convert a calamine cell to a string
    ///
    /// Whole-number floats lose the trailing `.0` so numeric tag columns
    /// read back the way they were typed.
    fn cell_to_string(cell: &Data) -> String {
        match cell {
            Data::Empty => String::new(),
            Data::String(s) => s.clone(),
            Data::Int(i) => i.to_string(),
            Data::Float(f) => {
                if f.fract() == 0.0 {
                    format!("{:.0}", f)
                } else {
                    f.to_string()
                }
            }
            Data::Bool(b) => b.to_string(),
            Data::Error(e) => format!("#ERROR: {:?}", e),
            Data::DateTime(dt) => format!("{}", dt),
            Data::DateTimeIso(s) => s.clone(),
            Data::DurationIso(s) => s.clone(),
        }
    }
}

impl TableSource for ExcelSource {
    fn read_table(&self) -> Result<TableData> {
        let mut workbook: Xlsx<_> = open_workbook(&self.path)
            .map_err(|e: XlsxError| DataError::WorkbookOpen(format!("{}: {}", self.path, e)))?;

        let sheet_name = match &self.sheet {
            Some(name) => name.clone(),
            None => workbook
                .sheet_names()
                .first()
                .cloned()
                .ok_or_else(|| DataError::SheetNotFound(format!("{}: no sheets", self.path)))?,
        };

        let range = workbook
            .worksheet_range(&sheet_name)
            .map_err(|e| DataError::SheetNotFound(format!("{}: {}", sheet_name, e)))?;

        let rows = range
            .rows()
            .map(|row| row.iter().map(Self::cell_to_string).collect())
            .collect();

        TableData::from_rows(rows, &self.path)
    }
}
