//! # genviz-data
//!
//! Tabular specification sources for genviz - read Excel or CSV
//! specification tables and build the block → tag lookup consumed by the
//! visualization layer.
//!
//! ## Features
//!
//! - **Excel support**: read the first (or a named) sheet of `.xlsx`
//!   workbooks using `calamine`
//! - **CSV support**: comma or semicolon separated files via `csv`
//! - **Header normalization**: trims, strips non-breaking spaces, and
//!   removes inner spaces before matching required column names
//!
//! ## Example
//!
//! ```rust,ignore
//! use genviz_data::SpecificationTable;
//!
//! let table = SpecificationTable::load("visualizer/Spec.xlsx")?;
//! if let Some(field) = table.get("Header", "ITEMID") {
//!     println!("{}: {}", field.frontend, field.bedeutung);
//! }
//! ```

pub mod error;
pub mod sources;
pub mod spec_table;

// Re-exports
pub use error::{DataError, Result};
pub use sources::{open_source, CsvOptions, CsvSource, ExcelSource, TableData, TableSource};
pub use spec_table::{FieldSpec, SpecificationTable};
