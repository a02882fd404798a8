//! genviz CLI - Command-line interface library
//!
//! This library provides the CLI functionality for genviz:
//! - Convert: XML document → display tree JSON (`graph_data.json`)
//! - Spec: tabular specification → block/tag lookup JSON (`specification.json`)
//!
//! # Binary Usage
//!
//! ```bash
//! # Convert an XML document for the visualizer
//! genviz convert document.xml --output visualizer
//!
//! # Same document, generic grouped dictionary form
//! genviz convert document.xml --grouped
//!
//! # Convert the specification table
//! genviz spec visualizer/Spec.xlsx
//! ```

pub mod app;

// Re-export main entry point and commands
pub use app::{convert_command, run_cli, spec_command};
