//! genviz-core - XML documents to visualization JSON
//!
//! Core library for genviz: builds the display-oriented tree the
//! visualization page renders, offers the generic grouped converter as a
//! secondary utility, and writes both as pretty-printed JSON documents.
//!
//! # Example
//!
//! ```
//! use genviz_core::build_tree;
//! use genviz_xml::parse_str;
//!
//! let root = parse_str("<ROOT><ITEMHEADER><ITEMID>A$$1</ITEMID></ITEMHEADER></ROOT>").unwrap();
//! let tree = build_tree(&root);
//!
//! assert_eq!(tree.name, "ROOT");
//! assert_eq!(tree.item_id, "A$$1");
//! ```

pub mod builder;
pub mod error;
pub mod grouped;
pub mod tree;
pub mod writer;

// Re-exports
pub use builder::{build_tree, enrich_node, extract_item_id};
pub use error::{CoreError, Result};
pub use grouped::to_grouped_value;
pub use tree::{TreeNode, UNKNOWN_ID};
pub use writer::{write_json, GRAPH_DATA_FILE, SPECIFICATION_FILE};

use std::path::{Path, PathBuf};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// End-to-end conversion facade
///
/// Bundles parse, build, and write for callers that hand over an input
/// path and an output directory explicitly. No ambient state is consulted.
pub struct ConvertEngine;

impl ConvertEngine {
    /// Parse an XML document and write its display tree
    ///
    /// # Arguments
    /// * `input` - Path to the XML document
    /// * `output_dir` - Directory receiving `graph_data.json`
    ///
    /// # Returns
    /// The path of the written JSON file
    pub fn convert_document(input: &Path, output_dir: &Path) -> Result<PathBuf> {
        let root = genviz_xml::parse_file(input)?;
        let tree = build_tree(&root);
        write_json(&tree, output_dir, GRAPH_DATA_FILE)
    }

    /// Parse an XML document and write its grouped dictionary form
    pub fn convert_document_grouped(input: &Path, output_dir: &Path) -> Result<PathBuf> {
        let root = genviz_xml::parse_file(input)?;
        let value = to_grouped_value(&root);
        write_json(&value, output_dir, GRAPH_DATA_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert_eq!(VERSION, "0.2.0");
    }
}
