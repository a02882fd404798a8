//! Specification table loading.
//!
//! Builds the block → tag → field lookup the visualization page uses to
//! annotate tree nodes. The loader consumes [`TableData`] and is agnostic
//! of whether an Excel workbook or a CSV file produced it.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Serialize;
use tracing::{debug, info};

use crate::error::{DataError, Result};
use crate::sources::{open_source, TableData};

/// Header of the XML tag column, after normalization
const TAG_COLUMN: &str = "XML-Tag";
/// Header of the frontend field column, after normalization
const FIELD_COLUMN: &str = "frontendBuilderFeld";
/// Header of the meaning column, after normalization
const MEANING_COLUMN: &str = "Bedeutung";
/// Header of the block column, after normalization
const BLOCK_COLUMN: &str = "Block";

/// Display metadata for one XML tag within a block
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldSpec {
    /// Name of the corresponding frontend builder field
    pub frontend: String,
    /// Human-readable meaning of the tag
    pub bedeutung: String,
}

/// Lookup of display metadata, keyed by block name, then tag name
///
/// Serialized key order is sorted; the lookup itself is unordered.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SpecificationTable {
    blocks: BTreeMap<String, BTreeMap<String, FieldSpec>>,
}

impl SpecificationTable {
    /// Load the lookup from a tabular file, picking the source by extension
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = open_source(path)?;
        let data = source.read_table()?;

        let table = Self::from_table(data)?;
        info!(
            "Loaded specification table from {} ({} blocks)",
            path.display(),
            table.block_count()
        );
        Ok(table)
    }

    /// Build the lookup from raw table data
    ///
    /// Fails as a whole when any required column is missing after header
    /// normalization; rows without a tag or block are skipped silently, and
    /// later rows overwrite earlier ones for the same (block, tag) key.
    pub fn from_table(data: TableData) -> Result<Self> {
        let normalized: Vec<String> = data
            .headers
            .iter()
            .map(|header| normalize_header(header))
            .collect();
        let lookup = |name: &str| normalized.iter().position(|header| header == name);

        let (tag_col, field_col, meaning_col, block_col) = match (
            lookup(TAG_COLUMN),
            lookup(FIELD_COLUMN),
            lookup(MEANING_COLUMN),
            lookup(BLOCK_COLUMN),
        ) {
            (Some(tag), Some(field), Some(meaning), Some(block)) => (tag, field, meaning, block),
            (tag, field, meaning, block) => {
                let missing = [
                    (TAG_COLUMN, tag),
                    (FIELD_COLUMN, field),
                    (MEANING_COLUMN, meaning),
                    (BLOCK_COLUMN, block),
                ]
                .iter()
                .filter(|(_, found)| found.is_none())
                .map(|(name, _)| (*name).to_string())
                .collect();
                return Err(DataError::MissingColumns(missing));
            }
        };

        let mut blocks: BTreeMap<String, BTreeMap<String, FieldSpec>> = BTreeMap::new();

        for row in &data.rows {
            let cell = |index: usize| row.get(index).map(|value| value.trim()).unwrap_or("");

            let tag = cell(tag_col).replace('<', "").replace('>', "");
            let block = cell(block_col);

            if tag.is_empty() || block.is_empty() {
                debug!("Skipping specification row without tag or block");
                continue;
            }

            let spec = FieldSpec {
                frontend: cell(field_col).to_string(),
                bedeutung: cell(meaning_col).to_string(),
            };
            // Later duplicates of the same (block, tag) key win.
            blocks.entry(block.to_string()).or_default().insert(tag, spec);
        }

        Ok(Self { blocks })
    }

    /// Look up the field spec for a (block, tag) pair
    pub fn get(&self, block: &str, tag: &str) -> Option<&FieldSpec> {
        self.blocks.get(block).and_then(|tags| tags.get(tag))
    }

    /// Number of blocks in the lookup
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Whether the lookup holds no entries at all
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// Normalize a header cell: trim, then drop spaces and non-breaking spaces
fn normalize_header(raw: &str) -> String {
    raw.trim()
        .chars()
        .filter(|c| *c != ' ' && *c != '\u{00a0}')
        .collect()
}
