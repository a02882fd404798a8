//! JSON output writing.
//!
//! Serializes conversion results as pretty-printed UTF-8 JSON under fixed
//! filenames in a caller-supplied output directory. The document is fully
//! rendered in memory before the file is opened, so a serialization
//! failure leaves any previous output untouched. There is no
//! temp-file/rename durability guarantee.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use crate::error::Result;

/// Output filename for the display tree
pub const GRAPH_DATA_FILE: &str = "graph_data.json";
/// Output filename for the specification lookup
pub const SPECIFICATION_FILE: &str = "specification.json";

/// Write a serializable document as pretty-printed JSON
///
/// Creates the output directory if needed and returns the full path of
/// the written file. Non-ASCII characters are emitted literally.
pub fn write_json<T: Serialize>(
    document: &T,
    output_dir: &Path,
    file_name: &str,
) -> Result<PathBuf> {
    let rendered = serde_json::to_string_pretty(document)?;

    fs::create_dir_all(output_dir)?;
    let path = output_dir.join(file_name);
    fs::write(&path, rendered)?;

    info!("Wrote {}", path.display());
    Ok(path)
}
