//! CLI application logic
//!
//! Contains the command-line interface implementation.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::warn;

use genviz_core::{
    build_tree, to_grouped_value, write_json, GRAPH_DATA_FILE, SPECIFICATION_FILE,
};
use genviz_data::{DataError, SpecificationTable};
use genviz_xml::parse_file;

/// Default output directory, served as-is to the visualization page
const DEFAULT_OUTPUT_DIR: &str = "visualizer";

/// Conventional specification table location
const DEFAULT_SPEC_FILE: &str = "visualizer/Spec.xlsx";

#[derive(Parser)]
#[command(name = "genviz")]
#[command(author, version, about = "XML documents to visualization JSON", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an XML document to the display tree JSON
    Convert {
        /// Input XML file
        input: PathBuf,

        /// Output directory for graph_data.json
        #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
        output: PathBuf,

        /// Emit the generic grouped dictionary instead of the display tree
        #[arg(long)]
        grouped: bool,
    },

    /// Convert a tabular specification into the block/tag lookup JSON
    Spec {
        /// Specification table (.xlsx/.xlsm, or CSV)
        #[arg(default_value = DEFAULT_SPEC_FILE)]
        input: PathBuf,

        /// Output directory for specification.json
        #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
        output: PathBuf,
    },
}

/// Run the CLI application
///
/// This is the main entry point for the command-line interface.
/// It parses arguments and dispatches to the appropriate command.
pub fn run_cli() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            input,
            output,
            grouped,
        } => {
            convert_command(&input, &output, grouped)?;
        }
        Commands::Spec { input, output } => {
            spec_command(&input, &output)?;
        }
    }

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Execute the convert command
pub fn convert_command(input: &Path, output_dir: &Path, grouped: bool) -> Result<PathBuf> {
    println!("genviz v{}", genviz_core::VERSION);
    println!("Converting: {}", input.display());

    let root = parse_file(input)
        .with_context(|| format!("Failed to convert document: {}", input.display()))?;

    let path = if grouped {
        write_json(&to_grouped_value(&root), output_dir, GRAPH_DATA_FILE)
    } else {
        write_json(&build_tree(&root), output_dir, GRAPH_DATA_FILE)
    }
    .with_context(|| format!("Failed to write output to {}", output_dir.display()))?;

    println!("  Created: {}", path.display());
    println!();
    println!("Conversion complete!");

    Ok(path)
}

/// Execute the spec command
///
/// A missing specification table is not an error: it is reported and the
/// pipeline proceeds without the annotation lookup, so the return value is
/// `None` in that case.
pub fn spec_command(input: &Path, output_dir: &Path) -> Result<Option<PathBuf>> {
    println!("genviz v{}", genviz_core::VERSION);
    println!("Loading specification table: {}", input.display());

    let table = match SpecificationTable::load(input) {
        Ok(table) => table,
        Err(DataError::SourceNotFound(path)) => {
            warn!("Specification table not found: {}", path);
            println!("  Skipped: specification table not found");
            return Ok(None);
        }
        Err(err) => {
            return Err(err).with_context(|| {
                format!("Failed to convert specification table: {}", input.display())
            });
        }
    };

    let path = write_json(&table, output_dir, SPECIFICATION_FILE)
        .with_context(|| format!("Failed to write output to {}", output_dir.display()))?;

    println!("  Created: {}", path.display());
    println!("  Blocks: {}", table.block_count());

    Ok(Some(path))
}
