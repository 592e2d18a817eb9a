//! CLI logic for the Stratum layout tool.
//!
//! This module contains the core CLI logic: loading configuration, turning
//! raw parameters into a layout, and writing the plan preview.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::{debug, info};

use stratum::{LayoutBuilder, StratumError};

/// Run the Stratum CLI application
///
/// Parses the layout parameters, generates the layout and, unless
/// `--dry-run` is set, writes the SVG plan preview to the output file.
///
/// # Errors
///
/// Returns `StratumError` for:
/// - Configuration loading errors
/// - Malformed or invalid layout parameters
/// - Layout generation errors
/// - Rendering and file I/O errors
pub fn run(args: &Args) -> Result<(), StratumError> {
    info!(output_path = args.output, dry_run = args.dry_run; "Processing layout");

    let app_config = config::load_config(args.config.as_ref())?;

    let request = args.raw_input().parse()?;

    let builder = LayoutBuilder::new(app_config);
    let layout = builder.generate(&request)?;

    for grid in layout.grids() {
        debug!(grid:%; "Grid");
    }
    for level in layout.levels() {
        debug!(level:%; "Level");
    }

    if args.dry_run {
        info!(elements = layout.len(); "Dry run, nothing written");
        return Ok(());
    }

    let svg = builder.render_svg(&layout)?;
    fs::write(&args.output, svg)?;

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}
