//! CLI logic for the fdlayout graph layout tool.
//!
//! Reads a graph from JSON, lays it out with the force-directed engine and
//! writes the positioned graph back out as JSON.

pub mod config;

mod args;
mod error;

pub use args::Args;
pub use error::CliError;

use std::fs;

use log::{debug, info};

use fdlayout::{LayoutBuilder, record::GraphRecord};

/// Run the fdlayout CLI application
///
/// # Errors
///
/// Returns `CliError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Malformed input JSON
/// - Graph and layout errors
pub fn run(args: &Args) -> Result<(), CliError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing graph"
    );

    let app_config = config::load_config(args.config.as_ref())?;
    debug!(config:? = app_config; "Configuration loaded");

    let source = fs::read_to_string(&args.input)?;
    let record: GraphRecord = serde_json::from_str(&source)
        .map_err(|err| CliError::new_json_error(&err, &args.input, source.as_str()))?;

    let mut builder =
        LayoutBuilder::new(*app_config.layout()).with_shift(args.shift_x, args.shift_y);
    if let Some(seed) = args.seed {
        builder = builder.with_seed(seed);
    }
    let (positioned, size) = builder.layout(&record)?;

    let json = serde_json::to_string_pretty(&positioned).map_err(CliError::Export)?;
    fs::write(&args.output, json)?;

    info!(
        output_file = args.output,
        width = size.width(),
        height = size.height();
        "Layout exported successfully"
    );

    Ok(())
}
