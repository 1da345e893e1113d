//! Command-line argument definitions for the fdlayout CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, configuration file
//! selection, reproducibility, placement offset and logging verbosity.

use clap::Parser;

/// Command-line arguments for the fdlayout graph layout tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input graph (JSON)
    #[arg(help = "Path to the input graph file")]
    pub input: String,

    /// Path to the output graph with positions (JSON)
    #[arg(short, long, default_value = "layout.json")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Seed for the initial random placement
    #[arg(long)]
    pub seed: Option<u64>,

    /// Horizontal offset added to every node after layout
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub shift_x: f64,

    /// Vertical offset added to every node after layout
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub shift_y: f64,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
