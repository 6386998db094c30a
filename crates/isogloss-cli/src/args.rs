//! Command-line argument definitions for the Isogloss CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, the gazetteer
//! locations file, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Isogloss graph converter
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the exported graph file
    #[arg(help = "Path to the exported graph file")]
    pub input: String,

    /// Path to the locations file: lines of whitespace-separated
    /// `code latitude longitude`
    #[arg(short, long)]
    pub locations: String,

    /// Path to the output JSON file, or `-` for stdout
    #[arg(short, long, default_value = "graph.json")]
    pub output: String,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
