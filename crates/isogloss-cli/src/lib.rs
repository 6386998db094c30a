//! CLI logic for the Isogloss graph converter.
//!
//! Reads an exported graph file and a locations file, resolves node codes to
//! coordinates, and writes the serialized graph as JSON.

pub mod error_adapter;

mod args;
mod error;

pub use args::Args;
pub use error::{CliError, MAX_INPUT_BYTES};

use std::{
    fs::{self, File},
    io::BufReader,
    path::PathBuf,
};

use log::info;

use isogloss::{GraphBuilder, gazetteer::MemoryGazetteer};

/// Run the Isogloss CLI application.
///
/// Loads the gazetteer, validates and parses the input file, and writes the
/// resulting JSON payload to the output file (or stdout for `-`).
///
/// # Errors
///
/// Returns `CliError` for:
/// - File I/O errors
/// - An empty or oversized input file
/// - Parsing errors
/// - Serialization errors
pub fn run(args: &Args) -> Result<(), CliError> {
    info!(
        input_path = args.input,
        locations_path = args.locations;
        "Converting graph export"
    );

    let locations = File::open(&args.locations)?;
    let atlas = MemoryGazetteer::from_reader(BufReader::new(locations))?;

    let metadata = fs::metadata(&args.input)?;
    if metadata.len() == 0 {
        return Err(CliError::EmptyInput(PathBuf::from(&args.input)));
    }
    if metadata.len() > MAX_INPUT_BYTES {
        return Err(CliError::OversizedInput(PathBuf::from(&args.input)));
    }

    let source = fs::read_to_string(&args.input)?;
    let graph = GraphBuilder::new(&atlas).parse(&source)?;
    let json = serde_json::to_string_pretty(&graph.to_payload())?;

    if args.output == "-" {
        println!("{json}");
    } else {
        fs::write(&args.output, json)?;
        info!(output_file = args.output; "Graph exported");
    }

    Ok(())
}
