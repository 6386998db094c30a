//! Error types for graph-building operations.

use std::io;

use thiserror::Error;

use isogloss_parser::MalformedInputError;

/// The main error type for turning an export into a graph.
#[derive(Debug, Error)]
pub enum IsoglossError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The export did not match the graph grammar.
    #[error("file could not be parsed: {0}")]
    Parse(#[from] MalformedInputError),
}
