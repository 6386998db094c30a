//! CLI error type.

use std::{io, path::PathBuf};

use thiserror::Error;

use isogloss::IsoglossError;

/// Upper bound on accepted export size, in bytes.
pub const MAX_INPUT_BYTES: u64 = 1024 * 500;

/// Errors surfaced by the CLI.
///
/// Input validation happens before parsing so that an empty or oversized
/// file is reported as such instead of as a parse failure.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("the file is empty: {}", .0.display())]
    EmptyInput(PathBuf),

    #[error("the file exceeds the 500 KB limit: {}", .0.display())]
    OversizedInput(PathBuf),

    #[error(transparent)]
    Graph(#[from] IsoglossError),

    #[error("failed to serialize graph: {0}")]
    Serialize(#[from] serde_json::Error),
}
