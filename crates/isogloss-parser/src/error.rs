//! Error type for the parsing lifecycle.

use thiserror::Error;

/// The single fatal parse failure.
///
/// Raised when the input does not match the
/// `(graph|digraph) NAME? { ... }` envelope over its whole length. Every
/// inner leniency (unknown attributes, unresolvable references, bad
/// numbers) degrades silently instead of producing an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("input does not match the graph grammar")]
pub struct MalformedInputError;
