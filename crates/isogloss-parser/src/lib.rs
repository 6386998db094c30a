//! # Isogloss Parser
//!
//! Parser for the constrained graph-export subset of the DOT language. This
//! crate provides the pipeline from raw export text to an ephemeral parse
//! tree: one `(graph|digraph)` envelope holding node statements and
//! one-level `subgraph` blocks of edge statements.
//!
//! This is deliberately not a general DOT parser. It accepts exactly the
//! statement shapes produced by the application's exports and ignores or
//! rejects everything else.
//!
//! ## Usage
//!
//! ```
//! # use isogloss_parser::MalformedInputError;
//! fn main() -> Result<(), MalformedInputError> {
//!     let source = r##"
//!         digraph LanguageGraph {
//!             subgraph directed {
//!                 fin -> smn [color="#00cc66ff",penwidth="3"];
//!             }
//!             fin [latitude="61.0",longitude="24.45"];
//!             smn [latitude="68.9",longitude="27.0"];
//!         }
//!     "##;
//!
//!     let element = isogloss_parser::parse(source)?;
//!     assert_eq!(element.name, "LanguageGraph");
//!     Ok(())
//! }
//! ```

pub mod ast;

mod error;
mod parser;
mod preprocess;

pub use error::MalformedInputError;

use log::debug;

/// Parse raw export text into its parse tree.
///
/// Comments and newlines are scrubbed first, then the anchored envelope
/// grammar is applied over the whole remaining input.
///
/// # Errors
///
/// Returns [`MalformedInputError`] when the envelope does not match. This is
/// the only error: statements that match nowhere merely leave their list
/// empty.
pub fn parse(source: &str) -> Result<ast::GraphElement, MalformedInputError> {
    let scrubbed = preprocess::scrub(source);
    let element = parser::graph_element(&scrubbed)?;

    debug!(
        name = element.name,
        subgraphs = element.subgraphs.len(),
        nodes = element.nodes.len();
        "Parsed graph document"
    );

    Ok(element)
}
