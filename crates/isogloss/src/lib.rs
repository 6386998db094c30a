//! Isogloss - coordinate-annotated graphs from DOT exports.
//!
//! Parsing and semantic population for the constrained graph-export subset
//! of the DOT language. An export is parsed into statements, its node codes
//! are resolved to geographic coordinates through a [`gazetteer::Gazetteer`],
//! and the result is a validated [`graph::Graph`] ready for JSON
//! serialization.

mod error;
mod populate;

pub use error::IsoglossError;

pub use isogloss_core::{colour, gazetteer, graph};
pub use isogloss_parser::MalformedInputError;

use log::debug;

use gazetteer::Gazetteer;
use graph::Graph;

/// Builder for turning export text into graphs.
///
/// One builder can serve any number of parse calls; every call constructs
/// its own fresh [`graph::Graph`], so no state leaks between exports.
///
/// # Examples
///
/// ```rust
/// use isogloss::{
///     GraphBuilder,
///     gazetteer::{Location, MemoryGazetteer},
/// };
///
/// let mut atlas = MemoryGazetteer::new();
/// atlas.insert(
///     "fin",
///     Location {
///         latitude: Some(61.0),
///         longitude: Some(24.45),
///     },
/// );
///
/// let builder = GraphBuilder::new(&atlas);
/// let graph = builder
///     .parse("graph Contacts { fin []; }")
///     .expect("well-formed export");
///
/// assert_eq!(graph.name(), "Contacts");
/// assert_eq!(graph.nodes().len(), 1);
/// ```
pub struct GraphBuilder<'a> {
    gazetteer: &'a dyn Gazetteer,
}

impl<'a> GraphBuilder<'a> {
    /// Create a builder resolving node codes against the given gazetteer.
    pub fn new(gazetteer: &'a dyn Gazetteer) -> Self {
        Self { gazetteer }
    }

    /// Parse export text into a coordinate-annotated graph.
    ///
    /// # Errors
    ///
    /// Returns [`IsoglossError::Parse`] when the text does not match the
    /// graph envelope grammar. Statements that reference unknown codes or
    /// carry unusable attributes are dropped silently; partial recovery of
    /// a usable graph is preferred over rejecting a whole machine-generated
    /// export for one bad statement.
    pub fn parse(&self, source: &str) -> Result<Graph, IsoglossError> {
        let element = isogloss_parser::parse(source)?;
        let graph = populate::populate(&element, self.gazetteer);

        debug!(
            name = graph.name(),
            nodes = graph.nodes().len(),
            undirected = graph.undirected().len(),
            directed = graph.directed().len();
            "Graph populated"
        );

        Ok(graph)
    }
}
