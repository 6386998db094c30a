//! Parse-tree elements.
//!
//! These types are ephemeral: they exist only between parsing and graph
//! population, after which their semantics have been transferred into a
//! validated graph and they are discarded.

use indexmap::IndexMap;

/// Raw `key=value` attribute mapping as written in the source.
pub type Attributes = IndexMap<String, String>;

/// The outer `(graph|digraph) NAME? { ... }` envelope.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GraphElement {
    /// Declared identifier; empty when unnamed.
    pub name: String,
    pub nodes: Vec<NodeStatement>,
    pub subgraphs: Vec<SubgraphElement>,
}

/// A `subgraph NAME? { ... }` block holding a flat edge list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubgraphElement {
    /// Declared identifier; empty when unnamed. A name equal to `directed`
    /// (any case) routes the contained edges into the directed collection.
    pub name: String,
    pub edges: Vec<EdgeStatement>,
}

/// A `NAME [attrs];` statement.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeStatement {
    pub name: String,
    pub attributes: Attributes,
}

/// A `LEFT (-> | --) RIGHT [attrs];` statement.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeStatement {
    pub left: String,
    pub right: String,
    /// The arc token as written. Informational only: storage routing follows
    /// the enclosing subgraph's name, not this flag.
    pub is_directed: bool,
    pub attributes: Attributes,
}
