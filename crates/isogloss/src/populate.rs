//! Population: transferring a parse tree into a validated graph.
//!
//! Population is the semantic half of parsing. The parse tree records what
//! the export said; this walk decides what of it survives. Node codes are
//! resolved against the gazetteer, edge endpoints are checked against the
//! resolved nodes, and the raw attribute bags are converted into the typed
//! attribute records the graph stores. Everything that does not resolve
//! degrades silently.

use isogloss_core::{
    colour,
    gazetteer::Gazetteer,
    graph::{CoordinateOverrides, EdgeAttributes, Graph},
};
use isogloss_parser::ast::{GraphElement, SubgraphElement};

/// Bare words that start statements in the export grammar and are therefore
/// never user node names.
const RESERVED_WORDS: [&str; 2] = ["node", "edge"];

/// The subgraph name that routes contained edges into the directed
/// collection, compared case-insensitively.
const DIRECTED_SUBGRAPH: &str = "directed";

/// Walks the parse tree into a fresh graph.
///
/// Node statements are applied first so that edges can validate their
/// endpoints against the resolved node set.
pub(crate) fn populate(element: &GraphElement, gazetteer: &dyn Gazetteer) -> Graph {
    let mut graph = Graph::new();
    graph.set_name(&element.name);

    for node in &element.nodes {
        if RESERVED_WORDS.contains(&node.name.as_str()) {
            continue;
        }
        let overrides = CoordinateOverrides {
            latitude: parsed(&node.attributes, "latitude"),
            longitude: parsed(&node.attributes, "longitude"),
        };
        graph.add_node(&node.name, overrides, gazetteer);
    }

    for subgraph in &element.subgraphs {
        populate_subgraph(subgraph, &mut graph);
    }

    graph
}

/// Transfers one subgraph's edges into the graph.
///
/// The subgraph's own name is the authoritative direction switch; the arc
/// token recorded on each edge statement is ignored here.
fn populate_subgraph(subgraph: &SubgraphElement, graph: &mut Graph) {
    let is_directed = subgraph.name.eq_ignore_ascii_case(DIRECTED_SUBGRAPH);

    for edge in &subgraph.edges {
        let weight = edge
            .attributes
            .get("penwidth")
            .and_then(|raw| raw.parse::<i64>().ok());

        let (colour, opacity) = match edge.attributes.get("color") {
            Some(raw) => {
                let (colour, opacity) = colour::decode(raw);
                (Some(colour.to_owned()), opacity)
            }
            None => (None, None),
        };

        graph.add_edge(
            &edge.left,
            &edge.right,
            is_directed,
            EdgeAttributes {
                weight,
                colour,
                opacity,
            },
        );
    }
}

fn parsed(attributes: &isogloss_parser::ast::Attributes, key: &str) -> Option<f64> {
    attributes.get(key).and_then(|raw| raw.parse().ok())
}
