//! The validated graph model.
//!
//! A [`Graph`] combines the relevant information from a parsed export with
//! the geographic coordinates held by a [`Gazetteer`]: nodes carry resolved
//! coordinates, edges carry optional visual/weight attributes. Insertion is
//! validating (nodes whose code the gazetteer does not know and edges
//! referencing unknown endpoints are dropped without error), and a populated
//! graph serializes to a plain nested payload via [`Graph::to_payload`].

use indexmap::IndexMap;
use serde::Serialize;

use crate::gazetteer::Gazetteer;

/// Resolved coordinates of a node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Per-axis coordinate overrides taken from a node statement.
///
/// An override replaces the gazetteer's coordinate for that axis only; the
/// other axis still comes from the lookup.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CoordinateOverrides {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// The closed set of attributes an edge record may carry.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EdgeAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colour: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
}

impl EdgeAttributes {
    /// Builds edge attributes from loosely typed key/value pairs.
    ///
    /// Accepted keys are exactly `weight`, `colour`, and `opacity`; any other
    /// key rejects the whole bag, so no edge entry is created from it.
    /// Values that fail numeric parsing leave the field unset.
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Option<Self> {
        let mut attributes = Self::default();
        for (key, value) in pairs {
            match key {
                "weight" => attributes.weight = value.parse().ok(),
                "colour" => attributes.colour = Some(value.to_owned()),
                "opacity" => attributes.opacity = value.parse().ok(),
                _ => return None,
            }
        }
        Some(attributes)
    }
}

/// A coordinate-annotated graph with directed and undirected edge
/// collections.
///
/// Constructed empty, populated through [`Graph::add_node`] and
/// [`Graph::add_edge`], and reconstructed fresh for every parsed export; no
/// state is shared across invocations.
#[derive(Debug, Default)]
pub struct Graph {
    name: String,
    nodes: IndexMap<String, Coordinates>,
    undirected: IndexMap<(String, String), EdgeAttributes>,
    directed: IndexMap<(String, String), EdgeAttributes>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// The graph's declared identifier; empty when the export was unnamed.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn nodes(&self) -> &IndexMap<String, Coordinates> {
        &self.nodes
    }

    pub fn undirected(&self) -> &IndexMap<(String, String), EdgeAttributes> {
        &self.undirected
    }

    pub fn directed(&self) -> &IndexMap<(String, String), EdgeAttributes> {
        &self.directed
    }

    /// Adds a node, resolving its coordinates against the gazetteer.
    ///
    /// A code the gazetteer does not know is an unconditional veto: the call
    /// is a no-op even when both axes are overridden. A node whose final
    /// latitude or longitude is still missing after applying overrides is
    /// dropped as well.
    pub fn add_node(
        &mut self,
        code: &str,
        overrides: CoordinateOverrides,
        gazetteer: &dyn Gazetteer,
    ) {
        let Some(location) = gazetteer.lookup(code) else {
            return;
        };

        let latitude = overrides.latitude.or(location.latitude);
        let longitude = overrides.longitude.or(location.longitude);
        let (Some(latitude), Some(longitude)) = (latitude, longitude) else {
            return;
        };

        self.nodes.insert(
            code.to_owned(),
            Coordinates {
                latitude,
                longitude,
            },
        );
    }

    /// Adds an edge between two already known nodes.
    ///
    /// An edge referencing an endpoint that is not a node is dropped without
    /// error. Undirected pairs are unordered: a later edge between the same
    /// two nodes in either orientation overwrites the existing record, and
    /// the first-seen orientation is kept for serialization.
    pub fn add_edge(
        &mut self,
        head: &str,
        tail: &str,
        is_directed: bool,
        attributes: EdgeAttributes,
    ) {
        if !self.nodes.contains_key(head) || !self.nodes.contains_key(tail) {
            return;
        }

        let key = (head.to_owned(), tail.to_owned());
        if is_directed {
            self.directed.insert(key, attributes);
        } else {
            let flipped = (tail.to_owned(), head.to_owned());
            if !self.undirected.contains_key(&key) && self.undirected.contains_key(&flipped) {
                self.undirected.insert(flipped, attributes);
            } else {
                self.undirected.insert(key, attributes);
            }
        }
    }

    /// Serializes the graph into the externally consumed payload shape.
    ///
    /// Undirected edges come first, in insertion order, followed by directed
    /// edges.
    pub fn to_payload(&self) -> GraphPayload {
        let nodes = self
            .nodes
            .iter()
            .map(|(code, coordinates)| {
                (
                    code.clone(),
                    (coordinates.latitude, coordinates.longitude),
                )
            })
            .collect();

        let undirected = self.undirected.iter().map(|(pair, attributes)| {
            EdgePayload::new(pair, false, attributes.clone())
        });
        let directed = self.directed.iter().map(|(pair, attributes)| {
            EdgePayload::new(pair, true, attributes.clone())
        });

        GraphPayload {
            name: self.name.clone(),
            nodes,
            edges: undirected.chain(directed).collect(),
        }
    }
}

/// The externally consumed, JSON-serializable graph shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphPayload {
    pub name: String,
    pub nodes: IndexMap<String, (f64, f64)>,
    pub edges: Vec<EdgePayload>,
}

/// One edge record in the serialized payload.
///
/// Absent optional attributes are omitted from the JSON rather than emitted
/// as nulls.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgePayload {
    pub head: String,
    pub tail: String,
    pub is_directed: bool,
    #[serde(flatten)]
    pub attributes: EdgeAttributes,
}

impl EdgePayload {
    fn new(pair: &(String, String), is_directed: bool, attributes: EdgeAttributes) -> Self {
        Self {
            head: pair.0.clone(),
            tail: pair.1.clone(),
            is_directed,
            attributes,
        }
    }
}
