//! Statement parsers for the graph-export grammar.
//!
//! The grammar is a constrained subset of the DOT language: one
//! `(graph|digraph) NAME? { ... }` envelope, at most one level of
//! `subgraph` nesting, and node/edge statements with a bounded
//! `key="value"` attribute list. Statements are recognized by winnow
//! combinators; because statements may appear anywhere in their enclosing
//! body, [`excise`] scans for the leftmost offset where an element parser
//! matches and splices the match out of the buffer, mirroring how the
//! export format interleaves statements with content this parser ignores.

use winnow::{
    Parser,
    ascii::{multispace0, multispace1},
    combinator::{alt, opt},
    error::{ContextError, ErrMode},
    token::{take_until, take_while},
};

use crate::{
    ast::{Attributes, EdgeStatement, GraphElement, NodeStatement, SubgraphElement},
    error::MalformedInputError,
};

type Input<'src> = &'src str;
type IResult<O> = Result<O, ErrMode<ContextError>>;

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_key_char(c: char) -> bool {
    is_word_char(c) || matches!(c, '-' | '.' | ',')
}

fn is_value_char(c: char) -> bool {
    is_key_char(c) || c == '#'
}

/// Parse a bare word identifier.
fn identifier<'src>(input: &mut Input<'src>) -> IResult<&'src str> {
    take_while(1.., is_word_char).parse_next(input)
}

/// Parse one `KEY="VALUE",?` pair, quotes optional on either side.
fn attribute_pair<'src>(input: &mut Input<'src>) -> IResult<(&'src str, &'src str)> {
    let key = take_while(1.., is_key_char).parse_next(input)?;
    '='.parse_next(input)?;
    opt('"').parse_next(input)?;
    let value = take_while(1.., is_value_char).parse_next(input)?;
    opt('"').parse_next(input)?;
    opt(',').parse_next(input)?;
    multispace0.parse_next(input)?;
    Ok((key, value))
}

/// Parse a whole attribute list into a mapping.
///
/// An empty or all-whitespace list yields an empty mapping. Returns `None`
/// when any remainder fails to conform; callers degrade that to an empty
/// mapping for the enclosing statement.
pub(crate) fn attribute_list(raw: &str) -> Option<Attributes> {
    let mut attributes = Attributes::new();
    let mut input = raw.trim();

    while !input.is_empty() {
        let (key, value) = attribute_pair(&mut input).ok()?;
        attributes.insert(key.to_owned(), value.to_owned());
    }

    Some(attributes)
}

/// Parse the bracketed attribute section of a statement: `[ ... ];` with the
/// shortest span up to the first `];`.
fn bracketed_attributes(input: &mut Input<'_>) -> IResult<Attributes> {
    '['.parse_next(input)?;
    let raw = take_until(0.., "];").parse_next(input)?;
    "];".parse_next(input)?;
    Ok(attribute_list(raw).unwrap_or_default())
}

/// Parse a `NAME [attrs];` node statement.
fn node_statement(input: &mut Input<'_>) -> IResult<NodeStatement> {
    let name = identifier.parse_next(input)?;
    multispace1.parse_next(input)?;
    let attributes = bracketed_attributes.parse_next(input)?;
    Ok(NodeStatement {
        name: name.to_owned(),
        attributes,
    })
}

/// Parse a `LEFT (-> | --) RIGHT [attrs];` edge statement.
fn edge_statement(input: &mut Input<'_>) -> IResult<EdgeStatement> {
    let left = identifier.parse_next(input)?;
    multispace0.parse_next(input)?;
    let arc = alt(("->", "--")).parse_next(input)?;
    multispace0.parse_next(input)?;
    let right = identifier.parse_next(input)?;
    multispace0.parse_next(input)?;
    let attributes = bracketed_attributes.parse_next(input)?;
    Ok(EdgeStatement {
        left: left.to_owned(),
        right: right.to_owned(),
        is_directed: arc == "->",
        attributes,
    })
}

/// Parse a `subgraph NAME? { ... }` block.
///
/// The contents must be brace-free: subgraphs hold a flat edge list and do
/// not nest.
fn subgraph_element(input: &mut Input<'_>) -> IResult<SubgraphElement> {
    "subgraph".parse_next(input)?;
    multispace0.parse_next(input)?;
    let name = opt(identifier).parse_next(input)?.unwrap_or("");
    multispace0.parse_next(input)?;
    '{'.parse_next(input)?;
    let contents = take_while(0.., |c: char| c != '{' && c != '}').parse_next(input)?;
    '}'.parse_next(input)?;

    let mut buffer = contents.to_owned();
    let mut edges = Vec::new();
    while let Some(edge) = excise(&mut buffer, edge_statement) {
        edges.push(edge);
    }

    Ok(SubgraphElement {
        name: name.to_owned(),
        edges,
    })
}

/// Parse the `(graph|digraph) NAME? {` header, leaving the body in `input`.
fn envelope<'src>(input: &mut Input<'src>) -> IResult<&'src str> {
    alt(("digraph", "graph")).void().parse_next(input)?;
    multispace0.parse_next(input)?;
    let name = opt(identifier).parse_next(input)?.unwrap_or("");
    multispace0.parse_next(input)?;
    '{'.parse_next(input)?;
    Ok(name)
}

/// Finds the leftmost offset where `element` matches, splices the matched
/// span out of the buffer, and returns the parsed element. `None` when the
/// element matches nowhere, which ends the caller's extraction loop.
fn excise<O, P>(buffer: &mut String, mut element: P) -> Option<O>
where
    P: for<'src> FnMut(&mut &'src str) -> IResult<O>,
{
    for start in 0..=buffer.len() {
        if !buffer.is_char_boundary(start) {
            continue;
        }
        let mut input = &buffer[start..];
        let len_before = input.len();
        if let Ok(parsed) = element(&mut input) {
            let end = start + (len_before - input.len());
            buffer.replace_range(start..end, "");
            return Some(parsed);
        }
    }
    None
}

/// Parse a preprocessed export into its element tree.
///
/// The envelope is anchored over the whole trimmed input: leading or
/// trailing garbage is a hard failure, and it is the only failure; inner
/// elements that match nowhere simply leave their list empty. Subgraphs are
/// excised before node statements so that node-statement matching cannot
/// false-positive on content inside a not-yet-removed subgraph.
pub(crate) fn graph_element(text: &str) -> Result<GraphElement, MalformedInputError> {
    let mut input = text.trim();
    let name = envelope(&mut input).map_err(|_| MalformedInputError)?;
    let body = input.strip_suffix('}').ok_or(MalformedInputError)?;

    let mut buffer = body.to_owned();

    let mut subgraphs = Vec::new();
    while let Some(subgraph) = excise(&mut buffer, subgraph_element) {
        subgraphs.push(subgraph);
    }

    let mut nodes = Vec::new();
    while let Some(node) = excise(&mut buffer, node_statement) {
        nodes.push(node);
    }

    Ok(GraphElement {
        name: name.to_owned(),
        nodes,
        subgraphs,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_with<O, P>(source: &str, mut parser: P) -> IResult<O>
    where
        P: for<'src> FnMut(&mut &'src str) -> IResult<O>,
    {
        let mut input = source;
        parser(&mut input)
    }

    #[test]
    fn test_attribute_list() {
        let attributes =
            attribute_list(r#"pos="3800.0,2650.0", width="0.1", height="0.05""#).unwrap();

        assert_eq!(attributes.len(), 3);
        assert_eq!(attributes["pos"], "3800.0,2650.0");
        assert_eq!(attributes["width"], "0.1");
        assert_eq!(attributes["height"], "0.05");
    }

    #[test]
    fn test_attribute_list_empty() {
        assert_eq!(attribute_list("").unwrap().len(), 0);
        assert_eq!(attribute_list("   ").unwrap().len(), 0);
    }

    #[test]
    fn test_attribute_list_unquoted_values() {
        let attributes = attribute_list("penwidth=4").unwrap();
        assert_eq!(attributes["penwidth"], "4");
    }

    #[test]
    fn test_attribute_list_rejects_garbage() {
        assert_eq!(attribute_list("not an attribute list"), None);
        assert_eq!(attribute_list(r#"a="1" !"#), None);
    }

    #[test]
    fn test_attribute_list_last_duplicate_wins() {
        let attributes = attribute_list(r#"a="1", a="2""#).unwrap();
        assert_eq!(attributes.len(), 1);
        assert_eq!(attributes["a"], "2");
    }

    #[test]
    fn test_node_statement() {
        let node = parse_with(
            r#"bul [pos="2250.0,2125.0", width="0.1", height="0.05"];"#,
            node_statement,
        )
        .unwrap();

        assert_eq!(node.name, "bul");
        assert!(node.attributes.contains_key("pos"));
        assert!(node.attributes.contains_key("width"));
        assert!(node.attributes.contains_key("height"));
    }

    #[test]
    fn test_node_statement_requires_separating_whitespace() {
        assert!(parse_with(r#"bul[pos="1"];"#, node_statement).is_err());
    }

    #[test]
    fn test_node_statement_with_unparsable_attributes_is_kept() {
        // A non-conforming attribute span degrades to an empty mapping, not
        // a failed statement.
        let node = parse_with("bul [?!];", node_statement).unwrap();
        assert_eq!(node.name, "bul");
        assert!(node.attributes.is_empty());
    }

    #[test]
    fn test_edge_statement_directed_arc() {
        let edge = parse_with(
            r##"fin -> krl [color="#000000ff",penwidth="4"];"##,
            edge_statement,
        )
        .unwrap();

        assert_eq!(edge.left, "fin");
        assert_eq!(edge.right, "krl");
        assert!(edge.is_directed);
        assert_eq!(edge.attributes["color"], "#000000ff");
        assert_eq!(edge.attributes["penwidth"], "4");
    }

    #[test]
    fn test_edge_statement_undirected_arc() {
        let edge = parse_with("bak -- kaz [];", edge_statement).unwrap();

        assert!(!edge.is_directed);
        assert!(edge.attributes.is_empty());
    }

    #[test]
    fn test_edge_statement_requires_brackets() {
        assert!(parse_with("fin -> krl;", edge_statement).is_err());
    }

    #[test]
    fn test_subgraph_named() {
        let subgraph = parse_with("subgraph bidirected {}", subgraph_element).unwrap();
        assert_eq!(subgraph.name, "bidirected");
        assert!(subgraph.edges.is_empty());
    }

    #[test]
    fn test_subgraph_unnamed() {
        let subgraph = parse_with("subgraph {}", subgraph_element).unwrap();
        assert_eq!(subgraph.name, "");
    }

    #[test]
    fn test_subgraph_collects_edges() {
        let subgraph = parse_with(
            r#"subgraph directed { fin -> smn [penwidth="3"]; sel -> rus [penwidth="2"]; }"#,
            subgraph_element,
        )
        .unwrap();

        assert_eq!(subgraph.name, "directed");
        assert_eq!(subgraph.edges.len(), 2);
        assert_eq!(subgraph.edges[0].left, "fin");
        assert_eq!(subgraph.edges[1].left, "sel");
    }

    #[test]
    fn test_excise_removes_leftmost_match() {
        let mut buffer = "xx fin -> smn [];yy bak -- kaz [];zz".to_owned();

        let first = excise(&mut buffer, edge_statement).unwrap();
        assert_eq!(first.left, "fin");
        assert_eq!(buffer, "xx yy bak -- kaz [];zz");

        let second = excise(&mut buffer, edge_statement).unwrap();
        assert_eq!(second.left, "bak");
        assert_eq!(buffer, "xx yy zz");

        assert!(excise(&mut buffer, edge_statement).is_none());
    }

    #[test]
    fn test_graph_element_named() {
        let graph = graph_element("digraph LanguageGraph {}").unwrap();
        assert_eq!(graph.name, "LanguageGraph");
        assert!(graph.nodes.is_empty());
        assert!(graph.subgraphs.is_empty());
    }

    #[test]
    fn test_graph_element_unnamed() {
        let graph = graph_element("graph {}").unwrap();
        assert_eq!(graph.name, "");
    }

    #[test]
    fn test_graph_element_extracts_subgraphs_then_nodes() {
        let graph = graph_element(
            r#"graph G {
                subgraph { fin -- krl [penwidth="4"]; }
                subgraph directed { fin -> smn [penwidth="3"]; }
                fin [latitude="61.0"];
                smn [latitude="68.9"];
            }"#,
        )
        .unwrap();

        assert_eq!(graph.subgraphs.len(), 2);
        assert_eq!(graph.subgraphs[0].name, "");
        assert_eq!(graph.subgraphs[1].name, "directed");
        assert_eq!(graph.nodes.len(), 2);
        assert_eq!(graph.nodes[0].name, "fin");
        assert_eq!(graph.nodes[1].name, "smn");
    }

    #[test]
    fn test_graph_element_rejects_leading_garbage() {
        assert!(graph_element("oops digraph G {}").is_err());
    }

    #[test]
    fn test_graph_element_rejects_trailing_garbage() {
        assert!(graph_element("digraph G {} oops").is_err());
    }

    #[test]
    fn test_graph_element_rejects_missing_brace() {
        assert!(graph_element("digraph G {").is_err());
        assert!(graph_element("digraph G").is_err());
    }

    #[test]
    fn test_graph_element_rejects_missing_keyword() {
        assert!(graph_element("LanguageGraph {}").is_err());
    }

    #[test]
    fn test_reserved_words_are_captured_as_node_statements() {
        // The parser records them; population filters them out.
        let graph = graph_element(r#"graph { node [fixedsize="true"]; }"#).unwrap();
        assert_eq!(graph.nodes.len(), 1);
        assert_eq!(graph.nodes[0].name, "node");
    }
}
