//! Parsing of the text description format for route Graphs.
//!
//! The format is line oriented and split into four sections, each introduced by
//! a literal header line:
//!
//! ```text
//! Nodes:
//! 1: (4,1)
//! 2: (2,2)
//! Edges:
//! (2,1): 4
//! (1,2): 4
//! Origin:
//! 2
//! Destinations:
//! 1;2
//! ```
//!
//! Node, origin and destination entries must be well formed; a malformed line
//! in those sections rejects the whole input. Edge lines are more forgiving:
//! an entry that does not parse is skipped with a warning, matching how small
//! hand-edited route files tend to accumulate broken lines. Blank lines and
//! anything before the first section header are ignored.
//!
//! Parsing is a collaborator of the search core, not part of it: everything
//! here produces a regular [`Graph`] that could just as well have been built
//! directly with [`Graph::new`].

use crate::error::MalformedGraph;
use crate::{Cost, Graph, NodeId, Point};

use log::warn;
use thiserror::Error;

/// Returned when a text description cannot be turned into a [`Graph`].
#[derive(Debug, Error)]
pub enum ParseError {
    /// reading the input file failed
    #[error("failed to read graph file: {0}")]
    Io(#[from] std::io::Error),
    /// a line in the `Nodes:` section does not match `id: (x,y)`
    #[error("line {line}: invalid node entry `{text}`")]
    InvalidNode {
        /// 1-based line number of the offending line
        line: usize,
        /// the offending line, trimmed
        text: String,
    },
    /// a line in the `Origin:` section is not a node id
    #[error("line {line}: invalid origin entry `{text}`")]
    InvalidOrigin {
        /// 1-based line number of the offending line
        line: usize,
        /// the offending line, trimmed
        text: String,
    },
    /// a line in the `Destinations:` section is not a `;`-separated id list
    #[error("line {line}: invalid destination entry `{text}`")]
    InvalidDestinations {
        /// 1-based line number of the offending line
        line: usize,
        /// the offending line, trimmed
        text: String,
    },
    /// the input has no `Origin:` entry
    #[error("the input contains no origin")]
    MissingOrigin,
    /// the parsed pieces do not form a valid Graph
    #[error(transparent)]
    Malformed(#[from] MalformedGraph),
}

/// Which section of the input the line cursor is currently in
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Section {
    None,
    Nodes,
    Edges,
    Origin,
    Destinations,
}

/// Parses a Graph from its text description.
///
/// ## Examples
/// ```
/// use route_finder::parse::parse_graph;
///
/// let graph = parse_graph(
///     "Nodes:
///      1: (0,0)
///      2: (5,5)
///      Edges:
///      (1,2): 3
///      Origin:
///      1
///      Destinations:
///      2",
/// )
/// .unwrap();
///
/// assert_eq!(graph.origin(), 1);
/// assert_eq!(graph.destinations(), &[2]);
/// ```
pub fn parse_graph(input: &str) -> Result<Graph, ParseError> {
    let mut section = Section::None;
    let mut nodes: Vec<(NodeId, Point)> = Vec::new();
    let mut edges: Vec<(NodeId, NodeId, Cost)> = Vec::new();
    let mut origin: Option<NodeId> = None;
    let mut destinations: Vec<NodeId> = Vec::new();

    for (index, raw) in input.lines().enumerate() {
        let line_number = index + 1;
        let line = raw.trim();

        match line {
            "" => continue,
            "Nodes:" => {
                section = Section::Nodes;
                continue;
            }
            "Edges:" => {
                section = Section::Edges;
                continue;
            }
            "Origin:" => {
                section = Section::Origin;
                continue;
            }
            "Destinations:" => {
                section = Section::Destinations;
                continue;
            }
            _ => {}
        }

        match section {
            Section::None => {
                // preamble before the first header
                continue;
            }
            Section::Nodes => {
                let (id, pos) =
                    parse_node_line(line).ok_or_else(|| ParseError::InvalidNode {
                        line: line_number,
                        text: line.to_string(),
                    })?;
                nodes.push((id, pos));
            }
            Section::Edges => match parse_edge_line(line) {
                Some(edge) => edges.push(edge),
                None => warn!("skipping invalid edge line {}: `{}`", line_number, line),
            },
            Section::Origin => {
                // a later entry overwrites an earlier one
                let id = line.parse().map_err(|_| ParseError::InvalidOrigin {
                    line: line_number,
                    text: line.to_string(),
                })?;
                origin = Some(id);
            }
            Section::Destinations => {
                // each line replaces the previous list
                destinations = line
                    .split(';')
                    .map(|part| part.trim().parse())
                    .collect::<Result<_, _>>()
                    .map_err(|_| ParseError::InvalidDestinations {
                        line: line_number,
                        text: line.to_string(),
                    })?;
            }
        }
    }

    let origin = origin.ok_or(ParseError::MissingOrigin)?;
    Ok(Graph::new(nodes, edges, origin, destinations)?)
}

/// Reads the input file and parses it with [`parse_graph`].
pub fn load_graph(path: impl AsRef<std::path::Path>) -> Result<Graph, ParseError> {
    let text = std::fs::read_to_string(path)?;
    parse_graph(&text)
}

/// `id: (x,y)`
fn parse_node_line(line: &str) -> Option<(NodeId, Point)> {
    let (id, coords) = line.split_once(':')?;
    let id = id.trim().parse().ok()?;

    let coords = coords.trim().strip_prefix('(')?.strip_suffix(')')?;
    let (x, y) = coords.split_once(',')?;
    let x = x.trim().parse().ok()?;
    let y = y.trim().parse().ok()?;

    Some((id, (x, y)))
}

/// `(from,to): cost`
fn parse_edge_line(line: &str) -> Option<(NodeId, NodeId, Cost)> {
    let (pair, cost) = line.split_once(':')?;

    let pair = pair.trim().strip_prefix('(')?.strip_suffix(')')?;
    let (from, to) = pair.split_once(',')?;
    let from = from.trim().parse().ok()?;
    let to = to.trim().parse().ok()?;
    let cost = cost.trim().parse().ok()?;

    Some((from, to, cost))
}
