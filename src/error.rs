//! Error Types for Graph construction and lookup.
//!
//! Note that a search that finds no route is **not** an error; it is reported
//! through [`SearchResult`](crate::SearchResult) with `goal: None`.

use crate::NodeId;
use thiserror::Error;

/// Returned by [`Graph::edge_cost`](crate::Graph::edge_cost) when the requested
/// pair of Nodes has no direct Edge.
///
/// With Nodes obtained from [`Graph::neighbors`](crate::Graph::neighbors) the
/// Edge always exists, so well-behaved callers never see this Error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("no edge from node {from} to node {to}")]
pub struct EdgeNotFound {
    /// the source Node of the requested Edge
    pub from: NodeId,
    /// the target Node of the requested Edge
    pub to: NodeId,
}

/// Returned by [`Graph::new`](crate::Graph::new) when the supplied pieces do not
/// form a valid Graph.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MalformedGraph {
    /// the origin id does not appear in the Node set
    #[error("origin {0} is not a known node")]
    UnknownOrigin(NodeId),
    /// a destination id does not appear in the Node set
    #[error("destination {0} is not a known node")]
    UnknownDestination(NodeId),
    /// an Edge references a Node missing from the Node set
    #[error("edge ({from}, {to}) references an unknown node")]
    DanglingEdge {
        /// the source Node of the offending Edge
        from: NodeId,
        /// the target Node of the offending Edge
        to: NodeId,
    },
    /// the destination list is empty
    #[error("a graph needs at least one destination")]
    NoDestinations,
}
