mod node;
pub use node::Node;

use crate::error::{EdgeNotFound, MalformedGraph};
use crate::node_id::{NodeIdMap, NodeIdSet};
use crate::{Cost, NodeId, Point};

/// An immutable directed Graph with weighted Edges, one origin and a set of
/// destinations.
///
/// A Graph is built once, up front, from plain lists of Nodes and Edges; after
/// construction it only offers read access. Construction validates that the
/// origin, every destination and both endpoints of every Edge reference Nodes
/// that actually exist, so a successfully built Graph can be searched without
/// further checks.
///
/// ## Examples
/// ```
/// use route_finder::Graph;
///
/// let graph = Graph::new(
///     [(1, (0, 0)), (2, (1, 0)), (3, (2, 0))],
///     [(1, 2, 5), (1, 3, 9)],
///     1,
///     vec![3],
/// )
/// .unwrap();
///
/// assert_eq!(graph.neighbors(1), vec![2, 3]);
/// assert_eq!(graph.edge_cost(1, 3), Ok(9));
/// assert!(graph.is_destination(3));
/// ```
#[derive(Clone, Debug)]
pub struct Graph {
    nodes: NodeIdMap<Node>,
    edges: NodeIdMap<NodeIdMap<Cost>>,
    origin: NodeId,
    destinations: Vec<NodeId>,
    destination_set: NodeIdSet,
}

impl Graph {
    /// Creates a Graph from its parts.
    ///
    /// `nodes` maps each Node id to its coordinates. `edges` lists directed
    /// Edges as `(from, to, cost)` triples; a repeated `(from, to)` pair
    /// overwrites the earlier Cost. `destinations` keeps its order for display,
    /// while the goal test treats it as a set.
    ///
    /// Fails with [`MalformedGraph`] if `destinations` is empty or if the
    /// origin, a destination or an Edge endpoint references an unknown Node.
    pub fn new(
        nodes: impl IntoIterator<Item = (NodeId, Point)>,
        edges: impl IntoIterator<Item = (NodeId, NodeId, Cost)>,
        origin: NodeId,
        destinations: Vec<NodeId>,
    ) -> Result<Graph, MalformedGraph> {
        let nodes: NodeIdMap<Node> = nodes
            .into_iter()
            .map(|(id, pos)| (id, Node::new(id, pos)))
            .collect();

        if destinations.is_empty() {
            return Err(MalformedGraph::NoDestinations);
        }
        if !nodes.contains_key(&origin) {
            return Err(MalformedGraph::UnknownOrigin(origin));
        }
        for &dest in &destinations {
            if !nodes.contains_key(&dest) {
                return Err(MalformedGraph::UnknownDestination(dest));
            }
        }

        let mut adjacency: NodeIdMap<NodeIdMap<Cost>> = NodeIdMap::default();
        for (from, to, cost) in edges {
            if !nodes.contains_key(&from) || !nodes.contains_key(&to) {
                return Err(MalformedGraph::DanglingEdge { from, to });
            }
            adjacency.entry(from).or_default().insert(to, cost);
        }

        let destination_set = destinations.iter().copied().collect();

        Ok(Graph {
            nodes,
            edges: adjacency,
            origin,
            destinations,
            destination_set,
        })
    }

    /// All Nodes directly reachable from `node` via a single Edge, in ascending
    /// id order.
    ///
    /// A Node without outgoing Edges (including an id not present in the Graph)
    /// yields an empty list, not an error.
    pub fn neighbors(&self, node: NodeId) -> Vec<NodeId> {
        let mut ids: Vec<NodeId> = self
            .edges
            .get(&node)
            .map(|out| out.keys().copied().collect())
            .unwrap_or_default();
        ids.sort_unstable();
        ids
    }

    /// The Cost of the direct Edge from `from` to `to`.
    ///
    /// Fails with [`EdgeNotFound`] if there is no such Edge. For Nodes returned
    /// by [`neighbors`](Graph::neighbors) the Edge is guaranteed to exist.
    pub fn edge_cost(&self, from: NodeId, to: NodeId) -> Result<Cost, EdgeNotFound> {
        self.edges
            .get(&from)
            .and_then(|out| out.get(&to))
            .copied()
            .ok_or(EdgeNotFound { from, to })
    }

    /// `true` if `node` is one of the destinations
    pub fn is_destination(&self, node: NodeId) -> bool {
        self.destination_set.contains(&node)
    }

    /// The origin Node the search starts from
    pub fn origin(&self) -> NodeId {
        self.origin
    }

    /// The destinations in the order they were supplied
    pub fn destinations(&self) -> &[NodeId] {
        &self.destinations
    }

    /// Looks up a Node by id.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    /// The number of Nodes in the Graph
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// The total number of directed Edges in the Graph
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(|out| out.len()).sum()
    }
}
