use crate::{NodeId, Point};

/// A vertex of a [`Graph`](crate::Graph).
///
/// The coordinates are carried along for display and potential heuristics; the
/// depth-first search itself never reads them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Node {
    /// the unique id of this Node
    pub id: NodeId,
    /// the Node's position on the plane
    pub pos: Point,
}

impl Node {
    /// Creates a new Node.
    pub fn new(id: NodeId, pos: Point) -> Node {
        Node { id, pos }
    }
}
