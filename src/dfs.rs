use crate::node_id::NodeIdSet;
use crate::{Cost, Graph, NodeId, Path};

use log::{debug, trace};
use std::fmt;

/// A pending stack entry: a Node together with the route taken to reach it and
/// that route's accumulated Cost.
#[derive(Clone, Debug)]
struct Frontier {
    node: NodeId,
    path: Vec<NodeId>,
    cost: Cost,
}

/// The outcome of one [`dfs_search`] run.
///
/// `goal` is the authoritative success signal: `Some(node)` if a destination
/// was reached, `None` if the search exhausted the reachable component. On
/// failure the path is empty and carries a [`Cost::MAX`](crate::Cost) sentinel
/// cost.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchResult {
    /// the destination that was reached, if any
    pub goal: Option<NodeId>,
    /// how many stack entries were popped, including discarded duplicates
    pub expanded: usize,
    /// the route from the origin to the goal
    pub path: Path<NodeId>,
}

impl SearchResult {
    /// `true` if a destination was reached
    pub fn is_found(&self) -> bool {
        self.goal.is_some()
    }

    /// The total Cost of the discovered route, or `Cost::MAX` if there is none
    pub fn cost(&self) -> Cost {
        self.path.cost()
    }
}

impl fmt::Display for SearchResult {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self.goal {
            Some(goal) => write!(
                fmt,
                "reached {} after {} expansions: {}",
                goal, self.expanded, self.path
            ),
            None => write!(fmt, "no path found after {} expansions", self.expanded),
        }
    }
}

/// Searches the Graph depth-first from its origin until any destination is
/// reached.
///
/// The traversal keeps an explicit stack of pending routes. Every pop counts as
/// one expansion; the popped Node is goal-tested immediately, before the
/// visited check, and a freshly visited Node pushes its unvisited neighbors in
/// descending id order so that the smallest id is explored first. The first
/// destination popped ends the search.
///
/// Since the search is depth-first, the returned route is reproducible but not
/// necessarily the cheapest one. Exhausting the stack without reaching a
/// destination is a normal outcome reported through the [`SearchResult`], never
/// an error.
///
/// ## Examples
/// ```
/// use route_finder::{dfs_search, Graph};
///
/// let graph = Graph::new(
///     [(1, (4, 1)), (2, (2, 2)), (3, (4, 4)), (4, (6, 3))],
///     [(1, 2, 4), (1, 3, 2), (3, 4, 1)],
///     1,
///     vec![4],
/// )
/// .unwrap();
///
/// let result = dfs_search(&graph);
/// assert_eq!(result.goal, Some(4));
/// assert_eq!(result.path, vec![1, 3, 4]);
/// assert_eq!(result.cost(), 3);
/// ```
pub fn dfs_search(graph: &Graph) -> SearchResult {
    let origin = graph.origin();
    let mut stack = vec![Frontier {
        node: origin,
        path: vec![origin],
        cost: 0,
    }];
    let mut visited = NodeIdSet::default();
    let mut expanded = 0;

    while let Some(entry) = stack.pop() {
        expanded += 1;
        trace!("expanding node {} at cost {}", entry.node, entry.cost);

        // Goal test before the visited check: a destination terminates the
        // search on every pop, duplicate or not.
        if graph.is_destination(entry.node) {
            debug!(
                "reached destination {} after {} expansions",
                entry.node, expanded
            );
            return SearchResult {
                goal: Some(entry.node),
                expanded,
                path: Path::new(entry.path, entry.cost),
            };
        }

        if !visited.insert(entry.node) {
            continue;
        }

        // Descending pushes make the smallest unvisited id the next pop.
        for &neighbor in graph.neighbors(entry.node).iter().rev() {
            if visited.contains(&neighbor) {
                continue;
            }
            let step = graph
                .edge_cost(entry.node, neighbor)
                .expect("neighbors() returned a node without a connecting edge");
            let mut path = entry.path.clone();
            path.push(neighbor);
            stack.push(Frontier {
                node: neighbor,
                path,
                cost: entry.cost + step,
            });
        }
    }

    debug!("stack exhausted after {} expansions", expanded);
    SearchResult {
        goal: None,
        expanded,
        path: Path::new(Vec::new(), Cost::MAX),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_is_destination() {
        let graph = Graph::new([(5, (0, 0))], [], 5, vec![5]).unwrap();

        let result = dfs_search(&graph);
        assert_eq!(result.goal, Some(5));
        assert_eq!(result.expanded, 1);
        assert_eq!(result.path, vec![5]);
        assert_eq!(result.cost(), 0);
    }

    #[test]
    fn self_loop_is_not_re_expanded() {
        let graph = Graph::new(
            [(1, (0, 0)), (2, (1, 0))],
            [(1, 1, 5), (1, 2, 1)],
            1,
            vec![2],
        )
        .unwrap();

        let result = dfs_search(&graph);
        assert_eq!(result.goal, Some(2));
        assert_eq!(result.expanded, 2);
        assert_eq!(result.path, vec![1, 2]);
        assert_eq!(result.cost(), 1);
    }

    #[test]
    fn no_path_result() {
        // 2 has no outgoing edges, 3 is unreachable
        let graph = Graph::new(
            [(1, (0, 0)), (2, (1, 0)), (3, (2, 0))],
            [(1, 2, 1)],
            1,
            vec![3],
        )
        .unwrap();

        let result = dfs_search(&graph);
        assert_eq!(result.goal, None);
        assert!(!result.is_found());
        assert_eq!(result.expanded, 2);
        assert!(result.path.is_empty());
        assert_eq!(result.cost(), Cost::MAX);
    }

    #[test]
    fn display_formats() {
        let graph = Graph::new([(1, (0, 0)), (2, (1, 0))], [(1, 2, 3)], 1, vec![2]).unwrap();
        let result = dfs_search(&graph);
        assert_eq!(
            format!("{}", result),
            "reached 2 after 2 expansions: Path[Cost = 3]: 1 -> 2"
        );

        let graph = Graph::new([(1, (0, 0)), (2, (1, 0))], [], 1, vec![2]).unwrap();
        let result = dfs_search(&graph);
        assert_eq!(format!("{}", result), "no path found after 1 expansions");
    }
}
