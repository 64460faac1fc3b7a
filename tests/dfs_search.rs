use route_finder::parse::parse_graph;
use route_finder::prelude::*;

/// The route description used by the examples this crate grew out of:
/// five towns, a handful of two-way roads with asymmetric costs.
const SAMPLE: &str = "\
Nodes:
1: (4,1)
2: (2,2)
3: (4,4)
4: (6,3)
5: (5,6)
Edges:
(2,1): 4
(3,1): 5
(1,3): 5
(2,3): 4
(3,2): 5
(4,1): 6
(1,4): 6
(4,3): 5
(3,5): 6
(5,3): 6
(4,5): 7
(5,4): 8
Origin:
2
Destinations:
5;4
";

fn sample_graph() -> Graph {
    parse_graph(SAMPLE).unwrap()
}

#[test]
fn sample_route() {
    let result = dfs_search(&sample_graph());

    assert_eq!(result.goal, Some(5));
    assert_eq!(result.expanded, 4);
    assert_eq!(result.path, vec![2, 1, 3, 5]);
    assert_eq!(result.cost(), 15);
}

#[test]
fn branch_then_dead_end() {
    // 1 -> 2 costs 4, 1 -> 3 costs 2, 3 -> 4 costs 1. node 2 has the smaller
    // id, so it is explored first, turns out to be a dead end, and the search
    // backtracks through 3 to the goal.
    let graph = Graph::new(
        [(1, (4, 1)), (2, (2, 2)), (3, (4, 4)), (4, (6, 3))],
        [(1, 2, 4), (1, 3, 2), (3, 4, 1)],
        1,
        vec![4],
    )
    .unwrap();

    let result = dfs_search(&graph);
    assert_eq!(result.goal, Some(4));
    assert_eq!(result.expanded, 4);
    assert_eq!(result.path, vec![1, 3, 4]);
    assert_eq!(result.cost(), 3);
}

#[test]
fn smallest_id_first_tie_break() {
    // all three neighbors of 0 are unvisited; 1 and 2 are dead ends, 3 is the
    // destination. smallest-id-first means 1 and 2 are both expanded before 3.
    let graph = Graph::new(
        [(0, (0, 0)), (1, (1, 0)), (2, (2, 0)), (3, (3, 0))],
        [(0, 3, 7), (0, 1, 2), (0, 2, 5)],
        0,
        vec![3],
    )
    .unwrap();

    let result = dfs_search(&graph);
    assert_eq!(result.goal, Some(3));
    assert_eq!(result.expanded, 4);
    assert_eq!(result.path, vec![0, 3]);
    assert_eq!(result.cost(), 7);
}

#[test]
fn origin_is_destination() {
    let graph = Graph::new(
        [(2, (0, 0)), (3, (1, 1))],
        [(2, 3, 1)],
        2,
        vec![3, 2],
    )
    .unwrap();

    let result = dfs_search(&graph);
    assert_eq!(result.goal, Some(2));
    assert_eq!(result.expanded, 1);
    assert_eq!(result.path, vec![2]);
    assert_eq!(result.cost(), 0);
}

#[test]
fn unreachable_destination() {
    // 4 has no incoming edges; the reachable component is {1, 2, 3}, with 3
    // reached twice (once via 1, once via 2). the duplicate pop is counted but
    // not re-expanded.
    let graph = Graph::new(
        [(1, (0, 0)), (2, (1, 0)), (3, (2, 0)), (4, (3, 0))],
        [(1, 2, 1), (1, 3, 1), (2, 3, 1)],
        1,
        vec![4],
    )
    .unwrap();

    let result = dfs_search(&graph);
    assert_eq!(result.goal, None);
    assert_eq!(result.expanded, 4);
    assert_eq!(result.path, vec![]);
    assert_eq!(result.cost(), usize::MAX);
}

#[test]
fn expansion_bound() {
    // every expansion corresponds to a stack pop, and total pushes are bounded
    // by the edge count plus the initial entry
    let graph = sample_graph();
    let result = dfs_search(&graph);
    assert!(result.expanded <= graph.edge_count() + 1);

    let graph = Graph::new(
        [(1, (0, 0)), (2, (1, 0)), (3, (2, 0)), (4, (3, 0))],
        [(1, 2, 1), (1, 3, 1), (2, 3, 1)],
        1,
        vec![4],
    )
    .unwrap();
    let result = dfs_search(&graph);
    assert!(result.expanded <= graph.edge_count() + 1);
}

#[test]
fn path_is_connected_and_costed() {
    let graph = sample_graph();
    let result = dfs_search(&graph);
    assert!(result.is_found());

    let steps = result.path.steps();
    assert_eq!(steps.first(), Some(&graph.origin()));
    assert_eq!(steps.last(), result.goal.as_ref());

    let mut total = 0;
    for pair in steps.windows(2) {
        total += graph.edge_cost(pair[0], pair[1]).unwrap();
    }
    assert_eq!(total, result.cost());
}

#[test]
fn repeated_searches_are_identical() {
    let graph = sample_graph();

    let first = dfs_search(&graph);
    for _ in 0..10 {
        assert_eq!(dfs_search(&graph), first);
    }
}
