#![warn(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications
)]

//! Depth-first route search on small weighted directed graphs.
//!
//! ## Introduction
//! This crate answers single-source, multi-destination reachability questions:
//! given a directed graph with non-negative integer edge costs, one origin node
//! and a set of destination nodes, it explores the graph depth-first and reports
//! the first destination encountered, the route taken to get there and that
//! route's total cost.
//!
//! The traversal order is fully deterministic: whenever several unvisited
//! neighbors compete, the one with the smallest [`NodeId`] is explored first.
//! Because the search is depth-first, the returned route is the one the
//! traversal happened to take — it is **not** guaranteed to be the shortest or
//! cheapest route.
//!
//! ## Examples
//! Building a [`Graph`] and searching it:
//! ```
//! use route_finder::{dfs_search, Graph};
//!
//! // 1 --4--> 2
//! // 1 --2--> 3 --1--> 4
//! let graph = Graph::new(
//!     [(1, (4, 1)), (2, (2, 2)), (3, (4, 4)), (4, (6, 3))],
//!     [(1, 2, 4), (1, 3, 2), (3, 4, 1)],
//!     1,
//!     vec![4],
//! )
//! .unwrap();
//!
//! let result = dfs_search(&graph);
//! assert_eq!(result.goal, Some(4));
//! assert_eq!(result.path, vec![1, 3, 4]);
//! assert_eq!(result.cost(), 3);
//! ```
//!
//! Graphs can also be loaded from a text description with a `Nodes:` /
//! `Edges:` / `Origin:` / `Destinations:` section layout:
//! ```
//! use route_finder::{dfs_search, parse::parse_graph};
//!
//! let graph = parse_graph(
//!     "Nodes:
//!      1: (0,0)
//!      2: (3,1)
//!      Edges:
//!      (1,2): 7
//!      Origin:
//!      1
//!      Destinations:
//!      2",
//! )
//! .unwrap();
//!
//! let result = dfs_search(&graph);
//! assert_eq!(result.goal, Some(2));
//! assert_eq!(result.cost(), 7);
//! ```
//!
//! A search that exhausts the graph without reaching a destination is a normal
//! outcome, not an error: the result carries `goal: None`, an empty path and a
//! [`Cost::MAX`](Cost) sentinel cost. Callers branch on the goal, not on an
//! `Err`.

/// The Type used to identify a Node in the Graph
pub type NodeId = u32;

/// A Node's 2D coordinates. Carried for display purposes only; the search never
/// reads them.
pub type Point = (i32, i32);

/// The Type used to represent the Cost of traversing an Edge
pub type Cost = usize;

pub mod node_id;

mod path;
pub use self::path::Path;

mod error;
pub use self::error::{EdgeNotFound, MalformedGraph};

mod graph;
pub use self::graph::{Graph, Node};

mod dfs;
pub use self::dfs::{dfs_search, SearchResult};

pub mod parse;

/// The most common imports
pub mod prelude {
    pub use crate::{dfs_search, Cost, Graph, Node, NodeId, Path, Point, SearchResult};
}
