//! # keygraph
//!
//! A generic, in-memory graph library keyed by vertex values.
//!
//! Each vertex wraps a hashable, equality-comparable payload and carries a
//! process-wide unique integer id. Adjacency is stored per vertex and
//! deduplicated by target, and the four directionality/weighting
//! combinations share one core graph type selected by construction-time
//! policies.
//!
//! ## Core Principles
//!
//! - **Value identity**: at most one vertex per distinct payload value in a
//!   graph; lookups work by value (transparently, e.g. `&str` against a
//!   `String`-keyed graph) or by id
//! - **Explicit failure**: rejected inserts return `None`/`false`, never
//!   panic
//! - **Iterative traversal**: DFS and BFS are value-typed iterators with an
//!   explicit stack/queue, so depth is bounded by memory, not the call stack
//! - **Zero magic**: no interior mutability, no hidden locking; the borrow
//!   checker serializes mutation and traversal
//!
//! ## Example
//!
//! ```rust
//! use keygraph::UnweightedDirectedGraph;
//!
//! let mut graph = UnweightedDirectedGraph::new();
//! let a = graph.add_vertex("a").unwrap();
//! let b = graph.add_vertex("b").unwrap();
//! let c = graph.add_vertex("c").unwrap();
//!
//! assert!(graph.add_edge(a, b));
//! assert!(graph.add_edge(b, c));
//! assert!(!graph.add_edge(a, b)); // duplicate edges are rejected
//!
//! let order: Vec<&str> = graph.dfs().map(|v| *v.value()).collect();
//! assert_eq!(order, ["a", "b", "c"]);
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod error;
pub mod export;
pub mod graph;

// Re-export main types
pub use error::{GraphError, Result};
pub use graph::{
    Bfs, Dfs, EdgeRef, Graph, Graphable, Orientation, UnweightedDirectedGraph,
    UnweightedUndirectedGraph, VertexId, VertexIter, VertexRef, VertexStore,
    WeightedDirectedGraph, WeightedUndirectedGraph, Weighting,
};
