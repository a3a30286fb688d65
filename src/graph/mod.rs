//! Core graph types and operations.
//!
//! This module defines the fundamental building blocks:
//! - [`VertexStore`]: ownership and identity of vertex values
//! - [`Graph`]: the policy-parameterized core graph
//! - [`VertexRef`]/[`EdgeRef`]: borrowed views of vertices and edges
//! - [`Dfs`]/[`Bfs`]/[`VertexIter`]: stateful traversal iterators
//! - the four public variants fixing directionality and weighting

mod core;
mod store;
mod traverse;
mod variants;
mod vertex;

pub use self::core::{Graph, Orientation, Weighting};
pub use store::VertexStore;
pub use traverse::{Bfs, Dfs, VertexIter};
pub use variants::{
    UnweightedDirectedGraph, UnweightedUndirectedGraph, WeightedDirectedGraph,
    WeightedUndirectedGraph,
};
pub use vertex::{EdgeRef, Graphable, VertexId, VertexRef};
