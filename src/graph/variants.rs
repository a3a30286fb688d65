//! The four public graph variants.
//!
//! Each variant is a thin wrapper that fixes the [`Orientation`] and
//! [`Weighting`] policies of one [`Graph`] and exposes the matching edge
//! API: the weight parameter exists only on the weighted variants. The
//! shared surface is generated once by a macro instead of being copied
//! four times.

use indexmap::Equivalent;
use std::hash::Hash;

use super::core::{Graph, Orientation, Weighting};
use super::traverse::{Bfs, Dfs, VertexIter};
use super::vertex::{Graphable, VertexId, VertexRef};

macro_rules! graph_variant {
    ($(#[$doc:meta])* $name:ident, $orientation:expr, $weighting:expr) => {
        $(#[$doc])*
        pub struct $name<T: Graphable> {
            inner: Graph<T>,
        }

        impl<T: Graphable> $name<T> {
            /// Creates an empty graph.
            pub fn new() -> Self {
                Self {
                    inner: Graph::new($orientation, $weighting),
                }
            }

            /// Add a vertex holding `value`.
            ///
            /// Returns the new vertex's process-wide unique id, or `None`
            /// (graph unchanged) if an equal value is already present.
            pub fn add_vertex(&mut self, value: T) -> Option<VertexId> {
                self.inner.add_vertex(value)
            }

            /// Look up a vertex by value; accepts any type that hashes and
            /// compares like `T`.
            pub fn get_vertex<Q>(&self, value: &Q) -> Option<VertexRef<'_, T>>
            where
                Q: ?Sized + Hash + Equivalent<T>,
            {
                self.inner.get_vertex(value)
            }

            /// Look up a vertex by id. Ids from other graphs return `None`.
            pub fn get_vertex_by_id(&self, id: VertexId) -> Option<VertexRef<'_, T>> {
                self.inner.get_vertex_by_id(id)
            }

            /// Number of vertices in the graph.
            pub fn vertex_count(&self) -> usize {
                self.inner.vertex_count()
            }

            /// Number of stored adjacency entries. Undirected edges count
            /// twice (once per endpoint), self-loops once.
            pub fn edge_count(&self) -> usize {
                self.inner.edge_count()
            }

            /// Whether the graph holds no vertices.
            pub fn is_empty(&self) -> bool {
                self.inner.is_empty()
            }

            /// Iterate over all vertices in insertion order.
            pub fn iter(&self) -> VertexIter<'_, T> {
                self.inner.iter()
            }

            /// End sentinel for `iter`.
            pub fn iter_end(&self) -> VertexIter<'_, T> {
                self.inner.iter_end()
            }

            /// Depth-first traversal over every vertex, disconnected
            /// components included.
            pub fn dfs(&self) -> Dfs<'_, T> {
                self.inner.dfs()
            }

            /// End sentinel for `dfs`.
            pub fn dfs_end(&self) -> Dfs<'_, T> {
                self.inner.dfs_end()
            }

            /// Breadth-first traversal over every vertex, disconnected
            /// components included.
            pub fn bfs(&self) -> Bfs<'_, T> {
                self.inner.bfs()
            }

            /// End sentinel for `bfs`.
            pub fn bfs_end(&self) -> Bfs<'_, T> {
                self.inner.bfs_end()
            }

            /// The underlying policy-parameterized graph, e.g. for the
            /// [`crate::export`] functions.
            pub fn core(&self) -> &Graph<T> {
                &self.inner
            }
        }

        impl<T: Graphable> Default for $name<T> {
            fn default() -> Self {
                Self::new()
            }
        }
    };
}

graph_variant!(
    /// A directed graph with unweighted edges.
    UnweightedDirectedGraph,
    Orientation::Directed,
    Weighting::Unweighted
);

graph_variant!(
    /// A directed graph with weighted edges.
    WeightedDirectedGraph,
    Orientation::Directed,
    Weighting::Weighted
);

graph_variant!(
    /// An undirected graph with unweighted edges.
    UnweightedUndirectedGraph,
    Orientation::Undirected,
    Weighting::Unweighted
);

graph_variant!(
    /// An undirected graph with weighted edges.
    WeightedUndirectedGraph,
    Orientation::Undirected,
    Weighting::Weighted
);

impl<T: Graphable> UnweightedDirectedGraph<T> {
    /// Add a directed edge from `origin` to `dest`.
    ///
    /// Returns `false` without mutating if either id is unknown or the edge
    /// already exists.
    pub fn add_edge(&mut self, origin: VertexId, dest: VertexId) -> bool {
        self.inner.insert_edge(origin, dest, 0.0)
    }
}

impl<T: Graphable> WeightedDirectedGraph<T> {
    /// Add a directed edge from `origin` to `dest` with the given weight.
    ///
    /// Returns `false` without mutating if either id is unknown or the edge
    /// already exists; an existing edge's weight is never overwritten. The
    /// weight is stored as given, with no range or NaN validation.
    pub fn add_edge(&mut self, origin: VertexId, dest: VertexId, weight: f32) -> bool {
        self.inner.insert_edge(origin, dest, weight)
    }
}

impl<T: Graphable> UnweightedUndirectedGraph<T> {
    /// Add an undirected edge between `origin` and `dest`.
    ///
    /// Stores the edge on both endpoints (once for a self-loop). Returns
    /// `false` without mutating if either id is unknown or an edge between
    /// the endpoints already exists in either direction. The result is the
    /// AND of both insertions; a reciprocal failure does not roll back the
    /// forward edge.
    pub fn add_edge(&mut self, origin: VertexId, dest: VertexId) -> bool {
        self.inner.insert_edge(origin, dest, 0.0)
    }
}

impl<T: Graphable> WeightedUndirectedGraph<T> {
    /// Add an undirected edge between `origin` and `dest` with the given
    /// weight.
    ///
    /// Stores the edge on both endpoints (once for a self-loop). Returns
    /// `false` without mutating if either id is unknown or an edge between
    /// the endpoints already exists in either direction; an existing edge's
    /// weight is never overwritten. The result is the AND of both
    /// insertions; a reciprocal failure does not roll back the forward
    /// edge.
    pub fn add_edge(&mut self, origin: VertexId, dest: VertexId, weight: f32) -> bool {
        self.inner.insert_edge(origin, dest, weight)
    }
}
