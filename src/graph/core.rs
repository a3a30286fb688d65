//! The core graph: a vertex store plus edge-insertion policies.
//!
//! One concrete type covers all four directionality/weighting
//! combinations; the policies are plain values chosen at construction, so
//! there is no dispatch and no per-variant duplication. The public named
//! variants fix the policies and narrow the edge API accordingly.

use indexmap::Equivalent;
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use std::hash::Hash;

use super::store::VertexStore;
use super::traverse::{Bfs, Dfs, VertexIter};
use super::vertex::{Edge, Graphable, VertexId, VertexRef};

/// Edge directionality policy, chosen at graph construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// Edges run one way: origin to destination.
    Directed,
    /// Every edge is stored on both endpoints (once for self-loops).
    Undirected,
}

/// Edge weighting policy, chosen at graph construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weighting {
    /// Edges carry no weight; 0 is stored.
    Unweighted,
    /// Edges carry a caller-supplied 32-bit weight.
    Weighted,
}

/// The policy-parameterized core graph.
///
/// Composes a [`VertexStore`] with the edge-insertion rules of the chosen
/// [`Orientation`] and [`Weighting`]. Most users want one of the four
/// named variants instead; this type is the shared engine behind them and
/// the input to the [`crate::export`] functions.
pub struct Graph<T: Graphable> {
    store: VertexStore<T>,
    orientation: Orientation,
    weighting: Weighting,
}

impl<T: Graphable> Graph<T> {
    /// Creates an empty graph with the given policies.
    pub fn new(orientation: Orientation, weighting: Weighting) -> Self {
        Self {
            store: VertexStore::new(),
            orientation,
            weighting,
        }
    }

    /// The directionality policy this graph was constructed with.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// The weighting policy this graph was constructed with.
    pub fn weighting(&self) -> Weighting {
        self.weighting
    }

    /// Add a vertex holding `value`.
    ///
    /// Returns the new vertex's process-wide unique id, or `None` (graph
    /// unchanged) if an equal value is already present.
    pub fn add_vertex(&mut self, value: T) -> Option<VertexId> {
        self.store.insert(value)
    }

    /// Look up a vertex by value; accepts any type that hashes and compares
    /// like `T` (e.g. `&str` for a `String`-keyed graph).
    pub fn get_vertex<Q>(&self, value: &Q) -> Option<VertexRef<'_, T>>
    where
        Q: ?Sized + Hash + Equivalent<T>,
    {
        self.store.get(value)
    }

    /// Look up a vertex by id. Ids from other graphs return `None`.
    pub fn get_vertex_by_id(&self, id: VertexId) -> Option<VertexRef<'_, T>> {
        self.store.get_by_id(id)
    }

    /// Number of vertices in the graph.
    pub fn vertex_count(&self) -> usize {
        self.store.len()
    }

    /// Number of stored adjacency entries. Undirected edges count twice
    /// (once per endpoint), self-loops once.
    pub fn edge_count(&self) -> usize {
        self.store.edge_entries()
    }

    /// Whether the graph holds no vertices.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Insert an edge between two existing vertices.
    ///
    /// Returns `false` without mutating if either id is unknown or an edge
    /// between the endpoints already exists (in either direction, for
    /// undirected graphs); a differing weight does not overwrite an
    /// existing edge. Undirected insertion stores the reciprocal edge as
    /// well, except for self-loops, which store exactly one edge. The
    /// result is the AND of all insertion attempts: if a reciprocal
    /// insertion fails after the forward edge is stored, the forward edge
    /// is not rolled back.
    pub(crate) fn insert_edge(&mut self, origin: VertexId, dest: VertexId, weight: f32) -> bool {
        let Some(origin_slot) = self.store.slot_of_id(origin) else {
            trace!("edge rejected: unknown origin id {origin}");
            return false;
        };
        let Some(dest_slot) = self.store.slot_of_id(dest) else {
            trace!("edge rejected: unknown destination id {dest}");
            return false;
        };

        if self.store.record(origin_slot).adj.contains(&Edge::to(dest_slot)) {
            trace!("edge rejected: {origin} -> {dest} already present");
            return false;
        }
        if self.orientation == Orientation::Undirected
            && self.store.record(dest_slot).adj.contains(&Edge::to(origin_slot))
        {
            trace!("edge rejected: reciprocal {dest} -> {origin} already present");
            return false;
        }

        let mut added = self
            .store
            .record_mut(origin_slot)
            .adj
            .insert(Edge::new(dest_slot, weight));

        if self.orientation == Orientation::Undirected && origin_slot != dest_slot {
            added &= self
                .store
                .record_mut(dest_slot)
                .adj
                .insert(Edge::new(origin_slot, weight));
        }

        if added {
            debug!("edge added: {origin} -> {dest} (weight {weight})");
        }
        added
    }

    /// Iterate over all vertices in insertion order.
    pub fn iter(&self) -> VertexIter<'_, T> {
        self.store.iter()
    }

    /// End sentinel for [`Graph::iter`]: compares equal to an insertion-order
    /// iterator that has yielded every vertex.
    pub fn iter_end(&self) -> VertexIter<'_, T> {
        VertexIter::end(&self.store)
    }

    /// Depth-first traversal over every vertex, disconnected components
    /// included.
    pub fn dfs(&self) -> Dfs<'_, T> {
        Dfs::new(&self.store)
    }

    /// End sentinel for [`Graph::dfs`]: compares equal to a DFS iterator
    /// that has yielded every vertex.
    pub fn dfs_end(&self) -> Dfs<'_, T> {
        Dfs::end(&self.store)
    }

    /// Breadth-first traversal over every vertex, disconnected components
    /// included.
    pub fn bfs(&self) -> Bfs<'_, T> {
        Bfs::new(&self.store)
    }

    /// End sentinel for [`Graph::bfs`]: compares equal to a BFS iterator
    /// that has yielded every vertex.
    pub fn bfs_end(&self) -> Bfs<'_, T> {
        Bfs::end(&self.store)
    }
}
