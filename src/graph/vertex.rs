//! Vertex identity, payload capability bound, and borrowed views.
//!
//! Identity is a process-wide monotonic counter: every vertex ever created,
//! in any graph, gets a fresh [`VertexId`]. Ids are never reused and never
//! reset, so an id uniquely names one vertex for the lifetime of the
//! process, and ids from one graph do not resolve in another.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};

use super::store::VertexStore;

/// Unique identifier for a vertex (process-wide monotonic counter).
pub type VertexId = u64;

/// The one mutable global: the id allocator. Starts at 0 at process start
/// and is only ever incremented.
static VERTEX_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Allocate the next vertex id.
pub(crate) fn next_vertex_id() -> VertexId {
    VERTEX_ID_COUNTER.fetch_add(1, Ordering::Relaxed)
}

/// Capability bound for vertex payloads: hashable and equality-comparable.
///
/// Blanket-implemented for every eligible type; user code never implements
/// it by hand.
pub trait Graphable: Eq + Hash {}

impl<T: Eq + Hash> Graphable for T {}

/// Internal adjacency record: a dense slot index into the owning store plus
/// a 32-bit weight (0 for unweighted graphs).
///
/// Equality and hashing consider the target only, so a second edge to the
/// same target with a different weight is a duplicate, not a distinct edge.
/// The weight is stored as given: no range or NaN validation.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Edge {
    pub(crate) target: usize,
    pub(crate) weight: f32,
}

impl Edge {
    pub(crate) fn new(target: usize, weight: f32) -> Self {
        Self { target, weight }
    }

    /// A weightless probe edge, used for duplicate checks.
    pub(crate) fn to(target: usize) -> Self {
        Self::new(target, 0.0)
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.target == other.target
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.target.hash(state);
    }
}

/// A borrowed view of a vertex in a graph.
///
/// Holds a reference into the vertex store, so it is `Copy` and stays valid
/// for as long as the graph is borrowed. Two refs compare equal when their
/// payload values compare equal, and a ref compares directly against a bare
/// payload.
pub struct VertexRef<'g, T: Graphable> {
    store: &'g VertexStore<T>,
    slot: usize,
}

impl<'g, T: Graphable> VertexRef<'g, T> {
    pub(crate) fn new(store: &'g VertexStore<T>, slot: usize) -> Self {
        Self { store, slot }
    }

    /// The vertex's process-wide unique id.
    pub fn id(&self) -> VertexId {
        self.store.record(self.slot).id
    }

    /// The payload value stored in the vertex.
    pub fn value(&self) -> &'g T {
        self.store.value(self.slot)
    }

    /// Number of outgoing edges.
    pub fn degree(&self) -> usize {
        self.store.record(self.slot).adj.len()
    }

    /// Iterate over the adjacent vertices, in the adjacency set's own order.
    pub fn neighbors(&self) -> impl Iterator<Item = VertexRef<'g, T>> + 'g {
        let store = self.store;
        store
            .record(self.slot)
            .adj
            .iter()
            .map(move |edge| VertexRef::new(store, edge.target))
    }

    /// Iterate over the outgoing edges, with weights.
    pub fn edges(&self) -> impl Iterator<Item = EdgeRef<'g, T>> + 'g {
        let store = self.store;
        store
            .record(self.slot)
            .adj
            .iter()
            .map(move |edge| EdgeRef {
                store,
                target: edge.target,
                weight: edge.weight,
            })
    }

    pub(crate) fn slot(&self) -> usize {
        self.slot
    }
}

impl<T: Graphable> Clone for VertexRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Graphable> Copy for VertexRef<'_, T> {}

impl<T: Graphable> PartialEq for VertexRef<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.value() == other.value()
    }
}

impl<T: Graphable> Eq for VertexRef<'_, T> {}

impl<T: Graphable> PartialEq<T> for VertexRef<'_, T> {
    fn eq(&self, other: &T) -> bool {
        self.value() == other
    }
}

impl<T: Graphable + fmt::Debug> fmt::Debug for VertexRef<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VertexRef")
            .field("id", &self.id())
            .field("value", self.value())
            .finish()
    }
}

impl<T: Graphable + fmt::Display> fmt::Display for VertexRef<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[id: {} value: {}]", self.id(), self.value())
    }
}

/// A borrowed view of one outgoing edge: target vertex plus weight.
pub struct EdgeRef<'g, T: Graphable> {
    store: &'g VertexStore<T>,
    target: usize,
    weight: f32,
}

impl<'g, T: Graphable> EdgeRef<'g, T> {
    /// The vertex this edge points to.
    pub fn target(&self) -> VertexRef<'g, T> {
        VertexRef::new(self.store, self.target)
    }

    /// The edge weight (0 in unweighted graphs).
    pub fn weight(&self) -> f32 {
        self.weight
    }
}

impl<T: Graphable> Clone for EdgeRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Graphable> Copy for EdgeRef<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_strictly_increase() {
        let first = next_vertex_id();
        let second = next_vertex_id();
        // Other tests allocate concurrently, so only relative order is
        // guaranteed here.
        assert!(second > first);
    }

    #[test]
    fn test_edge_equality_ignores_weight() {
        let a = Edge::new(3, 0.5);
        let b = Edge::new(3, 2.5);
        let c = Edge::new(4, 0.5);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_edge_probe_matches_weighted_edge() {
        let stored = Edge::new(7, 1.25);
        assert_eq!(Edge::to(7), stored);
    }
}
