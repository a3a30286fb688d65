//! The vertex store: value ownership, identity assignment, and lookup.
//!
//! Vertices live in an insertion-ordered map keyed by their payload value,
//! so "one vertex per distinct value" is a structural property rather than
//! something checked after the fact. A side index maps ids to dense slots
//! for O(1) identity lookup. Edges refer to slots, not to other vertices,
//! which keeps ownership acyclic and would let a removal path be added
//! later without restructuring.

use indexmap::{Equivalent, IndexMap, IndexSet};
use log::{debug, trace};
use std::collections::HashMap;
use std::hash::Hash;

use super::traverse::VertexIter;
use super::vertex::{next_vertex_id, Edge, Graphable, VertexId, VertexRef};

/// Per-vertex bookkeeping: assigned id plus the adjacency set.
///
/// The payload itself is the map key, so it is not repeated here.
pub(crate) struct VertexRecord {
    pub(crate) id: VertexId,
    pub(crate) adj: IndexSet<Edge>,
}

/// Owns the set of distinct vertex values in one graph and assigns identity.
pub struct VertexStore<T: Graphable> {
    /// Payload -> record, in insertion order. Slot = map index.
    vertices: IndexMap<T, VertexRecord>,
    /// Id -> slot, for identity lookup.
    by_id: HashMap<VertexId, usize>,
}

impl<T: Graphable> VertexStore<T> {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            vertices: IndexMap::new(),
            by_id: HashMap::new(),
        }
    }

    /// Insert a value as a new vertex.
    ///
    /// Returns the freshly allocated id, or `None` (store untouched) if an
    /// equal value is already present. The id counter is process-wide, so
    /// the returned ids increase monotonically even across graphs.
    pub fn insert(&mut self, value: T) -> Option<VertexId> {
        if self.vertices.contains_key(&value) {
            trace!("vertex rejected: equal value already present");
            return None;
        }

        let id = next_vertex_id();
        let slot = self.vertices.len();
        self.vertices.insert(
            value,
            VertexRecord {
                id,
                adj: IndexSet::new(),
            },
        );
        self.by_id.insert(id, slot);
        debug!("vertex added: id={id} slot={slot}");

        Some(id)
    }

    /// Look up a vertex by value.
    ///
    /// The query type only needs to hash and compare like `T`, so e.g. a
    /// `String`-keyed store answers `&str` queries without constructing a
    /// temporary `String`.
    pub fn get<Q>(&self, value: &Q) -> Option<VertexRef<'_, T>>
    where
        Q: ?Sized + Hash + Equivalent<T>,
    {
        self.vertices
            .get_index_of(value)
            .map(|slot| VertexRef::new(self, slot))
    }

    /// Look up a vertex by id.
    ///
    /// Returns `None` for unknown ids, including ids that belong to a
    /// different graph.
    pub fn get_by_id(&self, id: VertexId) -> Option<VertexRef<'_, T>> {
        self.by_id.get(&id).map(|&slot| VertexRef::new(self, slot))
    }

    /// Number of vertices in the store.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Whether the store holds no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Iterate over all vertices in the store's insertion order.
    ///
    /// The order is an implementation property, not a contract; callers may
    /// only rely on seeing each vertex exactly once.
    pub fn iter(&self) -> VertexIter<'_, T> {
        VertexIter::new(self)
    }

    /// Total number of stored adjacency entries. Undirected edges count
    /// twice (once per endpoint), self-loops once.
    pub(crate) fn edge_entries(&self) -> usize {
        self.vertices.values().map(|record| record.adj.len()).sum()
    }

    pub(crate) fn slot_of_id(&self, id: VertexId) -> Option<usize> {
        self.by_id.get(&id).copied()
    }

    pub(crate) fn record(&self, slot: usize) -> &VertexRecord {
        let (_, record) = self
            .vertices
            .get_index(slot)
            .expect("vertex slot out of bounds");
        record
    }

    pub(crate) fn record_mut(&mut self, slot: usize) -> &mut VertexRecord {
        let (_, record) = self
            .vertices
            .get_index_mut(slot)
            .expect("vertex slot out of bounds");
        record
    }

    pub(crate) fn value(&self, slot: usize) -> &T {
        let (value, _) = self
            .vertices
            .get_index(slot)
            .expect("vertex slot out of bounds");
        value
    }
}

impl<T: Graphable> Default for VertexStore<T> {
    fn default() -> Self {
        Self::new()
    }
}
