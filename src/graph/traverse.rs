//! Stateful traversal iterators: insertion-order, DFS, and BFS.
//!
//! All three are plain value types: cloning one deep-copies its visited
//! set and worklist, so a clone and its original advance independently.
//! Equality compares only the logical position index (the number of
//! vertices yielded so far), so a freshly constructed iterator and an end
//! sentinel compare correctly no matter which path the traversal took.
//!
//! DFS and BFS never recurse. They keep an explicit stack/queue of slot
//! indices plus a visited bitmap, so traversal depth is bounded by memory
//! rather than the call stack. When the worklist drains while unvisited
//! vertices remain, a cursor over the store's enumeration order starts the
//! next disconnected component, so a full run yields every vertex in the
//! graph exactly once.

use log::trace;
use std::collections::VecDeque;
use std::fmt;
use std::iter::FusedIterator;

use super::store::VertexStore;
use super::vertex::{Graphable, VertexRef};

/// Iterator over all vertices in the store's insertion order.
pub struct VertexIter<'g, T: Graphable> {
    store: &'g VertexStore<T>,
    pos: usize,
}

impl<'g, T: Graphable> VertexIter<'g, T> {
    pub(crate) fn new(store: &'g VertexStore<T>) -> Self {
        Self { store, pos: 0 }
    }

    pub(crate) fn end(store: &'g VertexStore<T>) -> Self {
        Self {
            store,
            pos: store.len(),
        }
    }

    /// Number of vertices yielded so far. Two iterators over the same graph
    /// compare equal exactly when their positions match.
    pub fn position(&self) -> usize {
        self.pos
    }
}

impl<'g, T: Graphable> Iterator for VertexIter<'g, T> {
    type Item = VertexRef<'g, T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.store.len() {
            return None;
        }
        let vertex = VertexRef::new(self.store, self.pos);
        self.pos += 1;
        Some(vertex)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.store.len() - self.pos;
        (remaining, Some(remaining))
    }
}

impl<T: Graphable> ExactSizeIterator for VertexIter<'_, T> {}
impl<T: Graphable> FusedIterator for VertexIter<'_, T> {}

impl<T: Graphable> Clone for VertexIter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            store: self.store,
            pos: self.pos,
        }
    }
}

impl<T: Graphable> PartialEq for VertexIter<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

impl<T: Graphable> Eq for VertexIter<'_, T> {}

impl<T: Graphable> fmt::Debug for VertexIter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VertexIter")
            .field("position", &self.pos)
            .finish_non_exhaustive()
    }
}

/// Depth-first traversal iterator.
///
/// Yields every vertex of the graph exactly once: reachable vertices in
/// LIFO discovery order, then each remaining disconnected component in
/// store order.
pub struct Dfs<'g, T: Graphable> {
    store: &'g VertexStore<T>,
    visited: Vec<bool>,
    stack: Vec<usize>,
    cursor: usize,
    pos: usize,
}

impl<'g, T: Graphable> Dfs<'g, T> {
    pub(crate) fn new(store: &'g VertexStore<T>) -> Self {
        trace!("dfs traversal over {} vertices", store.len());
        Self {
            store,
            visited: vec![false; store.len()],
            stack: Vec::new(),
            cursor: 0,
            pos: 0,
        }
    }

    /// An exhausted sentinel, positioned one past the last vertex.
    pub(crate) fn end(store: &'g VertexStore<T>) -> Self {
        Self {
            store,
            visited: Vec::new(),
            stack: Vec::new(),
            cursor: store.len(),
            pos: store.len(),
        }
    }

    /// Number of vertices yielded so far. Two iterators over the same graph
    /// compare equal exactly when their positions match, independent of
    /// their internal visited/stack state.
    pub fn position(&self) -> usize {
        self.pos
    }
}

impl<'g, T: Graphable> Iterator for Dfs<'g, T> {
    type Item = VertexRef<'g, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let slot = match self.stack.pop() {
            Some(slot) => slot,
            // Worklist drained: move the store cursor to the next unvisited
            // vertex to start the next disconnected component.
            None => next_component(self.store, &mut self.visited, &mut self.cursor)?,
        };

        // Mark neighbors at push time so no vertex enters the stack twice.
        for edge in self.store.record(slot).adj.iter() {
            if !self.visited[edge.target] {
                self.visited[edge.target] = true;
                self.stack.push(edge.target);
            }
        }

        self.pos += 1;
        Some(VertexRef::new(self.store, slot))
    }
}

impl<T: Graphable> FusedIterator for Dfs<'_, T> {}

impl<T: Graphable> Clone for Dfs<'_, T> {
    fn clone(&self) -> Self {
        Self {
            store: self.store,
            visited: self.visited.clone(),
            stack: self.stack.clone(),
            cursor: self.cursor,
            pos: self.pos,
        }
    }
}

impl<T: Graphable> PartialEq for Dfs<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

impl<T: Graphable> Eq for Dfs<'_, T> {}

impl<T: Graphable> fmt::Debug for Dfs<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dfs")
            .field("position", &self.pos)
            .finish_non_exhaustive()
    }
}

/// Breadth-first traversal iterator.
///
/// Same skeleton as [`Dfs`] with a FIFO queue: level-order discovery within
/// a component, then each remaining disconnected component in store order.
pub struct Bfs<'g, T: Graphable> {
    store: &'g VertexStore<T>,
    visited: Vec<bool>,
    queue: VecDeque<usize>,
    cursor: usize,
    pos: usize,
}

impl<'g, T: Graphable> Bfs<'g, T> {
    pub(crate) fn new(store: &'g VertexStore<T>) -> Self {
        trace!("bfs traversal over {} vertices", store.len());
        Self {
            store,
            visited: vec![false; store.len()],
            queue: VecDeque::new(),
            cursor: 0,
            pos: 0,
        }
    }

    /// An exhausted sentinel, positioned one past the last vertex.
    pub(crate) fn end(store: &'g VertexStore<T>) -> Self {
        Self {
            store,
            visited: Vec::new(),
            queue: VecDeque::new(),
            cursor: store.len(),
            pos: store.len(),
        }
    }

    /// Number of vertices yielded so far. Two iterators over the same graph
    /// compare equal exactly when their positions match, independent of
    /// their internal visited/queue state.
    pub fn position(&self) -> usize {
        self.pos
    }
}

impl<'g, T: Graphable> Iterator for Bfs<'g, T> {
    type Item = VertexRef<'g, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let slot = match self.queue.pop_front() {
            Some(slot) => slot,
            None => next_component(self.store, &mut self.visited, &mut self.cursor)?,
        };

        for edge in self.store.record(slot).adj.iter() {
            if !self.visited[edge.target] {
                self.visited[edge.target] = true;
                self.queue.push_back(edge.target);
            }
        }

        self.pos += 1;
        Some(VertexRef::new(self.store, slot))
    }
}

impl<T: Graphable> FusedIterator for Bfs<'_, T> {}

impl<T: Graphable> Clone for Bfs<'_, T> {
    fn clone(&self) -> Self {
        Self {
            store: self.store,
            visited: self.visited.clone(),
            queue: self.queue.clone(),
            cursor: self.cursor,
            pos: self.pos,
        }
    }
}

impl<T: Graphable> PartialEq for Bfs<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

impl<T: Graphable> Eq for Bfs<'_, T> {}

impl<T: Graphable> fmt::Debug for Bfs<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bfs")
            .field("position", &self.pos)
            .finish_non_exhaustive()
    }
}

/// Advance `cursor` to the next unvisited vertex in store order, marking it
/// visited. `None` when the store is exhausted; together with an empty
/// worklist that is the traversal's termination condition.
fn next_component<T: Graphable>(
    store: &VertexStore<T>,
    visited: &mut [bool],
    cursor: &mut usize,
) -> Option<usize> {
    while *cursor < store.len() {
        let slot = *cursor;
        *cursor += 1;
        if !visited[slot] {
            visited[slot] = true;
            return Some(slot);
        }
    }
    None
}
