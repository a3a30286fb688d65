//! Unit tests for the traversal iterators: insertion order, DFS, BFS,
//! position-based equality, and clone independence.

use keygraph::{UnweightedDirectedGraph, UnweightedUndirectedGraph, VertexId};

/// The original five-vertex diamond-plus-tail: 0->1, 0->3, 1->2, 3->2,
/// 3->4. Vertex 2 is reachable along two paths.
fn diamond() -> (UnweightedDirectedGraph<u32>, Vec<VertexId>) {
    let mut graph = UnweightedDirectedGraph::new();
    let ids: Vec<VertexId> = (0..5).map(|v| graph.add_vertex(v).unwrap()).collect();

    assert!(graph.add_edge(ids[0], ids[1]));
    assert!(graph.add_edge(ids[0], ids[3]));
    assert!(graph.add_edge(ids[1], ids[2]));
    assert!(graph.add_edge(ids[3], ids[2]));
    assert!(graph.add_edge(ids[3], ids[4]));

    (graph, ids)
}

#[test]
fn test_insertion_order_iteration() {
    let (graph, _) = diamond();
    let order: Vec<u32> = graph.iter().map(|v| *v.value()).collect();
    assert_eq!(order, [0, 1, 2, 3, 4]);
}

#[test]
fn test_dfs_visits_every_vertex_once() {
    let (graph, _) = diamond();

    let mut order: Vec<u32> = graph.dfs().map(|v| *v.value()).collect();
    assert_eq!(order.len(), graph.vertex_count());

    // Vertex 2 is reachable via 0->1->2 and 0->3->2 but appears once.
    assert_eq!(order.iter().filter(|&&v| v == 2).count(), 1);

    order.sort_unstable();
    assert_eq!(order, [0, 1, 2, 3, 4]);
}

#[test]
fn test_dfs_order_is_depth_first() {
    let (graph, _) = diamond();
    let order: Vec<u32> = graph.dfs().map(|v| *v.value()).collect();

    // Neighbors are stacked in adjacency order, so the last-added branch
    // (0->3) is explored first.
    assert_eq!(order, [0, 3, 4, 2, 1]);
}

#[test]
fn test_bfs_order_is_level_order() {
    let (graph, _) = diamond();
    let order: Vec<u32> = graph.bfs().map(|v| *v.value()).collect();
    assert_eq!(order, [0, 1, 3, 2, 4]);
}

#[test]
fn test_traversal_drains_disconnected_components() {
    let mut graph = UnweightedDirectedGraph::new();
    let a = graph.add_vertex("a").unwrap();
    let b = graph.add_vertex("b").unwrap();
    let c = graph.add_vertex("c").unwrap();
    let d = graph.add_vertex("d").unwrap();
    assert!(graph.add_edge(a, b));
    assert!(graph.add_edge(c, d));

    let dfs: Vec<&str> = graph.dfs().map(|v| *v.value()).collect();
    let bfs: Vec<&str> = graph.bfs().map(|v| *v.value()).collect();

    // Both components are visited, the second starting from the next
    // unvisited vertex in store order.
    assert_eq!(dfs, ["a", "b", "c", "d"]);
    assert_eq!(bfs, ["a", "b", "c", "d"]);
}

#[test]
fn test_undirected_traversal_covers_all() {
    let mut graph = UnweightedUndirectedGraph::new();
    let ids: Vec<VertexId> = (0..6).map(|v| graph.add_vertex(v).unwrap()).collect();
    assert!(graph.add_edge(ids[0], ids[1]));
    assert!(graph.add_edge(ids[1], ids[2]));
    assert!(graph.add_edge(ids[3], ids[4]));
    // ids[5] is isolated.

    let mut seen: Vec<u32> = graph.dfs().map(|v| *v.value()).collect();
    assert_eq!(seen.len(), 6);
    seen.sort_unstable();
    assert_eq!(seen, [0, 1, 2, 3, 4, 5]);
}

#[test]
fn test_iterator_equality_is_position_only() {
    let (graph, _) = diamond();

    let mut walker = graph.dfs();
    let mut pacer = graph.dfs();
    assert_eq!(walker, pacer);

    walker.next();
    assert_ne!(walker, pacer);
    assert_eq!(walker.position(), 1);

    pacer.next();
    assert_eq!(walker, pacer);
}

#[test]
fn test_exhausted_iterator_equals_end_sentinel() {
    let (graph, _) = diamond();

    let mut dfs = graph.dfs();
    while dfs.next().is_some() {}
    assert_eq!(dfs, graph.dfs_end());
    assert_eq!(dfs.position(), graph.vertex_count());

    let mut bfs = graph.bfs();
    while bfs.next().is_some() {}
    assert_eq!(bfs, graph.bfs_end());

    let mut iter = graph.iter();
    while iter.next().is_some() {}
    assert_eq!(iter, graph.iter_end());
}

#[test]
fn test_begin_equals_end_on_empty_graph() {
    let graph: UnweightedDirectedGraph<i32> = UnweightedDirectedGraph::new();
    assert_eq!(graph.dfs(), graph.dfs_end());
    assert_eq!(graph.bfs(), graph.bfs_end());
    assert_eq!(graph.iter(), graph.iter_end());
}

#[test]
fn test_cloned_iterator_advances_independently() {
    let (graph, _) = diamond();

    let mut original = graph.dfs();
    original.next();
    original.next();

    let clone = original.clone();
    let rest_of_original: Vec<u32> = original.map(|v| *v.value()).collect();
    let rest_of_clone: Vec<u32> = clone.map(|v| *v.value()).collect();

    // The clone replays exactly the suffix the original had left: its
    // visited set and stack were deep-copied, not shared.
    assert_eq!(rest_of_original, rest_of_clone);
    assert_eq!(rest_of_original.len(), 3);
}

#[test]
fn test_self_loop_traversal_terminates() {
    let mut graph = UnweightedUndirectedGraph::new();
    let a = graph.add_vertex("a").unwrap();
    assert!(graph.add_edge(a, a));

    let seen: Vec<&str> = graph.bfs().map(|v| *v.value()).collect();
    assert_eq!(seen, ["a"]);
}
