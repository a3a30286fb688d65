//! A tour of the four graph variants.
//!
//! Builds the same five-vertex shape in each variant, prints the vertices
//! in insertion, DFS, and BFS order, and shows that vertex ids are global:
//! an id minted by one graph does not resolve in another.

use keygraph::{
    Graph, Graphable, UnweightedDirectedGraph, UnweightedUndirectedGraph, VertexId,
    WeightedDirectedGraph, WeightedUndirectedGraph,
};
use std::fmt::Display;

fn print_walks<T: Graphable + Display>(name: &str, graph: &Graph<T>) {
    println!("{name}: [");
    for vertex in graph.iter() {
        println!("\t{vertex}");
    }
    println!("]");

    let dfs: Vec<String> = graph.dfs().map(|v| v.value().to_string()).collect();
    let bfs: Vec<String> = graph.bfs().map(|v| v.value().to_string()).collect();
    println!("  dfs: {}", dfs.join(" "));
    println!("  bfs: {}\n", bfs.join(" "));
}

fn check_id(name: &str, graph: &Graph<i32>, id: VertexId) {
    match graph.get_vertex_by_id(id) {
        Some(vertex) => println!("  {name} resolves id {id}: {vertex}"),
        None => println!("  {name} does not know id {id}"),
    }
}

fn main() {
    // 0 -> 1, 0 -> 3, 1 -> 2, 3 -> 2, 3 -> 4
    let edges = [(0, 1), (0, 3), (1, 2), (3, 2), (3, 4)];
    let weights = [0.1, 0.2, 0.4, 0.5, 0.6];

    let mut graph1 = UnweightedDirectedGraph::new();
    let ids1: Vec<VertexId> = (0..5).map(|v| graph1.add_vertex(v).unwrap()).collect();
    let mut ok = true;
    for &(from, to) in &edges {
        ok &= graph1.add_edge(ids1[from], ids1[to]);
    }
    println!("unweighted directed graph built: {ok}");
    print_walks("graph 1", graph1.core());

    let mut graph2 = WeightedDirectedGraph::new();
    let ids2: Vec<VertexId> = (0..5).map(|v| graph2.add_vertex(v).unwrap()).collect();
    let mut ok = true;
    for (&(from, to), &w) in edges.iter().zip(&weights) {
        ok &= graph2.add_edge(ids2[from], ids2[to], w);
    }
    println!("weighted directed graph built: {ok}");
    print_walks("graph 2", graph2.core());

    let mut graph3 = UnweightedUndirectedGraph::new();
    let ids3: Vec<VertexId> = (0..5).map(|v| graph3.add_vertex(v).unwrap()).collect();
    let mut ok = true;
    for &(from, to) in &edges {
        ok &= graph3.add_edge(ids3[from], ids3[to]);
    }
    println!("unweighted undirected graph built: {ok}");
    print_walks("graph 3", graph3.core());

    let mut graph4 = WeightedUndirectedGraph::new();
    let ids4: Vec<VertexId> = (0..5).map(|v| graph4.add_vertex(v).unwrap()).collect();
    let mut ok = true;
    for (&(from, to), &w) in edges.iter().zip(&weights) {
        ok &= graph4.add_edge(ids4[from], ids4[to], w);
    }
    println!("weighted undirected graph built: {ok}");
    print_walks("graph 4", graph4.core());

    // Ids are allocated by one process-wide counter, so each graph only
    // resolves the ids it minted itself.
    println!("id resolution across graphs:");
    check_id("graph 1", graph1.core(), ids1[0]);
    check_id("graph 1", graph1.core(), ids2[0]);
    check_id("graph 2", graph2.core(), ids2[0]);
    check_id("graph 2", graph2.core(), ids1[0]);
}
