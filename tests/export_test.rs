//! Unit tests for DOT and JSON export.

use keygraph::export::{export_dot, export_json, write_dot, write_json};
use keygraph::{
    GraphError, UnweightedDirectedGraph, UnweightedUndirectedGraph, WeightedDirectedGraph,
};

fn directed_pair() -> (UnweightedDirectedGraph<&'static str>, u64, u64) {
    let mut graph = UnweightedDirectedGraph::new();
    let a = graph.add_vertex("alpha").unwrap();
    let b = graph.add_vertex("beta").unwrap();
    assert!(graph.add_edge(a, b));
    (graph, a, b)
}

#[test]
fn test_dot_directed() {
    let (graph, a, b) = directed_pair();
    let dot = export_dot(graph.core()).unwrap();

    assert!(dot.starts_with("digraph keygraph {"));
    assert!(dot.contains(&format!("v{a} [label=\"alpha\"];")));
    assert!(dot.contains(&format!("v{b} [label=\"beta\"];")));
    assert!(dot.contains(&format!("v{a} -> v{b};")));
    assert!(dot.trim_end().ends_with('}'));
}

#[test]
fn test_dot_undirected_collapses_reciprocal_edges() {
    let mut graph = UnweightedUndirectedGraph::new();
    let a = graph.add_vertex("a").unwrap();
    let b = graph.add_vertex("b").unwrap();
    let c = graph.add_vertex("c").unwrap();
    assert!(graph.add_edge(a, b));
    assert!(graph.add_edge(b, c));

    let dot = export_dot(graph.core()).unwrap();
    assert!(dot.starts_with("graph keygraph {"));
    // Two undirected edges render as exactly two connector lines even
    // though four adjacency entries are stored.
    assert_eq!(dot.matches(" -- ").count(), 2);
    assert_eq!(graph.edge_count(), 4);
}

#[test]
fn test_dot_weighted_labels_edges() {
    let mut graph = WeightedDirectedGraph::new();
    let a = graph.add_vertex("a").unwrap();
    let b = graph.add_vertex("b").unwrap();
    assert!(graph.add_edge(a, b, 0.5));

    let dot = export_dot(graph.core()).unwrap();
    assert!(dot.contains(&format!("v{a} -> v{b} [label=\"0.5\"];")));
}

#[test]
fn test_dot_escapes_labels() {
    let mut graph = UnweightedDirectedGraph::new();
    graph.add_vertex("say \"hi\"").unwrap();

    let dot = export_dot(graph.core()).unwrap();
    assert!(dot.contains("[label=\"say \\\"hi\\\"\"];"));
}

#[test]
fn test_json_structure() {
    let (graph, a, b) = directed_pair();
    let rendered = export_json(graph.core()).unwrap();

    let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
    let nodes = value["nodes"].as_array().unwrap();
    let links = value["links"].as_array().unwrap();

    assert_eq!(nodes.len(), graph.vertex_count());
    assert_eq!(links.len(), 1);
    assert_eq!(links[0]["source"], a);
    assert_eq!(links[0]["target"], b);
    // Unweighted graphs omit the weight field.
    assert!(links[0].get("weight").is_none());
}

#[test]
fn test_json_weighted_links() {
    let mut graph = WeightedDirectedGraph::new();
    let a = graph.add_vertex(1).unwrap();
    let b = graph.add_vertex(2).unwrap();
    assert!(graph.add_edge(a, b, 2.5));

    let value: serde_json::Value =
        serde_json::from_str(&export_json(graph.core()).unwrap()).unwrap();
    assert_eq!(value["links"][0]["weight"], 2.5);
}

#[test]
fn test_write_dot_and_json_to_files() {
    let (graph, _, _) = directed_pair();
    let dir = tempfile::tempdir().unwrap();

    let dot_path = dir.path().join("graph.dot");
    write_dot(graph.core(), &dot_path).unwrap();
    assert_eq!(
        std::fs::read_to_string(&dot_path).unwrap(),
        export_dot(graph.core()).unwrap()
    );

    let json_path = dir.path().join("graph.json");
    write_json(graph.core(), &json_path).unwrap();
    assert_eq!(
        std::fs::read_to_string(&json_path).unwrap(),
        export_json(graph.core()).unwrap()
    );
}

#[test]
fn test_write_to_missing_directory_is_io_error() {
    let (graph, _, _) = directed_pair();
    let dir = tempfile::tempdir().unwrap();

    let bad_path = dir.path().join("no_such_dir").join("graph.dot");
    let err = write_dot(graph.core(), &bad_path).unwrap_err();
    assert!(matches!(err, GraphError::Io { .. }));
}
