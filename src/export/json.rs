//! JSON format export for D3.js and web visualization tools.
//!
//! Generates JSON with "nodes" and "links" arrays compatible with D3.js
//! force-directed layouts.

use serde_json::json;
use std::fmt::Display;
use std::path::Path;

use crate::error::{GraphError, Result};
use crate::graph::{Graph, Graphable, Weighting};

/// Export a graph to D3.js-compatible JSON.
///
/// Every vertex becomes a node object with its id and `Display`-rendered
/// value; every stored adjacency entry becomes a link (undirected graphs
/// therefore emit both reciprocal records). Weighted graphs include a
/// `weight` field on each link.
pub fn export_json<T: Graphable + Display>(graph: &Graph<T>) -> Result<String> {
    let nodes: Vec<_> = graph
        .iter()
        .map(|vertex| {
            json!({
                "id": vertex.id(),
                "value": vertex.value().to_string(),
            })
        })
        .collect();

    let mut links = Vec::new();
    for vertex in graph.iter() {
        for edge in vertex.edges() {
            let link = match graph.weighting() {
                Weighting::Weighted => json!({
                    "source": vertex.id(),
                    "target": edge.target().id(),
                    "weight": edge.weight(),
                }),
                Weighting::Unweighted => json!({
                    "source": vertex.id(),
                    "target": edge.target().id(),
                }),
            };
            links.push(link);
        }
    }

    let document = json!({
        "nodes": nodes,
        "links": links,
    });

    serde_json::to_string_pretty(&document)
        .map_err(|e| GraphError::serialization("Failed to render graph as JSON", Some(e)))
}

/// Render a graph to JSON and write it to `path`.
pub fn write_json<T: Graphable + Display>(graph: &Graph<T>, path: impl AsRef<Path>) -> Result<()> {
    let rendered = export_json(graph)?;
    std::fs::write(path.as_ref(), rendered).map_err(|e| GraphError::io(path.as_ref(), e))
}
