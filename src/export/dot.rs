//! DOT format export for Graphviz visualization.

use std::fmt::Display;
use std::fmt::Write as _;
use std::path::Path;

use crate::error::{GraphError, Result};
use crate::graph::{Graph, Graphable, Orientation, Weighting};

/// Export a graph to Graphviz DOT format.
///
/// Directed graphs render as `digraph` with `->` connectors; undirected
/// graphs render as `graph` with `--` connectors, with each reciprocal
/// edge pair collapsed to a single line. Weighted graphs label every edge
/// with its weight. Vertex labels are the payload's `Display` rendering,
/// escaped for DOT.
pub fn export_dot<T: Graphable + Display>(graph: &Graph<T>) -> Result<String> {
    let (keyword, connector) = match graph.orientation() {
        Orientation::Directed => ("digraph", "->"),
        Orientation::Undirected => ("graph", "--"),
    };

    let mut output = String::new();

    // fmt::Write into a String cannot fail.
    let _ = writeln!(output, "{keyword} keygraph {{");
    output.push_str("    rankdir=LR;\n");
    output.push_str("    node [style=filled];\n\n");

    for vertex in graph.iter() {
        let _ = writeln!(
            output,
            "    v{} [label=\"{}\"];",
            vertex.id(),
            escape_dot_label(&vertex.value().to_string())
        );
    }
    output.push('\n');

    for vertex in graph.iter() {
        for edge in vertex.edges() {
            let target = edge.target();
            // Undirected graphs store each edge on both endpoints; emit
            // the pair once, from the endpoint inserted first. Within one
            // graph, insertion order and id order coincide.
            if graph.orientation() == Orientation::Undirected && vertex.id() > target.id() {
                continue;
            }
            match graph.weighting() {
                Weighting::Weighted => {
                    let _ = writeln!(
                        output,
                        "    v{} {connector} v{} [label=\"{}\"];",
                        vertex.id(),
                        target.id(),
                        edge.weight()
                    );
                }
                Weighting::Unweighted => {
                    let _ = writeln!(output, "    v{} {connector} v{};", vertex.id(), target.id());
                }
            }
        }
    }

    output.push_str("}\n");
    Ok(output)
}

/// Render a graph to DOT and write it to `path`.
pub fn write_dot<T: Graphable + Display>(graph: &Graph<T>, path: impl AsRef<Path>) -> Result<()> {
    let rendered = export_dot(graph)?;
    std::fs::write(path.as_ref(), rendered).map_err(|e| GraphError::io(path.as_ref(), e))
}

/// Escape special characters in DOT labels.
fn escape_dot_label(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_dot_label() {
        assert_eq!(escape_dot_label("plain"), "plain");
        assert_eq!(escape_dot_label("say \"hi\""), "say \\\"hi\\\"");
        assert_eq!(escape_dot_label("back\\slash"), "back\\\\slash");
    }
}
