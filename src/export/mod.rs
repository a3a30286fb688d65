//! Export module for visualizing graphs in external tools.
//!
//! Supported formats:
//! - **DOT**: Graphviz visualization (`digraph`/`->` for directed graphs,
//!   `graph`/`--` for undirected ones)
//! - **JSON**: D3.js-style `{"nodes": [...], "links": [...]}` documents
//!
//! Each format has a `export_*` function returning a `String` and a
//! `write_*` convenience that renders straight to a file.

pub mod dot;
pub mod json;

pub use dot::{export_dot, write_dot};
pub use json::{export_json, write_json};
