//! st-graph: graph storage layer for spantree.
//!
//! Provides:
//! - `Graph`: undirected, weighted, label-keyed adjacency-matrix storage
//! - a text-format loader (`Graph::from_path` / `str::parse`)
//! - a labeled matrix rendering via `Display`
//!
//! # Example
//!
//! ```
//! use st_graph::Graph;
//!
//! let mut graph = Graph::new();
//! graph.add_vertex("A");
//! graph.add_vertex("B");
//! graph.add_edge("A", "B", 4).unwrap();
//!
//! assert_eq!(graph.vertex_count(), 2);
//! assert_eq!(graph.weight("A", "B"), Some(4));
//! ```

pub mod error;
pub mod graph;
pub mod loader;

// Re-exports for ergonomics
pub use error::GraphError;
pub use graph::Graph;
