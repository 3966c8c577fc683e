//! st-mst: minimum-spanning-forest engine for spantree.
//!
//! Provides:
//! - `UnionFind`: disjoint sets over dense vertex ids
//! - `minimum_spanning_forest`: Kruskal's greedy selection over a
//!   `st_graph::Graph`
//!
//! # Example
//!
//! ```
//! use st_graph::Graph;
//! use st_mst::minimum_spanning_forest;
//!
//! let graph: Graph = "A B C\n0 1 3\n1 0 2\n3 2 0".parse().unwrap();
//! let forest = minimum_spanning_forest(&graph).unwrap();
//!
//! assert_eq!(forest.edges.len(), 2);
//! assert_eq!(forest.total_weight, 3);
//! ```

pub mod kruskal;
pub mod union_find;

// Re-exports for ergonomics
pub use kruskal::{MstEdge, SpanningForest, minimum_spanning_forest};
pub use union_find::UnionFind;
