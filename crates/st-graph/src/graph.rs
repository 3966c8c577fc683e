//! Core graph data structure.

use std::collections::HashMap;
use std::fmt;

use st_core::{StResult, VertexId};

use crate::error::GraphError;

/// An undirected, weighted graph stored as a square adjacency matrix.
///
/// Vertices are string labels. Each label is assigned a dense `VertexId`
/// in insertion order, and the matrix is addressed by those indices. A
/// cell of 0 means "no edge"; cells are kept symmetric
/// (`matrix[i][j] == matrix[j][i]`) since the graph is undirected.
///
/// Vertices and edges can only be added, never removed; an edge is erased
/// by writing weight 0 over it.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    /// Labels in insertion order; position = `VertexId` index.
    vertices: Vec<String>,
    /// Reverse lookup: label -> id.
    index: HashMap<String, VertexId>,
    /// Square, symmetric weight matrix.
    matrix: Vec<Vec<i64>>,
}

impl Graph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// True when the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Labels in insertion (= index) order.
    pub fn labels(&self) -> &[String] {
        &self.vertices
    }

    /// Get the label for an id (returns None if id out of bounds).
    pub fn label(&self, id: VertexId) -> Option<&str> {
        self.vertices.get(id.as_usize()).map(String::as_str)
    }

    /// Get the id for a label (returns None if the label was never added).
    pub fn vertex_id(&self, label: &str) -> Option<VertexId> {
        self.index.get(label).copied()
    }

    /// Add a vertex and return its id.
    ///
    /// Idempotent: an existing label returns its previously assigned id
    /// and leaves the matrix untouched. A new label appends one
    /// zero-filled row and column, preserving all existing cells.
    pub fn add_vertex(&mut self, label: impl Into<String>) -> VertexId {
        let label = label.into();
        if let Some(&id) = self.index.get(&label) {
            return id;
        }
        let id = VertexId::from_index(self.vertices.len() as u32);
        self.index.insert(label.clone(), id);
        self.vertices.push(label);

        for row in &mut self.matrix {
            row.push(0);
        }
        self.matrix.push(vec![0; self.vertices.len()]);
        id
    }

    /// Set the weight between two existing vertices, in both directions.
    ///
    /// Overwrites any previous weight for the pair (last write wins);
    /// weight 0 erases the edge. Unknown labels and self-loops are
    /// errors, not silent no-ops.
    pub fn add_edge(&mut self, a: &str, b: &str, weight: i64) -> StResult<()> {
        let ia = self.vertex_id(a).ok_or_else(|| GraphError::UnknownVertex {
            label: a.to_string(),
        })?;
        let ib = self.vertex_id(b).ok_or_else(|| GraphError::UnknownVertex {
            label: b.to_string(),
        })?;
        if ia == ib {
            return Err(GraphError::SelfLoop {
                label: a.to_string(),
            }
            .into());
        }
        self.matrix[ia.as_usize()][ib.as_usize()] = weight;
        self.matrix[ib.as_usize()][ia.as_usize()] = weight;
        Ok(())
    }

    /// Weight between two vertices: None if either label is unknown,
    /// Some(0) if both exist but no edge connects them.
    pub fn weight(&self, a: &str, b: &str) -> Option<i64> {
        let ia = self.vertex_id(a)?;
        let ib = self.vertex_id(b)?;
        Some(self.matrix[ia.as_usize()][ib.as_usize()])
    }

    /// Raw matrix cell by index pair (returns None if out of bounds).
    pub fn weight_at(&self, i: usize, j: usize) -> Option<i64> {
        self.matrix.get(i).and_then(|row| row.get(j)).copied()
    }

    /// Enumerate the undirected edges: one `(a, b, weight)` per unordered
    /// pair with a nonzero cell, with `a.index() < b.index()` so the
    /// symmetric matrix is not double-counted.
    pub fn edges(&self) -> Vec<(VertexId, VertexId, i64)> {
        let n = self.vertices.len();
        let mut out = Vec::new();
        for i in 0..n {
            for j in (i + 1)..n {
                let w = self.matrix[i][j];
                if w != 0 {
                    out.push((
                        VertexId::from_index(i as u32),
                        VertexId::from_index(j as u32),
                        w,
                    ));
                }
            }
        }
        out
    }
}

/// Render the labeled adjacency matrix: a header row of labels, then one
/// row per vertex with its label followed by its weights.
impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for label in &self.vertices {
            write!(f, " {label}")?;
        }
        writeln!(f)?;
        for (i, label) in self.vertices.iter().enumerate() {
            write!(f, "{label}")?;
            for w in &self.matrix[i] {
                write!(f, " {w}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use st_core::StError;

    #[test]
    fn add_vertex_assigns_dense_ids() {
        let mut g = Graph::new();
        let a = g.add_vertex("A");
        let b = g.add_vertex("B");
        assert_eq!(a.index(), 0);
        assert_eq!(b.index(), 1);
        assert_eq!(g.vertex_count(), 2);
        assert_eq!(g.labels(), &["A".to_string(), "B".to_string()]);
    }

    #[test]
    fn add_vertex_is_idempotent() {
        let mut g = Graph::new();
        let first = g.add_vertex("A");
        g.add_vertex("B");
        g.add_edge("A", "B", 7).unwrap();

        let again = g.add_vertex("A");
        assert_eq!(first, again);
        assert_eq!(g.vertex_count(), 2);
        // Existing cells survive the no-op.
        assert_eq!(g.weight("A", "B"), Some(7));
    }

    #[test]
    fn matrix_grows_zero_filled() {
        let mut g = Graph::new();
        g.add_vertex("A");
        g.add_vertex("B");
        g.add_edge("A", "B", 3).unwrap();
        g.add_vertex("C");

        assert_eq!(g.weight("A", "B"), Some(3));
        assert_eq!(g.weight("A", "C"), Some(0));
        assert_eq!(g.weight("B", "C"), Some(0));
        assert_eq!(g.weight_at(2, 2), Some(0));
    }

    #[test]
    fn add_edge_writes_both_cells() {
        let mut g = Graph::new();
        g.add_vertex("A");
        g.add_vertex("B");
        g.add_edge("A", "B", 5).unwrap();
        assert_eq!(g.weight("A", "B"), Some(5));
        assert_eq!(g.weight("B", "A"), Some(5));
    }

    #[test]
    fn add_edge_overwrites() {
        let mut g = Graph::new();
        g.add_vertex("A");
        g.add_vertex("B");
        g.add_edge("A", "B", 5).unwrap();
        g.add_edge("B", "A", 9).unwrap();
        assert_eq!(g.weight("A", "B"), Some(9));
        // Weight 0 erases the edge.
        g.add_edge("A", "B", 0).unwrap();
        assert!(g.edges().is_empty());
    }

    #[test]
    fn add_edge_unknown_vertex_fails() {
        let mut g = Graph::new();
        g.add_vertex("A");
        let err = g.add_edge("A", "Z", 1).unwrap_err();
        assert!(matches!(err, StError::Invariant { .. }));
        // Nothing was inserted behind the caller's back.
        assert_eq!(g.vertex_count(), 1);
    }

    #[test]
    fn add_edge_self_loop_fails() {
        let mut g = Graph::new();
        g.add_vertex("A");
        assert!(g.add_edge("A", "A", 1).is_err());
    }

    #[test]
    fn edges_scans_upper_triangle_only() {
        let mut g = Graph::new();
        g.add_vertex("A");
        g.add_vertex("B");
        g.add_vertex("C");
        g.add_edge("A", "B", 1).unwrap();
        g.add_edge("B", "C", -2).unwrap();

        let edges = g.edges();
        assert_eq!(edges.len(), 2);
        for (a, b, _) in &edges {
            assert!(a.index() < b.index());
        }
        // Negative weights are valid edges.
        assert!(edges.iter().any(|&(_, _, w)| w == -2));
    }

    #[test]
    fn display_matches_matrix_shape() {
        let mut g = Graph::new();
        g.add_vertex("A");
        g.add_vertex("B");
        g.add_edge("A", "B", 4).unwrap();
        assert_eq!(format!("{g}"), " A B\nA 0 4\nB 4 0\n");
    }

    #[test]
    fn empty_graph_displays_one_blank_line() {
        let g = Graph::new();
        assert_eq!(format!("{g}"), "\n");
        assert!(g.edges().is_empty());
    }
}
