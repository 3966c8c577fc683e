//! Kruskal's minimum-spanning-forest computation.

use std::fmt;

use st_core::{StError, StResult, VertexId};
use st_graph::Graph;
use tracing::debug;

use crate::union_find::UnionFind;

/// An edge accepted into the spanning forest, with labels resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MstEdge {
    pub source: String,
    pub dest: String,
    pub weight: i64,
}

/// Result of a Kruskal run: accepted edges in acceptance order plus their
/// summed weight.
///
/// For a connected input this is a spanning tree (`n - 1` edges);
/// otherwise it is one spanning tree per component.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpanningForest {
    pub edges: Vec<MstEdge>,
    pub total_weight: i64,
}

impl SpanningForest {
    /// Number of connected components of the graph this forest spans,
    /// given its vertex count.
    pub fn component_count(&self, vertex_count: usize) -> usize {
        vertex_count - self.edges.len()
    }

    /// True when the forest connects every vertex.
    pub fn is_spanning_tree(&self, vertex_count: usize) -> bool {
        vertex_count == 0 || self.edges.len() == vertex_count - 1
    }
}

/// Render one `<src> - <dest> : <weight>` line per accepted edge, then a
/// total-weight summary line.
impl fmt::Display for SpanningForest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for edge in &self.edges {
            writeln!(f, "{} - {} : {}", edge.source, edge.dest, edge.weight)?;
        }
        write!(f, "Total weight: {}", self.total_weight)
    }
}

/// Run Kruskal's algorithm over the graph's current edges.
///
/// Edges are taken in ascending weight order; equal weights are ordered
/// by their endpoint index pair, so a given graph always yields the same
/// forest. An edge whose endpoints are already connected would close a
/// cycle and is skipped. A graph with 0 or 1 vertices yields an empty
/// forest.
pub fn minimum_spanning_forest(graph: &Graph) -> StResult<SpanningForest> {
    let mut candidates = graph.edges();
    candidates.sort_unstable_by_key(|&(a, b, w)| (w, a, b));
    debug!(
        vertices = graph.vertex_count(),
        candidates = candidates.len(),
        "edge list sorted"
    );

    let mut uf = UnionFind::new(graph.vertex_count());
    let mut forest = SpanningForest::default();

    for (a, b, weight) in candidates {
        if uf.union(a, b)? {
            forest.edges.push(MstEdge {
                source: label_for(graph, a)?,
                dest: label_for(graph, b)?,
                weight,
            });
            forest.total_weight += weight;
        }
    }

    debug!(
        accepted = forest.edges.len(),
        total_weight = forest.total_weight,
        "forest built"
    );
    Ok(forest)
}

fn label_for(graph: &Graph, id: VertexId) -> StResult<String> {
    graph
        .label(id)
        .map(str::to_string)
        .ok_or(StError::IndexOob {
            what: "vertex label",
            index: id.as_usize(),
            len: graph.vertex_count(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(source: &str, dest: &str, weight: i64) -> MstEdge {
        MstEdge {
            source: source.to_string(),
            dest: dest.to_string(),
            weight,
        }
    }

    #[test]
    fn triangle_drops_heaviest_edge() {
        let graph: Graph = "A B C\n0 1 3\n1 0 2\n3 2 0".parse().unwrap();
        let forest = minimum_spanning_forest(&graph).unwrap();

        assert_eq!(forest.edges, vec![edge("A", "B", 1), edge("B", "C", 2)]);
        assert_eq!(forest.total_weight, 3);
        assert!(forest.is_spanning_tree(3));
    }

    #[test]
    fn empty_graph_yields_empty_forest() {
        let graph = Graph::new();
        let forest = minimum_spanning_forest(&graph).unwrap();
        assert!(forest.edges.is_empty());
        assert_eq!(forest.total_weight, 0);
        assert!(forest.is_spanning_tree(0));
    }

    #[test]
    fn single_vertex_yields_empty_forest() {
        let graph: Graph = "A".parse().unwrap();
        let forest = minimum_spanning_forest(&graph).unwrap();
        assert!(forest.edges.is_empty());
        assert_eq!(forest.total_weight, 0);
        assert!(forest.is_spanning_tree(1));
    }

    #[test]
    fn disconnected_graph_yields_forest() {
        // Two components: A-B and C-D.
        let graph: Graph = "A B C D\n0 1 0 0\n1 0 0 0\n0 0 0 2\n0 0 2 0"
            .parse()
            .unwrap();
        let forest = minimum_spanning_forest(&graph).unwrap();

        assert_eq!(forest.edges.len(), 2);
        assert_eq!(forest.component_count(4), 2);
        assert!(!forest.is_spanning_tree(4));
        assert_eq!(forest.total_weight, 3);
    }

    #[test]
    fn equal_weights_break_ties_by_index_pair() {
        // Every edge weighs 1; the lexically-first index pairs win.
        let graph: Graph = "A B C\n0 1 1\n1 0 1\n1 1 0".parse().unwrap();
        let forest = minimum_spanning_forest(&graph).unwrap();
        assert_eq!(forest.edges, vec![edge("A", "B", 1), edge("A", "C", 1)]);
    }

    #[test]
    fn negative_weights_are_selected_first() {
        let graph: Graph = "A B C\n0 -5 2\n-5 0 1\n2 1 0".parse().unwrap();
        let forest = minimum_spanning_forest(&graph).unwrap();
        assert_eq!(forest.edges[0], edge("A", "B", -5));
        assert_eq!(forest.total_weight, -4);
    }

    #[test]
    fn display_shape() {
        let graph: Graph = "A B C\n0 1 3\n1 0 2\n3 2 0".parse().unwrap();
        let forest = minimum_spanning_forest(&graph).unwrap();
        assert_eq!(
            format!("{forest}"),
            "A - B : 1\nB - C : 2\nTotal weight: 3"
        );
    }

    #[test]
    fn rerun_is_identical() {
        let graph: Graph = "A B C D\n0 1 1 0\n1 0 1 0\n1 1 0 4\n0 0 4 0"
            .parse()
            .unwrap();
        let first = minimum_spanning_forest(&graph).unwrap();
        let second = minimum_spanning_forest(&graph).unwrap();
        assert_eq!(first, second);
    }
}
