//! Text-format graph loader.
//!
//! The source is line-oriented: the first line holds whitespace-separated
//! vertex labels (defining index order), and each following line is one
//! adjacency-matrix row of integer weights in that same order. Cells and
//! rows beyond the declared vertex count are ignored; missing rows leave
//! the remaining cells at 0.

use std::path::Path;
use std::str::FromStr;

use st_core::{StError, StResult};
use tracing::debug;

use crate::error::GraphError;
use crate::graph::Graph;

impl Graph {
    /// Load a graph from a file.
    ///
    /// The file is fully read and closed before parsing begins; nothing
    /// is held open across later computation.
    pub fn from_path(path: impl AsRef<Path>) -> StResult<Graph> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| StError::Io {
            path: path.display().to_string(),
            source,
        })?;
        text.parse()
    }
}

impl FromStr for Graph {
    type Err = StError;

    fn from_str(s: &str) -> StResult<Graph> {
        let mut graph = Graph::new();
        let mut lines = s.lines();

        // Header: vertex labels in index order. An empty source is an
        // empty graph, not an error.
        let Some(header) = lines.next() else {
            return Ok(graph);
        };
        for label in header.split_whitespace() {
            if graph.vertex_id(label).is_some() {
                return Err(GraphError::DuplicateLabel {
                    label: label.to_string(),
                }
                .into());
            }
            graph.add_vertex(label);
        }
        let n = graph.vertex_count();
        let labels = graph.labels().to_vec();
        debug!(vertices = n, "parsed header line");

        // Matrix rows. Only cells inside the declared n x n square are
        // parsed at all; anything beyond it may be arbitrary text.
        for (row, line) in lines.take(n).enumerate() {
            for (col, token) in line.split_whitespace().take(n).enumerate() {
                let weight: i64 = token.parse().map_err(|_| GraphError::MalformedWeight {
                    // 1-based position; the header is line 1.
                    line: row + 2,
                    column: col + 1,
                    token: token.to_string(),
                })?;
                // Diagonal cells carry no edge information.
                if weight != 0 && row != col {
                    graph.add_edge(&labels[row], &labels[col], weight)?;
                }
            }
        }

        debug!(
            vertices = n,
            edges = graph.edges().len(),
            "graph loaded"
        );
        Ok(graph)
    }
}
