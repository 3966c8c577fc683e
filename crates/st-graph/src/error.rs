//! Graph-specific error types.

use st_core::StError;

/// Graph construction and parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// An edge references a label that was never added to the graph.
    UnknownVertex { label: String },

    /// An edge connects a vertex to itself.
    SelfLoop { label: String },

    /// The header line names the same label twice.
    DuplicateLabel { label: String },

    /// A matrix cell holds something that is not an integer.
    MalformedWeight {
        line: usize,
        column: usize,
        token: String,
    },
}

impl std::fmt::Display for GraphError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphError::UnknownVertex { label } => {
                write!(f, "Vertex '{}' does not exist in the graph", label)
            }
            GraphError::SelfLoop { label } => {
                write!(f, "Edge from '{}' to itself is not allowed", label)
            }
            GraphError::DuplicateLabel { label } => {
                write!(f, "Vertex label '{}' appears twice in the header line", label)
            }
            GraphError::MalformedWeight {
                line,
                column,
                token,
            } => {
                write!(
                    f,
                    "Line {}, column {}: '{}' is not an integer weight",
                    line, column, token
                )
            }
        }
    }
}

impl std::error::Error for GraphError {}

impl From<GraphError> for StError {
    fn from(err: GraphError) -> Self {
        match &err {
            GraphError::MalformedWeight { .. } | GraphError::DuplicateLabel { .. } => {
                StError::Parse {
                    what: err.to_string(),
                }
            }
            GraphError::UnknownVertex { .. } | GraphError::SelfLoop { .. } => StError::Invariant {
                what: err.to_string(),
            },
        }
    }
}
