//! st-core: stable foundation for spantree.
//!
//! Contains:
//! - ids (dense vertex identifiers shared by the graph and MST crates)
//! - error (shared error types)

pub mod error;
pub mod ids;

// Re-exports: nice ergonomics for downstream crates
pub use error::{StError, StResult};
pub use ids::VertexId;
