//! Error types shared by the graph store, the random builder and the path finder.

use thiserror::Error;

use crate::{Node, NumEdges, NumNodes};

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, GraphError>;

#[derive(Debug, Error)]
pub enum GraphError {
    /// Vertex count below 2 (or too large to be packed), a loop, or a node outside `0..n`
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Requested number of edges is not feasible for the given number of vertices
    #[error(
        "requested edges out of range: need {min}..{max} for {vertices} vertices, got {requested}"
    )]
    OutOfRange {
        min: NumEdges,
        max: NumEdges,
        vertices: NumNodes,
        requested: NumEdges,
    },

    /// Persisted data is malformed or truncated
    #[error("malformed graph data: {0}")]
    Deserialization(String),

    /// The optional cap on rejected random draws was hit
    #[error("gave up after {retries} rejected random draws with {remaining} edge(s) left to place")]
    RetriesExhausted { retries: u64, remaining: NumEdges },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl GraphError {
    pub(crate) fn loop_edge(u: Node) -> Self {
        Self::InvalidArgument(format!("self-loops are not supported (got edge ({u},{u}))"))
    }

    pub(crate) fn node_out_of_range(u: Node, n: NumNodes) -> Self {
        Self::InvalidArgument(format!("node {u} does not exist in a graph with {n} vertices"))
    }
}
