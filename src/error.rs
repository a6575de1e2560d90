use thiserror::Error;

/// Error types produced by the graph model and the MST engine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MstError {
    #[error("Invalid edge: vertex labels must be non-empty (got {vertex_a:?} and {vertex_b:?})")]
    InvalidEdgeInput {
        /// First endpoint label as supplied.
        vertex_a: String,
        /// Second endpoint label as supplied.
        vertex_b: String,
    },

    #[error("Malformed weight {0:?}: expected a 32-bit integer")]
    MalformedWeight(String),

    #[error("Cannot compute MST: no edges supplied")]
    EmptyGraphForPrim,

    /// No edge crosses from the visited part of the graph to the rest.
    #[error("Graph is disconnected: reached {visited} of {total} vertices")]
    DisconnectedGraph { visited: usize, total: usize },

    #[error("Unknown MST algorithm {0:?}")]
    UnknownStrategy(String),
}
