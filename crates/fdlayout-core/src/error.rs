//! Error types for graph construction.

use thiserror::Error;

/// Errors raised while building a [`Graph`](crate::graph::Graph).
///
/// These indicate malformed caller input. A graph that failed to build
/// must not be used.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("edge `{from}` -> `{to}` references unknown node `{missing}`")]
    UnknownEndpoint {
        from: String,
        to: String,
        missing: String,
    },

    #[error("duplicate node id `{0}`")]
    DuplicateNode(String),

    #[error("node handle {0} does not belong to this graph")]
    UnknownHandle(usize),
}
