//! Error types for the graph registry

use thiserror::Error;

/// Errors produced when inserting into the graph registry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// An edge endpoint is not a key in the node registry.
    #[error("no such node {id}")]
    UnknownNode { id: String },

    /// Every candidate substring of the object's full hash is already
    /// registered, so no short id could be assigned.
    #[error("no free short id left in {hash}")]
    IdSpaceExhausted { hash: String },
}
