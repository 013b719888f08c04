//! Core data structures for the command graph

use serde::{Deserialize, Serialize};

/// A node in the graph. `id` is the short id assigned at insertion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Node {
    pub id: String,
    /// User-supplied label, may contain spaces.
    pub title: String,
}

/// A directed edge between two previously registered nodes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Edge {
    pub id: String,
    /// Short id of the source node.
    pub src: String,
    /// Short id of the target node.
    pub dst: String,
    pub title: String,
}
