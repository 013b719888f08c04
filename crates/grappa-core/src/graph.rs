//! Graph registry over petgraph::StableDiGraph with content-derived short ids

use crate::error::GraphError;
use crate::hash;
use crate::ident::shortest_free_id;
use crate::model::{Edge, Node};
use petgraph::stable_graph::{EdgeIndex, NodeIndex, StableDiGraph};
use std::collections::HashMap;

/// The command graph — a directed multigraph whose nodes and edges are
/// keyed by short substrings of their content hashes.
///
/// Nodes and edges have independent id spaces, so a node and an edge
/// may coincidentally share a short id. Within one space an id, once
/// assigned, is never reassigned; there is no removal operation.
pub struct Graph {
    inner: StableDiGraph<Node, Edge>,
    node_ids: HashMap<String, NodeIndex>,
    edge_ids: HashMap<String, EdgeIndex>,
}

impl std::fmt::Debug for Graph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Graph")
            .field("node_count", &self.inner.node_count())
            .field("edge_count", &self.inner.edge_count())
            .finish()
    }
}

impl Graph {
    pub fn new() -> Self {
        Graph {
            inner: StableDiGraph::new(),
            node_ids: HashMap::new(),
            edge_ids: HashMap::new(),
        }
    }

    /// Add a node to the graph. Returns the assigned short id.
    pub fn add_node(&mut self, title: &str) -> Result<String, GraphError> {
        let full_hash = hash::node_hash(title);
        let id = shortest_free_id(&full_hash, |candidate| {
            self.node_ids.contains_key(candidate)
        })
        .ok_or(GraphError::IdSpaceExhausted { hash: full_hash })?;

        let node = Node {
            id: id.clone(),
            title: title.to_string(),
        };
        let idx = self.inner.add_node(node);
        self.node_ids.insert(id.clone(), idx);
        tracing::debug!("registered node {:?} as {}", title, id);
        Ok(id)
    }

    /// Add an edge between two registered nodes. Returns the assigned
    /// short id. Fails with `UnknownNode` for the first endpoint absent
    /// from the node registry; `src` is checked before `dst`.
    pub fn add_edge(&mut self, src: &str, dst: &str, title: &str) -> Result<String, GraphError> {
        let src_idx = self.node_index(src)?;
        let dst_idx = self.node_index(dst)?;

        let full_hash = hash::edge_hash(title, src, dst);
        let id = shortest_free_id(&full_hash, |candidate| {
            self.edge_ids.contains_key(candidate)
        })
        .ok_or(GraphError::IdSpaceExhausted { hash: full_hash })?;

        let edge = Edge {
            id: id.clone(),
            src: src.to_string(),
            dst: dst.to_string(),
            title: title.to_string(),
        };
        let idx = self.inner.add_edge(src_idx, dst_idx, edge);
        self.edge_ids.insert(id.clone(), idx);
        tracing::debug!("registered edge {} -> {} as {}", src, dst, id);
        Ok(id)
    }

    fn node_index(&self, id: &str) -> Result<NodeIndex, GraphError> {
        self.node_ids
            .get(id)
            .copied()
            .ok_or_else(|| GraphError::UnknownNode { id: id.to_string() })
    }

    /// Get a node by short id.
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.node_ids
            .get(id)
            .and_then(|&idx| self.inner.node_weight(idx))
    }

    /// Get an edge by short id.
    pub fn edge(&self, id: &str) -> Option<&Edge> {
        self.edge_ids
            .get(id)
            .and_then(|&idx| self.inner.edge_weight(idx))
    }

    /// Check whether a node short id is registered.
    pub fn contains_node(&self, id: &str) -> bool {
        self.node_ids.contains_key(id)
    }

    /// Total number of nodes.
    pub fn node_count(&self) -> usize {
        self.inner.node_count()
    }

    /// Total number of edges.
    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    /// Iterate over all nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.inner
            .node_indices()
            .filter_map(move |idx| self.inner.node_weight(idx))
    }

    /// Iterate over all edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.inner
            .edge_indices()
            .filter_map(move |idx| self.inner.edge_weight(idx))
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}
