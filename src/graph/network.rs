//! Explicit weighted adjacency over registered nodes

use super::edge::Edge;
use super::node::{Node, NodeId};
use super::topology::Topology;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Errors from network construction and queries
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("Unknown node: {0}")]
    UnknownNode(NodeId),

    #[error("Invalid edge weight: {0}")]
    InvalidWeight(f64),
}

/// Result type for network operations
pub type NetworkResult<T> = Result<T, NetworkError>;

/// A weighted undirected graph with string-keyed nodes
///
/// Nodes must be registered before they can be connected. The network
/// is read-only during a search; searches keep all their scratch state
/// in per-call side tables, so shared references to one network can
/// serve any number of searches.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Network {
    /// Registered nodes
    nodes: HashMap<NodeId, Node>,
    /// Every connection, one entry per `connect` call
    edges: Vec<Edge>,
    /// Both directions of every edge, in `connect` order per node
    adjacency: HashMap<NodeId, Vec<(NodeId, f64)>>,
}

impl Network {
    /// Create an empty network
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a node, returning its id
    ///
    /// Registration is idempotent: re-adding an id is a no-op and the
    /// first registration wins.
    pub fn add_node(&mut self, node: Node) -> NodeId {
        let id = node.id.clone();
        self.nodes.entry(id.clone()).or_insert(node);
        id
    }

    /// Connect two registered nodes with a non-negative weight
    ///
    /// The connection is symmetric: both directions become traversable.
    /// Fails with `UnknownNode` if either endpoint is unregistered and
    /// with `InvalidWeight` if the weight is negative (or NaN).
    pub fn connect(&mut self, a: &NodeId, b: &NodeId, weight: f64) -> NetworkResult<()> {
        if !self.nodes.contains_key(a) {
            return Err(NetworkError::UnknownNode(a.clone()));
        }
        if !self.nodes.contains_key(b) {
            return Err(NetworkError::UnknownNode(b.clone()));
        }
        if !(weight >= 0.0) {
            return Err(NetworkError::InvalidWeight(weight));
        }

        self.edges.push(Edge::new(a.clone(), b.clone(), weight));
        self.adjacency
            .entry(a.clone())
            .or_default()
            .push((b.clone(), weight));
        self.adjacency
            .entry(b.clone())
            .or_default()
            .push((a.clone(), weight));
        Ok(())
    }

    /// The `(neighbor, weight)` pairs of a registered node
    ///
    /// Empty for isolated nodes; `UnknownNode` for unregistered ids.
    /// Order follows the order of `connect` calls.
    pub fn neighbors(&self, id: &NodeId) -> NetworkResult<Vec<(NodeId, f64)>> {
        if !self.nodes.contains_key(id) {
            return Err(NetworkError::UnknownNode(id.clone()));
        }
        Ok(self.adjacency.get(id).cloned().unwrap_or_default())
    }

    /// Get a node by id
    pub fn get_node(&self, id: &NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Whether a node is registered
    pub fn contains_node(&self, id: &NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// All registered nodes
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// All recorded edges
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    /// Number of registered nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of recorded edges
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

impl Topology for Network {
    fn contains(&self, id: &NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    fn neighbors_of(&self, id: &NodeId) -> Vec<(NodeId, f64)> {
        self.adjacency.get(id).cloned().unwrap_or_default()
    }

    fn cheapest_step(&self) -> f64 {
        let min = self
            .edges
            .iter()
            .map(|e| e.weight)
            .fold(f64::INFINITY, f64::min);
        if min.is_finite() {
            min
        } else {
            1.0
        }
    }
}
