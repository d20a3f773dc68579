//! Weighted undirected connection between two nodes

use super::node::NodeId;
use serde::{Deserialize, Serialize};

/// A connection between two nodes with a non-negative traversal cost
///
/// Edges are undirected: `Network::connect` records the edge once and
/// indexes both directions in the adjacency table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// One endpoint
    pub source: NodeId,
    /// The other endpoint
    pub target: NodeId,
    /// Traversal cost (e.g. minutes of travel time), >= 0
    pub weight: f64,
}

impl Edge {
    /// Create a new edge
    pub fn new(source: NodeId, target: NodeId, weight: f64) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    /// The endpoint opposite to `id`, if `id` is an endpoint at all
    pub fn other_end(&self, id: &NodeId) -> Option<&NodeId> {
        if &self.source == id {
            Some(&self.target)
        } else if &self.target == id {
            Some(&self.source)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_end() {
        let edge = Edge::new(NodeId::new("a"), NodeId::new("b"), 4.0);
        assert_eq!(edge.other_end(&NodeId::new("a")), Some(&NodeId::new("b")));
        assert_eq!(edge.other_end(&NodeId::new("b")), Some(&NodeId::new("a")));
        assert_eq!(edge.other_end(&NodeId::new("c")), None);
    }
}
