//! Search result structures

use crate::graph::NodeId;
use serde::{Deserialize, Serialize};

/// Outcome of a route search
///
/// Not finding a route is a normal outcome, not an error: callers
/// branch on `found`. Errors (unknown endpoints, bad weights) surface
/// as [`NetworkError`](crate::graph::NetworkError) instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteResult {
    /// Whether a route was found
    pub found: bool,
    /// Nodes from source to target (inclusive); empty when not found
    pub path: Vec<NodeId>,
    /// Total cost: summed weights for A*, hop count for BFS
    pub cost: f64,
    /// Number of edges in the route
    pub hops: usize,
}

impl RouteResult {
    /// No route exists
    pub fn not_found() -> Self {
        Self {
            found: false,
            path: Vec::new(),
            cost: 0.0,
            hops: 0,
        }
    }

    /// A route was found
    pub fn found(path: Vec<NodeId>, cost: f64) -> Self {
        let hops = path.len().saturating_sub(1);
        Self {
            found: true,
            path,
            cost,
            hops,
        }
    }
}
