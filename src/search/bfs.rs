//! Fewest-hop route search

use super::trace::reconstruct;
use super::types::RouteResult;
use crate::graph::{NetworkError, NodeId, Topology};
use std::collections::{HashMap, HashSet, VecDeque};

/// Breadth-first route query: fewest edges, weights ignored
///
/// All frontier entries at a given depth are dequeued before any at
/// depth + 1, so the first discovery of the target is a minimum-hop
/// route.
#[derive(Debug, Clone)]
pub struct BfsQuery {
    /// Source node id
    pub source: NodeId,
    /// Target node id
    pub target: NodeId,
    /// Hop bound: routes longer than this are treated as not found
    pub max_depth: Option<usize>,
}

impl BfsQuery {
    /// Create a query between two nodes
    pub fn between(source: impl Into<NodeId>, target: impl Into<NodeId>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            max_depth: None,
        }
    }

    /// Bound the search to routes of at most `max_depth` hops
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// Execute the query
    ///
    /// Fails with `UnknownNode` if either endpoint is absent from the
    /// topology. Exhausting the frontier without reaching the target is
    /// a normal not-found result.
    #[tracing::instrument(
        skip(self, topology),
        fields(source = %self.source, target = %self.target)
    )]
    pub fn execute<T: Topology>(&self, topology: &T) -> Result<RouteResult, NetworkError> {
        if !topology.contains(&self.source) {
            return Err(NetworkError::UnknownNode(self.source.clone()));
        }
        if !topology.contains(&self.target) {
            return Err(NetworkError::UnknownNode(self.target.clone()));
        }
        if self.source == self.target {
            return Ok(RouteResult::found(vec![self.source.clone()], 0.0));
        }

        let mut visited: HashSet<NodeId> = HashSet::from([self.source.clone()]);
        let mut parents: HashMap<NodeId, NodeId> = HashMap::new();
        let mut queue: VecDeque<(NodeId, usize)> = VecDeque::from([(self.source.clone(), 0)]);

        while let Some((current, depth)) = queue.pop_front() {
            if self.max_depth.is_some_and(|max| depth >= max) {
                continue;
            }

            for (neighbor, _weight) in topology.neighbors_of(&current) {
                // A node is enqueued at most once; its first discovery
                // fixes its parent
                if !visited.insert(neighbor.clone()) {
                    continue;
                }
                parents.insert(neighbor.clone(), current.clone());

                if neighbor == self.target {
                    let path = reconstruct(&parents, &self.source, &self.target);
                    let hops = path.len() - 1;
                    tracing::debug!(hops, "route found");
                    return Ok(RouteResult::found(path, hops as f64));
                }
                queue.push_back((neighbor, depth + 1));
            }
        }

        tracing::debug!("frontier exhausted");
        Ok(RouteResult::not_found())
    }
}
