//! Minimum-weight route search guided by a heuristic

use super::heuristic::{Estimator, Heuristic};
use super::trace::reconstruct;
use super::types::RouteResult;
use crate::graph::{NetworkError, NodeId, Topology};
use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap, HashSet};

/// Frontier entry ordered by ascending f, then by insertion sequence
///
/// The sequence number makes ties deterministic: of two routes with
/// equal estimated cost, the one discovered first wins.
#[derive(Debug, Clone)]
struct OpenEntry {
    f: f64,
    seq: u64,
    node: NodeId,
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.f == other.f && self.seq == other.seq
    }
}

impl Eq for OpenEntry {}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.f
            .partial_cmp(&other.f)
            .unwrap_or(Ordering::Equal)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// A* route query: minimum total weight under an admissible heuristic
///
/// Node lifecycle per search: unseen -> open (tentative cost known) ->
/// closed (cost settled). A cheaper rediscovery of an open node pushes
/// a fresh frontier entry; the stale one is skipped when popped
/// (lazy deletion). Once a node closes its cost never improves again,
/// which requires non-negative weights and a heuristic that never
/// overestimates.
#[derive(Debug, Clone)]
pub struct AStarQuery {
    /// Source node id
    pub source: NodeId,
    /// Target node id
    pub target: NodeId,
    /// Remaining-cost estimate
    pub heuristic: Heuristic,
    /// Defensive bound on closed nodes; exceeding it is a not-found
    pub expansion_limit: Option<usize>,
}

impl AStarQuery {
    /// Create a query between two nodes with no heuristic (Dijkstra)
    pub fn between(source: impl Into<NodeId>, target: impl Into<NodeId>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            heuristic: Heuristic::None,
            expansion_limit: None,
        }
    }

    /// Set the heuristic
    pub fn heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    /// Bound the number of node expansions
    pub fn expansion_limit(mut self, limit: usize) -> Self {
        self.expansion_limit = Some(limit);
        self
    }

    /// Execute the query
    ///
    /// Returns the minimum-total-weight route and its cost, a normal
    /// not-found when the frontier drains, or `UnknownNode` for an
    /// unregistered endpoint.
    #[tracing::instrument(
        skip(self, topology),
        fields(source = %self.source, target = %self.target, heuristic = ?self.heuristic)
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

        let estimator = Estimator::prepare(self.heuristic, topology, &self.target);

        // Per-search side tables; the topology itself is never touched
        let mut g: HashMap<NodeId, f64> = HashMap::from([(self.source.clone(), 0.0)]);
        let mut parents: HashMap<NodeId, NodeId> = HashMap::new();
        let mut closed: HashSet<NodeId> = HashSet::new();
        let mut open: BinaryHeap<Reverse<OpenEntry>> = BinaryHeap::new();
        let mut seq = 0u64;

        open.push(Reverse(OpenEntry {
            f: estimator.estimate(topology, &self.source),
            seq,
            node: self.source.clone(),
        }));

        let mut expansions = 0usize;

        while let Some(Reverse(entry)) = open.pop() {
            let current = entry.node;

            // Lazy deletion: a cheaper route closed this node already
            if closed.contains(&current) {
                continue;
            }

            if current == self.target {
                let cost = g[&current];
                let path = reconstruct(&parents, &self.source, &self.target);
                tracing::debug!(cost, expansions, "route found");
                return Ok(RouteResult::found(path, cost));
            }

            closed.insert(current.clone());
            expansions += 1;
            if self.expansion_limit.is_some_and(|limit| expansions > limit) {
                tracing::warn!(expansions, "expansion limit reached");
                return Ok(RouteResult::not_found());
            }

            let g_current = g[&current];
            for (neighbor, weight) in topology.neighbors_of(&current) {
                if closed.contains(&neighbor) {
                    continue;
                }
                let tentative = g_current + weight;
                // Relaxation: keep only strict improvements
                if tentative < *g.get(&neighbor).unwrap_or(&f64::INFINITY) {
                    g.insert(neighbor.clone(), tentative);
                    parents.insert(neighbor.clone(), current.clone());
                    seq += 1;
                    open.push(Reverse(OpenEntry {
                        f: tentative + estimator.estimate(topology, &neighbor),
                        seq,
                        node: neighbor,
                    }));
                }
            }
        }

        tracing::debug!(expansions, "frontier exhausted");
        Ok(RouteResult::not_found())
    }
}
