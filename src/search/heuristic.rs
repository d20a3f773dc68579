//! Cost-to-go estimates for A*

use crate::graph::{NodeId, Topology};
use std::collections::{HashMap, HashSet, VecDeque};

/// Estimate of the remaining cost from a node to the target
///
/// A* only guarantees minimum-cost routes when the estimate never
/// exceeds the true remaining cost (an admissible heuristic). Each
/// variant documents the condition under which it is admissible.
#[derive(Debug, Clone, Copy, Default)]
pub enum Heuristic {
    /// No estimate: 0 everywhere. The search degenerates to Dijkstra.
    /// Always admissible.
    #[default]
    None,
    /// |Δrow| + |Δcol| over [`Topology::position`], scaled by
    /// [`Topology::cheapest_step`]. Admissible for 4-directional
    /// movement; nodes without a position estimate 0.
    Manhattan,
    /// Straight-line distance over [`Topology::position`], scaled by
    /// [`Topology::cheapest_step`]. Admissible whenever a step's cost
    /// is at least the distance it covers (true for [`GridMap`]
    /// costs of 1 and sqrt(2)).
    ///
    /// [`GridMap`]: crate::graph::GridMap
    Euclidean,
    /// Hop count from one unweighted sweep out of the target, scaled by
    /// [`Topology::cheapest_step`]. Every route with h hops costs at
    /// least h * cheapest_step, so this is admissible for any
    /// non-negative weighting. Costs one full BFS per search, paid once
    /// up front, not per relaxation.
    HopDistance,
    /// Caller-supplied estimate `f(node, target)`. Admissibility is the
    /// caller's contract.
    Custom(fn(&NodeId, &NodeId) -> f64),
}

/// Per-search evaluator built from a [`Heuristic`]
///
/// Owns whatever the chosen estimate precomputes (the hop table for
/// [`Heuristic::HopDistance`], the target position for the geometric
/// ones) so `estimate` stays cheap inside the relaxation loop.
pub(crate) struct Estimator {
    kind: Heuristic,
    target: NodeId,
    target_pos: Option<(f64, f64)>,
    step: f64,
    hops: Option<HashMap<NodeId, usize>>,
}

impl Estimator {
    pub(crate) fn prepare<T: Topology>(kind: Heuristic, topology: &T, target: &NodeId) -> Self {
        let hops = match kind {
            Heuristic::HopDistance => Some(hop_sweep(topology, target)),
            _ => None,
        };
        Self {
            kind,
            target: target.clone(),
            target_pos: topology.position(target),
            step: topology.cheapest_step(),
            hops,
        }
    }

    pub(crate) fn estimate<T: Topology>(&self, topology: &T, node: &NodeId) -> f64 {
        match self.kind {
            Heuristic::None => 0.0,
            Heuristic::Manhattan => match (topology.position(node), self.target_pos) {
                (Some((r, c)), Some((tr, tc))) => ((r - tr).abs() + (c - tc).abs()) * self.step,
                _ => 0.0,
            },
            Heuristic::Euclidean => match (topology.position(node), self.target_pos) {
                (Some((r, c)), Some((tr, tc))) => ((r - tr).powi(2) + (c - tc).powi(2))
                    .sqrt()
                    * self.step,
                _ => 0.0,
            },
            Heuristic::HopDistance => match self.hops.as_ref().and_then(|h| h.get(node)) {
                Some(&h) => h as f64 * self.step,
                // Unreachable from the target, so unreachable to it
                None => f64::INFINITY,
            },
            Heuristic::Custom(f) => f(node, &self.target),
        }
    }
}

/// Unweighted breadth-first sweep recording hop counts from `origin`
fn hop_sweep<T: Topology>(topology: &T, origin: &NodeId) -> HashMap<NodeId, usize> {
    let mut hops = HashMap::from([(origin.clone(), 0)]);
    let mut visited: HashSet<NodeId> = HashSet::from([origin.clone()]);
    let mut queue: VecDeque<NodeId> = VecDeque::from([origin.clone()]);

    while let Some(current) = queue.pop_front() {
        let depth = hops[&current];
        for (neighbor, _) in topology.neighbors_of(&current) {
            if visited.insert(neighbor.clone()) {
                hops.insert(neighbor.clone(), depth + 1);
                queue.push_back(neighbor);
            }
        }
    }
    hops
}
