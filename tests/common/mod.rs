//! Shared fixtures and reference implementations for routing tests

use rand::rngs::StdRng;
use rand::Rng;
use std::collections::{HashMap, HashSet};
use wayfinder::{Network, Node, NodeId};

/// The 5x5 demo maze: 0 is passable, 1 is an obstacle
pub const MAZE: [[u8; 5]; 5] = [
    [0, 1, 0, 0, 0],
    [0, 1, 0, 1, 0],
    [0, 0, 0, 1, 0],
    [1, 1, 0, 1, 0],
    [0, 0, 0, 0, 0],
];

/// Deliberately naive O(V^2) Dijkstra used as the ground truth for the
/// search strategies. Returns the minimum cost, or None when the target
/// is unreachable.
pub fn reference_dijkstra(network: &Network, source: &NodeId, target: &NodeId) -> Option<f64> {
    let mut dist: HashMap<NodeId, f64> = network
        .nodes()
        .map(|n| (n.id.clone(), f64::INFINITY))
        .collect();
    let mut done: HashSet<NodeId> = HashSet::new();
    dist.insert(source.clone(), 0.0);

    loop {
        let next = dist
            .iter()
            .filter(|(id, _)| !done.contains(*id))
            .min_by(|a, b| a.1.partial_cmp(b.1).unwrap())
            .map(|(id, d)| (id.clone(), *d));
        let Some((current, d)) = next else {
            return None;
        };
        if d.is_infinite() {
            return None;
        }
        if &current == target {
            return Some(d);
        }
        done.insert(current.clone());

        for (neighbor, weight) in network.neighbors(&current).unwrap() {
            if !done.contains(&neighbor) && d + weight < dist[&neighbor] {
                dist.insert(neighbor, d + weight);
            }
        }
    }
}

/// Random undirected network with integer weights in 1..=10 (exact in
/// f64, so cost comparisons need no epsilon). Not necessarily
/// connected; unreachable pairs are part of what gets compared.
pub fn random_network(rng: &mut StdRng, node_count: usize, edge_count: usize) -> Network {
    let mut network = Network::new();
    let ids: Vec<NodeId> = (0..node_count)
        .map(|i| network.add_node(Node::new(format!("n{i}"), format!("n{i}"))))
        .collect();

    for _ in 0..edge_count {
        let a = rng.gen_range(0..node_count);
        let b = rng.gen_range(0..node_count);
        if a == b {
            continue;
        }
        let weight = rng.gen_range(1..=10) as f64;
        network.connect(&ids[a], &ids[b], weight).unwrap();
    }
    network
}

/// The same nodes and edges with every weight forced to 1, for checking
/// hop-count minimality against the weighted reference.
pub fn unit_weight_clone(network: &Network) -> Network {
    let mut clone = Network::new();
    for node in network.nodes() {
        clone.add_node(node.clone());
    }
    for edge in network.edges() {
        clone.connect(&edge.source, &edge.target, 1.0).unwrap();
    }
    clone
}
