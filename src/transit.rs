//! Metro-style transit routing over a [`Network`]
//!
//! Stations belong to a line and are joined by timed connections;
//! transfer connections join the same physical stop across lines.
//! Routing delegates to the search strategies: fewest stops via BFS,
//! fastest via A*.

use crate::graph::{Network, NetworkResult, Node, NodeId, PropertyValue};
use crate::search::{AStarQuery, BfsQuery, Heuristic, RouteResult};
use std::collections::HashMap;

/// A transit network of named stations grouped into lines
#[derive(Debug, Clone, Default)]
pub struct TransitMap {
    network: Network,
    /// Station ids per line, in registration order
    lines: HashMap<String, Vec<NodeId>>,
}

impl TransitMap {
    /// Create an empty transit map
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a station on a line
    ///
    /// Idempotent like [`Network::add_node`]: re-registering an id is a
    /// no-op and the first registration wins.
    pub fn add_station(
        &mut self,
        id: impl Into<NodeId>,
        name: impl Into<String>,
        line: impl Into<String>,
    ) -> NodeId {
        let id = id.into();
        if self.network.contains_node(&id) {
            return id;
        }
        let line = line.into();
        let node = Node::new(id.clone(), name)
            .with_property("line", PropertyValue::String(line.clone()));
        self.network.add_node(node);
        self.lines.entry(line).or_default().push(id.clone());
        id
    }

    /// Join two stations with a travel time in minutes
    ///
    /// Symmetric, like the underlying [`Network::connect`]; the same
    /// call shape covers in-line hops and cross-line transfers.
    pub fn connect(&mut self, a: &NodeId, b: &NodeId, minutes: f64) -> NetworkResult<()> {
        self.network.connect(a, b, minutes)
    }

    /// Display name of a station
    pub fn station_name(&self, id: &NodeId) -> Option<&str> {
        self.network.get_node(id).map(|n| n.label.as_str())
    }

    /// Line a station was registered on
    pub fn line_of(&self, id: &NodeId) -> Option<&str> {
        match self.network.get_node(id)?.properties.get("line") {
            Some(PropertyValue::String(line)) => Some(line),
            _ => None,
        }
    }

    /// Stations of a line, in registration order
    pub fn stations_on(&self, line: &str) -> &[NodeId] {
        self.lines.get(line).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The underlying network
    pub fn network(&self) -> &Network {
        &self.network
    }

    /// Route with the fewest stops, ignoring travel times
    pub fn least_transfers(&self, from: &NodeId, to: &NodeId) -> NetworkResult<RouteResult> {
        BfsQuery::between(from.clone(), to.clone()).execute(&self.network)
    }

    /// Route with the minimum total travel time
    ///
    /// Uses the hop-distance estimate, computed once per search, which
    /// stays admissible for any non-negative travel times.
    pub fn fastest_route(&self, from: &NodeId, to: &NodeId) -> NetworkResult<RouteResult> {
        AStarQuery::between(from.clone(), to.clone())
            .heuristic(Heuristic::HopDistance)
            .execute(&self.network)
    }

    /// The three-line Ankara demo network
    pub fn ankara() -> Self {
        let mut map = Self::new();

        // Red Line
        let k1 = map.add_station("K1", "Kızılay", "Red Line");
        let k2 = map.add_station("K2", "Ulus", "Red Line");
        let k3 = map.add_station("K3", "Demetevler", "Red Line");
        let k4 = map.add_station("K4", "OSB", "Red Line");

        // Blue Line
        let m1 = map.add_station("M1", "AŞTİ", "Blue Line");
        let m2 = map.add_station("M2", "Kızılay", "Blue Line");
        let m3 = map.add_station("M3", "Sıhhiye", "Blue Line");
        let m4 = map.add_station("M4", "Gar", "Blue Line");

        // Orange Line
        let t1 = map.add_station("T1", "Batıkent", "Orange Line");
        let t2 = map.add_station("T2", "Demetevler", "Orange Line");
        let t3 = map.add_station("T3", "Gar", "Orange Line");
        let t4 = map.add_station("T4", "Keçiören", "Orange Line");

        let connections = [
            // In-line hops
            (&k1, &k2, 4.0),
            (&k2, &k3, 6.0),
            (&k3, &k4, 8.0),
            (&m1, &m2, 5.0),
            (&m2, &m3, 3.0),
            (&m3, &m4, 4.0),
            (&t1, &t2, 7.0),
            (&t2, &t3, 9.0),
            (&t3, &t4, 5.0),
            // Transfers between lines at shared stops
            (&k1, &m2, 2.0),
            (&k3, &t2, 3.0),
            (&m4, &t3, 2.0),
        ];
        for (a, b, minutes) in connections {
            map.connect(a, b, minutes)
                .expect("fixture stations are registered above");
        }
        map
    }
}
