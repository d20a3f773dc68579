//! Wayfinder: grid and network shortest-path engine
//!
//! A small routing core built from two composable pieces:
//!
//! - **Graph model**: [`Network`] (explicit weighted adjacency over
//!   string-keyed nodes) and [`GridMap`] (implicit grid with blocked
//!   cells), both behind the [`Topology`] trait.
//! - **Search strategies**: [`BfsQuery`] (fewest hops, weights
//!   ignored) and [`AStarQuery`] (minimum total weight under an
//!   admissible [`Heuristic`]), sharing one parent-pointer path
//!   reconstruction primitive.
//!
//! A topology is never mutated by a search; all per-search state lives
//! in side tables owned by the call, so one graph can serve repeated or
//! concurrent searches.
//!
//! # Example
//!
//! ```
//! use wayfinder::{BfsQuery, Network, Node, NodeId};
//!
//! let mut network = Network::new();
//! let a = network.add_node(Node::new("a", "Alpha"));
//! let b = network.add_node(Node::new("b", "Beta"));
//! network.connect(&a, &b, 4.0)?;
//!
//! let route = BfsQuery::between(a, b).execute(&network)?;
//! assert!(route.found);
//! assert_eq!(route.hops, 1);
//! # Ok::<(), wayfinder::NetworkError>(())
//! ```

mod graph;
pub mod search;
pub mod transit;

pub use graph::{
    Edge, GridMap, Network, NetworkError, NetworkResult, Node, NodeId, Properties, PropertyValue,
    Topology,
};
pub use search::{AStarQuery, BfsQuery, Heuristic, RouteResult};
pub use transit::TransitMap;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
