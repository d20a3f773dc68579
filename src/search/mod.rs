//! Search strategies over a [`Topology`](crate::graph::Topology)
//!
//! Two interchangeable strategies share one parent-pointer path
//! reconstruction primitive: [`BfsQuery`] minimizes hops and ignores
//! weights, [`AStarQuery`] minimizes total weight under a pluggable
//! heuristic.

mod astar;
mod bfs;
mod heuristic;
mod trace;
mod types;

pub use astar::AStarQuery;
pub use bfs::BfsQuery;
pub use heuristic::Heuristic;
pub use types::RouteResult;
