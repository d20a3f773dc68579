//! Core graph data structures

mod edge;
mod grid;
mod network;
mod node;
mod topology;


pub use edge::Edge;
pub use grid::GridMap;
pub use network::{Network, NetworkError, NetworkResult};
pub use node::{Node, NodeId, Properties, PropertyValue};
pub use topology::Topology;
