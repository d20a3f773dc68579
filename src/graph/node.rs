//! Node identity and payload

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Unique identifier for a node
///
/// Serializes as a plain string (a caller-chosen key like "K1", or a
/// grid cell id like "3,4"). Equality is structural: two ids built from
/// the same key name the same node, which is what visited sets and
/// parent tables rely on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// Create a NodeId from a string key
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Id for the grid cell at (row, col)
    pub fn cell(row: usize, col: usize) -> Self {
        Self(format!("{},{}", row, col))
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Typed property values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

/// Properties collection
pub type Properties = HashMap<String, PropertyValue>;

/// A node in the network
///
/// Nodes carry no search state. Per-search scratch values (g, f,
/// parents) live in side tables owned by the search invocation, so a
/// network can serve many searches without being touched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Unique identifier
    pub id: NodeId,
    /// Human-readable name (station name, cell coordinate, ...)
    pub label: String,
    /// Domain-specific payload
    pub properties: Properties,
}

impl Node {
    /// Create a new node with the given id and label
    pub fn new(id: impl Into<NodeId>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            properties: HashMap::new(),
        }
    }

    /// Add a property to the node
    pub fn with_property(mut self, key: impl Into<String>, value: PropertyValue) -> Self {
        self.properties.insert(key.into(), value);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_id_structural_equality() {
        assert_eq!(NodeId::new("K1"), NodeId::from("K1"));
        assert_ne!(NodeId::new("K1"), NodeId::new("K2"));
    }

    #[test]
    fn test_cell_id_format() {
        let id = NodeId::cell(3, 4);
        assert_eq!(id.as_str(), "3,4");
    }

    #[test]
    fn test_node_builder() {
        let node = Node::new("K1", "Kızılay")
            .with_property("line", PropertyValue::String("Red Line".into()));
        assert_eq!(node.label, "Kızılay");
        assert_eq!(
            node.properties.get("line"),
            Some(&PropertyValue::String("Red Line".into()))
        );
    }
}
