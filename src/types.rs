//! Identifier types for generated graph entities.
//!
//! Node and edge identifiers are drawn from independent counters, so a node
//! and an edge may carry the same literal string. The two newtypes keep the
//! per-kind scoping visible in signatures instead of passing bare strings.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a node, unique among nodes of one generated graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier of the root node of every generated graph.
    pub fn root() -> Self {
        Self("0".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Identifier of an edge, unique among edges of one generated graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeId(String);

impl EdgeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EdgeId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_id() {
        assert_eq!(NodeId::root().as_str(), "0");
    }

    #[test]
    fn test_ids_serialize_as_plain_strings() {
        let node_id = NodeId::new("17");
        let edge_id = EdgeId::new("17");
        assert_eq!(serde_json::to_string(&node_id).unwrap(), "\"17\"");
        assert_eq!(serde_json::to_string(&edge_id).unwrap(), "\"17\"");
    }
}
