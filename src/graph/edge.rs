//! Edge entity.

use crate::graph::property::{PropertyMap, PropertyValue};
use crate::types::{EdgeId, NodeId};
use serde::{Deserialize, Serialize};

/// Direction tag carried only by edges produced via undirected expansion.
/// Edges on the main generation path are directed parent to child and leave
/// this unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EdgeDirection {
    Outgoing,
    Reverse,
}

/// A directed, weighted relation between two nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    pub id: EdgeId,
    pub label: String,
    #[serde(rename = "edgeType", default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<EdgeDirection>,
    pub from_id: NodeId,
    pub to_id: NodeId,
    #[serde(default)]
    pub properties: PropertyMap,
}

impl Edge {
    pub fn new(id: EdgeId, label: impl Into<String>, from_id: NodeId, to_id: NodeId) -> Self {
        Self {
            id,
            label: label.into(),
            direction: None,
            from_id,
            to_id,
            properties: PropertyMap::new(),
        }
    }

    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    /// The edge's weight, if the generator stamped one.
    pub fn length(&self) -> Option<i64> {
        self.properties.get("length").and_then(PropertyValue::as_int)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_omitted_when_unset() {
        let edge = Edge::new(EdgeId::new("0"), "contains", NodeId::root(), NodeId::new("1"));
        let json = serde_json::to_value(&edge).unwrap();
        assert!(json.get("edgeType").is_none());
    }

    #[test]
    fn test_direction_serializes_when_set() {
        let mut edge = Edge::new(EdgeId::new("0"), "contains", NodeId::root(), NodeId::new("1"));
        edge.direction = Some(EdgeDirection::Reverse);
        let json = serde_json::to_value(&edge).unwrap();
        assert_eq!(json["edgeType"], "Reverse");
    }

    #[test]
    fn test_length_accessor() {
        let edge = Edge::new(EdgeId::new("4"), "contains", NodeId::new("1"), NodeId::new("3"))
            .with_property("length", 9i64);
        assert_eq!(edge.length(), Some(9));
    }
}
