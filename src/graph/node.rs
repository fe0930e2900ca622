//! Node entity.

use crate::graph::property::{PropertyMap, PropertyValue};
use crate::types::NodeId;
use serde::{Deserialize, Serialize};

/// A labeled graph node with a typed property bag.
///
/// `partition_id` always mirrors `id`; it is a self-reference used by
/// partitioned stores, not a foreign key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub id: NodeId,
    pub label: String,
    pub partition_id: NodeId,
    #[serde(default)]
    pub properties: PropertyMap,
}

impl Node {
    pub fn new(id: NodeId, label: impl Into<String>) -> Self {
        let partition_id = id.clone();
        Self {
            id,
            label: label.into(),
            partition_id,
            properties: PropertyMap::new(),
        }
    }

    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    /// Depth of this node in its tree, if the generator stamped one.
    pub fn level(&self) -> Option<i64> {
        self.properties.get("level").and_then(PropertyValue::as_int)
    }
}
