//! Graph Entity Model
//!
//! Nodes, edges, and their typed property bags. Every generated graph is a
//! stream of [`Entity`] values; consumers serialize them to camelCase JSON
//! when handing them to a store.

pub mod edge;
pub mod node;
pub mod property;

pub use edge::{Edge, EdgeDirection};
pub use node::Node;
pub use property::{PropertyMap, PropertyValue};

use serde::{Deserialize, Serialize};

/// A single element of a generated graph stream.
///
/// Serializes with a `kind` tag (`"node"` or `"edge"`) so line-oriented
/// consumers can dispatch without inspecting field shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Entity {
    Node(Node),
    Edge(Edge),
}

impl Entity {
    pub fn is_node(&self) -> bool {
        matches!(self, Entity::Node(_))
    }

    pub fn is_edge(&self) -> bool {
        matches!(self, Entity::Edge(_))
    }

    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Entity::Node(node) => Some(node),
            Entity::Edge(_) => None,
        }
    }

    pub fn as_edge(&self) -> Option<&Edge> {
        match self {
            Entity::Edge(edge) => Some(edge),
            Entity::Node(_) => None,
        }
    }
}

impl From<Node> for Entity {
    fn from(node: Node) -> Self {
        Entity::Node(node)
    }
}

impl From<Edge> for Entity {
    fn from(edge: Edge) -> Self {
        Entity::Edge(edge)
    }
}
