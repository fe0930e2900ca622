//! In-memory reference store.

use crate::error::StoreError;
use crate::graph::{Edge, Node};
use crate::store::{GraphStore, RowStream};
use crate::types::{EdgeId, NodeId};
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;

/// Map-backed [`GraphStore`] with idempotent keyed upserts.
///
/// Edge upserts verify both endpoints are present, matching the contract a
/// remote store would enforce. Queries are unsupported; tests assert against
/// the read accessors instead.
#[derive(Debug, Default)]
pub struct MemoryStore {
    nodes: RwLock<HashMap<NodeId, Node>>,
    edges: RwLock<HashMap<EdgeId, Edge>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.read().len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.read().len()
    }

    pub fn get_node(&self, id: &NodeId) -> Option<Node> {
        self.nodes.read().get(id).cloned()
    }

    pub fn get_edge(&self, id: &EdgeId) -> Option<Edge> {
        self.edges.read().get(id).cloned()
    }

    /// Ids of the nodes reachable from `id` over one outgoing edge, in
    /// numeric id order.
    pub fn children_of(&self, id: &NodeId) -> Vec<NodeId> {
        let edges = self.edges.read();
        let mut children: Vec<NodeId> = edges
            .values()
            .filter(|edge| &edge.from_id == id)
            .map(|edge| edge.to_id.clone())
            .collect();
        children.sort_by_key(|child| child.as_str().parse::<u64>().unwrap_or(u64::MAX));
        children
    }
}

#[async_trait]
impl GraphStore for MemoryStore {
    async fn upsert_node(&self, node: &Node) -> Result<(), StoreError> {
        self.nodes.write().insert(node.id.clone(), node.clone());
        Ok(())
    }

    async fn upsert_edge(&self, edge: &Edge) -> Result<(), StoreError> {
        {
            let nodes = self.nodes.read();
            for endpoint in [&edge.from_id, &edge.to_id] {
                if !nodes.contains_key(endpoint) {
                    return Err(StoreError::MissingEndpoint {
                        edge: edge.id.clone(),
                        node: endpoint.clone(),
                    });
                }
            }
        }
        self.edges.write().insert(edge.id.clone(), edge.clone());
        Ok(())
    }

    async fn query(&self, query: &str) -> Result<RowStream, StoreError> {
        Err(StoreError::QueryUnsupported(query.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: &str) -> Node {
        Node::new(NodeId::new(id), "twin")
    }

    fn edge(id: &str, from: &str, to: &str) -> Edge {
        Edge::new(EdgeId::new(id), "contains", NodeId::new(from), NodeId::new(to))
    }

    #[tokio::test]
    async fn test_upsert_node_is_idempotent() {
        let store = MemoryStore::new();
        store.upsert_node(&node("0")).await.unwrap();
        store.upsert_node(&node("0")).await.unwrap();
        assert_eq!(store.node_count(), 1);
    }

    #[tokio::test]
    async fn test_upsert_edge_requires_endpoints() {
        let store = MemoryStore::new();
        store.upsert_node(&node("0")).await.unwrap();

        let err = store.upsert_edge(&edge("0", "0", "1")).await.unwrap_err();
        assert!(matches!(err, StoreError::MissingEndpoint { .. }));

        store.upsert_node(&node("1")).await.unwrap();
        store.upsert_edge(&edge("0", "0", "1")).await.unwrap();
        assert_eq!(store.edge_count(), 1);
    }

    #[tokio::test]
    async fn test_node_and_edge_ids_do_not_collide() {
        let store = MemoryStore::new();
        store.upsert_node(&node("0")).await.unwrap();
        store.upsert_node(&node("1")).await.unwrap();
        // An edge may carry the same literal id as a node.
        store.upsert_edge(&edge("1", "0", "1")).await.unwrap();
        assert_eq!(store.node_count(), 2);
        assert_eq!(store.edge_count(), 1);
        assert!(store.get_node(&NodeId::new("1")).is_some());
        assert!(store.get_edge(&EdgeId::new("1")).is_some());
    }

    #[tokio::test]
    async fn test_children_sorted_numerically() {
        let store = MemoryStore::new();
        for id in ["0", "2", "10"] {
            store.upsert_node(&node(id)).await.unwrap();
        }
        store.upsert_edge(&edge("0", "0", "10")).await.unwrap();
        store.upsert_edge(&edge("1", "0", "2")).await.unwrap();

        let children = store.children_of(&NodeId::new("0"));
        assert_eq!(children, vec![NodeId::new("2"), NodeId::new("10")]);
    }

    #[tokio::test]
    async fn test_query_unsupported() {
        let store = MemoryStore::new();
        let err = match store.query("SELECT COUNT() FROM twins").await {
            Ok(_) => panic!("expected query to be unsupported"),
            Err(e) => e,
        };
        assert!(matches!(err, StoreError::QueryUnsupported(_)));
    }
}
