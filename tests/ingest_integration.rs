//! End-to-end ingestion: generator stream through the loader into the
//! reference store, including the per-entity failure recovery path.

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::SeedableRng;
use twingen::error::StoreError;
use twingen::generator::{GeneratorConfig, GraphGenerator};
use twingen::graph::{Edge, Entity, Node};
use twingen::loader::Loader;
use twingen::store::{GraphStore, MemoryStore, RowStream};
use twingen::types::NodeId;

fn generator(levels: u32, fan_out: u32, seed: u64) -> GraphGenerator<StdRng> {
    let config = GeneratorConfig::new(levels, fan_out, "contains");
    GraphGenerator::with_rng(config, StdRng::seed_from_u64(seed)).unwrap()
}

#[tokio::test]
async fn test_ingest_full_tree() {
    let store = MemoryStore::new();
    let report = Loader::new(&store).ingest(generator(3, 2, 1)).await;

    assert_eq!(report.nodes_created, 15);
    assert_eq!(report.edges_created, 14);
    assert_eq!(report.failures, 0);
    assert_eq!(store.node_count(), 15);
    assert_eq!(store.edge_count(), 14);

    let root = store.get_node(&NodeId::root()).unwrap();
    assert_eq!(root.label, "twin");
    assert_eq!(root.level(), Some(0));

    let children = store.children_of(&NodeId::root());
    assert_eq!(children, vec![NodeId::new("1"), NodeId::new("2")]);
}

#[tokio::test]
async fn test_ingest_stores_entities_unmodified() {
    let entities: Vec<Entity> = generator(2, 2, 2).collect();
    let store = MemoryStore::new();
    Loader::new(&store).ingest(entities.clone()).await;

    for entity in &entities {
        match entity {
            Entity::Node(node) => {
                assert_eq!(store.get_node(&node.id).as_ref(), Some(node));
            }
            Entity::Edge(edge) => {
                assert_eq!(store.get_edge(&edge.id).as_ref(), Some(edge));
            }
        }
    }
}

#[tokio::test]
async fn test_reingest_is_idempotent() {
    let entities: Vec<Entity> = generator(2, 3, 3).collect();
    let store = MemoryStore::new();
    let loader = Loader::new(&store);

    let first = loader.ingest(entities.clone()).await;
    let second = loader.ingest(entities).await;

    assert_eq!(first.nodes_created, second.nodes_created);
    assert_eq!(first.edges_created, second.edges_created);
    assert_eq!(store.node_count(), 13);
    assert_eq!(store.edge_count(), 12);
}

/// Store double that accepts nodes but rejects every edge.
struct EdgeRejectingStore {
    inner: MemoryStore,
}

#[async_trait]
impl GraphStore for EdgeRejectingStore {
    async fn upsert_node(&self, node: &Node) -> Result<(), StoreError> {
        self.inner.upsert_node(node).await
    }

    async fn upsert_edge(&self, edge: &Edge) -> Result<(), StoreError> {
        Err(StoreError::MissingEndpoint {
            edge: edge.id.clone(),
            node: edge.from_id.clone(),
        })
    }

    async fn query(&self, query: &str) -> Result<RowStream, StoreError> {
        self.inner.query(query).await
    }
}

#[tokio::test]
async fn test_entity_failures_do_not_abort_the_stream() {
    let store = EdgeRejectingStore {
        inner: MemoryStore::new(),
    };
    let report = Loader::new(&store).ingest(generator(3, 2, 4)).await;

    // Every node still lands even though every edge upsert failed.
    assert_eq!(report.nodes_created, 15);
    assert_eq!(report.edges_created, 0);
    assert_eq!(report.failures, 14);
    assert_eq!(store.inner.node_count(), 15);
    assert_eq!(store.inner.edge_count(), 0);
}

#[tokio::test]
async fn test_loader_works_through_trait_object() {
    let store = MemoryStore::new();
    let store_ref: &dyn GraphStore = &store;
    let report = Loader::new(store_ref).ingest(generator(1, 2, 5)).await;
    assert_eq!(report.entities_created(), 5);
}
