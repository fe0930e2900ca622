//! Graph Store Abstraction
//!
//! The narrow surface a generated stream is fed into. Real deployments back
//! this with a remote graph database; the crate ships only the in-memory
//! reference implementation used by the ingest demo and tests.

pub mod memory;

pub use memory::MemoryStore;

use crate::error::StoreError;
use crate::graph::{Edge, Node};
use async_trait::async_trait;
use futures::Stream;
use std::pin::Pin;

/// A single query result row.
pub type Row = serde_json::Map<String, serde_json::Value>;

/// Lazy stream of query result rows.
pub type RowStream = Pin<Box<dyn Stream<Item = Result<Row, StoreError>> + Send>>;

/// Store collaborator consumed by the loader.
///
/// Upserts are idempotent create-or-replace operations keyed by entity id.
/// An edge may only be upserted once both its endpoints exist as nodes.
#[async_trait]
pub trait GraphStore: Send + Sync {
    async fn upsert_node(&self, node: &Node) -> Result<(), StoreError>;

    async fn upsert_edge(&self, edge: &Edge) -> Result<(), StoreError>;

    /// Run a store-native query. Implementations without a query surface
    /// return [`StoreError::QueryUnsupported`].
    async fn query(&self, query: &str) -> Result<RowStream, StoreError>;
}
