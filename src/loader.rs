//! Store Loader
//!
//! Drains an entity stream into a [`GraphStore`]. A failure on one entity is
//! logged and counted but never aborts the stream; the store ends up with
//! whatever subset it accepted, and the report says how much that was.

use crate::graph::Entity;
use crate::store::GraphStore;
use serde::Serialize;
use std::time::Instant;
use tracing::{debug, info, instrument, warn};

/// Outcome of one ingest run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngestReport {
    pub nodes_created: u64,
    pub edges_created: u64,
    pub failures: u64,
    pub elapsed_ms: u64,
    /// RFC 3339 completion time.
    pub completed_at: String,
}

impl IngestReport {
    pub fn entities_created(&self) -> u64 {
        self.nodes_created + self.edges_created
    }
}

/// Drives entity streams into a store, one entity at a time.
pub struct Loader<'a, S: GraphStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: GraphStore + ?Sized> Loader<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Upsert every entity of the stream into the store, in stream order.
    ///
    /// Stream order guarantees each edge's endpoints were offered to the
    /// store before the edge itself.
    #[instrument(skip(self, entities))]
    pub async fn ingest<I>(&self, entities: I) -> IngestReport
    where
        I: IntoIterator<Item = Entity>,
    {
        let start = Instant::now();
        let mut nodes_created = 0u64;
        let mut edges_created = 0u64;
        let mut failures = 0u64;

        for entity in entities {
            match entity {
                Entity::Node(node) => match self.store.upsert_node(&node).await {
                    Ok(()) => {
                        nodes_created += 1;
                        debug!(id = %node.id, "Created node");
                    }
                    Err(e) => {
                        failures += 1;
                        warn!(id = %node.id, error = %e, "Failed to upsert node");
                    }
                },
                Entity::Edge(edge) => match self.store.upsert_edge(&edge).await {
                    Ok(()) => {
                        edges_created += 1;
                        debug!(id = %edge.id, from = %edge.from_id, to = %edge.to_id, "Created edge");
                    }
                    Err(e) => {
                        failures += 1;
                        warn!(id = %edge.id, error = %e, "Failed to upsert edge");
                    }
                },
            }
        }

        let elapsed_ms = start.elapsed().as_millis() as u64;
        info!(
            nodes = nodes_created,
            edges = edges_created,
            failures,
            elapsed_ms,
            "Ingest completed"
        );

        IngestReport {
            nodes_created,
            edges_created,
            failures,
            elapsed_ms,
            completed_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}
