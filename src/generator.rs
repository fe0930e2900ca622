//! Leveled Tree Generator
//!
//! Produces a regular tree of labeled nodes and weighted edges as a lazy
//! stream: one root, each node at level L spawning `fan_out` children at
//! level L+1, down to a maximum depth. Every entity is emitted exactly once,
//! in a deterministic order: root first, then breadth-first by level, with
//! each child immediately followed by the edge from its parent.
//!
//! Node ids and edge ids come from independent counters, so the streams of
//! ids never interleave: nodes are `"0"` (the root), `"1"`, `"2"`, ... in
//! creation order, and edges are `"0"`, `"1"`, ... in creation order.

use crate::error::GeneratorError;
use crate::graph::{Edge, EdgeDirection, Entity, Node, PropertyMap, PropertyValue};
use crate::types::{EdgeId, NodeId};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::iter::FusedIterator;
use std::mem;
use tracing::debug;

/// Label applied to every generated node unless configured otherwise.
pub const DEFAULT_NODE_LABEL: &str = "twin";

/// Shape of a generated graph, fixed at construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Maximum depth of the tree. Nodes exist at depths 0..=`levels`;
    /// parents stop expanding once they sit at depth `levels`. Zero yields
    /// a root-only graph.
    pub levels: u32,
    /// Children produced per parent. Zero yields a root-only graph.
    pub fan_out: u32,
    /// Label applied to every edge.
    pub relationship: String,
    /// Label applied to every node.
    pub node_label: String,
}

impl GeneratorConfig {
    pub fn new(levels: u32, fan_out: u32, relationship: impl Into<String>) -> Self {
        Self {
            levels,
            fan_out,
            relationship: relationship.into(),
            node_label: DEFAULT_NODE_LABEL.to_string(),
        }
    }

    pub fn with_node_label(mut self, label: impl Into<String>) -> Self {
        self.node_label = label.into();
        self
    }

    /// Validate the configuration, including that the total entity count
    /// fits the id counters. Root-only shapes (`levels == 0` or
    /// `fan_out == 0`) are valid.
    pub fn validate(&self) -> Result<(), GeneratorError> {
        if self.relationship.is_empty() {
            return Err(GeneratorError::EmptyRelationship);
        }
        if self.node_label.is_empty() {
            return Err(GeneratorError::EmptyNodeLabel);
        }
        self.entity_count()?;
        Ok(())
    }

    /// Total number of nodes this configuration produces.
    ///
    /// `(F^(L+1) - 1) / (F - 1)` for fan-out F > 1 over L levels, `L + 1`
    /// for a chain, `1` for a root-only shape. Computed with checked
    /// arithmetic so oversized shapes fail here instead of mid-stream.
    pub fn node_count(&self) -> Result<u64, GeneratorError> {
        let too_large = || GeneratorError::GraphTooLarge {
            levels: self.levels,
            fan_out: self.fan_out,
        };

        let mut total: u64 = 1;
        let mut width: u64 = 1;
        for _ in 0..self.levels {
            width = width.checked_mul(self.fan_out as u64).ok_or_else(too_large)?;
            if width == 0 {
                break;
            }
            total = total.checked_add(width).ok_or_else(too_large)?;
        }
        Ok(total)
    }

    /// Total number of edges this configuration produces: one per non-root
    /// node.
    pub fn edge_count(&self) -> Result<u64, GeneratorError> {
        Ok(self.node_count()? - 1)
    }

    /// Total number of entities (nodes plus edges) this configuration
    /// produces.
    pub fn entity_count(&self) -> Result<u64, GeneratorError> {
        let nodes = self.node_count()?;
        nodes
            .checked_mul(2)
            .map(|n| n - 1)
            .ok_or(GeneratorError::GraphTooLarge {
                levels: self.levels,
                fan_out: self.fan_out,
            })
    }
}

/// Streaming generator for one graph.
///
/// Implements `Iterator<Item = Entity>`; the sequence is lazy, finite, and
/// one-shot. Once exhausted it stays exhausted: the id counters are never
/// reset, so ids cannot repeat within one generator value. Generating a
/// second graph means constructing a second generator.
///
/// The random source is an explicit dependency. [`GraphGenerator::new`]
/// seeds one from OS entropy, so successive runs differ; tests inject a
/// seeded source through [`GraphGenerator::with_rng`] to pin exact output.
pub struct GraphGenerator<R: Rng> {
    config: GeneratorConfig,
    rng: R,
    /// Id for the next non-root node. Root is always `"0"`.
    node_seq: u64,
    /// Id for the next edge.
    edge_seq: u64,
    /// Depth of the children currently being produced.
    depth: u32,
    parents: Vec<NodeId>,
    next_parents: Vec<NodeId>,
    parent_idx: usize,
    child_idx: u32,
    /// Edge to the most recently emitted child, due out next.
    pending_edge: Option<Edge>,
    started: bool,
    done: bool,
    remaining: u64,
}

impl GraphGenerator<StdRng> {
    /// Create a generator with an entropy-seeded random source.
    pub fn new(config: GeneratorConfig) -> Result<Self, GeneratorError> {
        Self::with_rng(config, StdRng::from_entropy())
    }
}

impl<R: Rng> GraphGenerator<R> {
    /// Create a generator with a caller-supplied random source.
    pub fn with_rng(config: GeneratorConfig, rng: R) -> Result<Self, GeneratorError> {
        config.validate()?;
        let remaining = config.entity_count()?;
        debug!(
            levels = config.levels,
            fan_out = config.fan_out,
            relationship = %config.relationship,
            entities = remaining,
            "Generator constructed"
        );
        Ok(Self {
            config,
            rng,
            node_seq: 1,
            edge_seq: 0,
            depth: 0,
            parents: Vec::new(),
            next_parents: Vec::new(),
            parent_idx: 0,
            child_idx: 0,
            pending_edge: None,
            started: false,
            done: false,
            remaining,
        })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Expand a directed edge into a forward/reverse pair.
    ///
    /// Not part of the main stream, which stays a directed tree. The forward
    /// copy keeps the input's id and weight and gains an `Outgoing` tag; the
    /// reverse copy gets the id `re:<id>`, swapped endpoints, a `Reverse`
    /// tag, and a freshly drawn weight.
    pub fn expand_to_undirected(&mut self, edge: &Edge) -> (Edge, Edge) {
        let mut forward = edge.clone();
        forward.direction = Some(EdgeDirection::Outgoing);

        let mut reverse = Edge::new(
            EdgeId::new(format!("re:{}", edge.id)),
            edge.label.clone(),
            edge.to_id.clone(),
            edge.from_id.clone(),
        );
        reverse.direction = Some(EdgeDirection::Reverse);
        reverse
            .properties
            .insert("length".to_string(), PropertyValue::Int(self.rng.gen_range(0..10)));

        (forward, reverse)
    }

    fn make_node(&mut self, id: NodeId, level: u32) -> Node {
        let mut properties = PropertyMap::new();
        properties.insert(
            "temperature".to_string(),
            PropertyValue::Int(self.rng.gen_range(50..100)),
        );
        properties.insert(
            "humidity".to_string(),
            PropertyValue::Int(self.rng.gen_range(50..100)),
        );
        properties.insert(
            "pressure".to_string(),
            PropertyValue::Int(self.rng.gen_range(50..100)),
        );
        properties.insert("level".to_string(), PropertyValue::Int(level as i64));

        let mut node = Node::new(id, self.config.node_label.clone());
        node.properties = properties;
        node
    }

    fn make_edge(&mut self, from_id: NodeId, to_id: NodeId) -> Edge {
        let id = EdgeId::new(self.edge_seq.to_string());
        self.edge_seq += 1;
        Edge::new(id, self.config.relationship.clone(), from_id, to_id)
            .with_property("length", self.rng.gen_range(0..10i64))
    }
}

impl<R: Rng> Iterator for GraphGenerator<R> {
    type Item = Entity;

    fn next(&mut self) -> Option<Entity> {
        if self.done {
            return None;
        }

        // The edge to a child is due immediately after the child itself.
        if let Some(edge) = self.pending_edge.take() {
            self.remaining -= 1;
            return Some(Entity::Edge(edge));
        }

        if !self.started {
            self.started = true;
            let root = self.make_node(NodeId::root(), 0);
            self.parents.push(root.id.clone());
            self.depth = 1;
            if self.config.levels == 0 || self.config.fan_out == 0 {
                self.done = true;
            }
            self.remaining -= 1;
            return Some(Entity::Node(root));
        }

        loop {
            if self.parent_idx >= self.parents.len() {
                // Level complete; its children become the next parent set.
                self.depth += 1;
                if self.depth > self.config.levels || self.next_parents.is_empty() {
                    self.done = true;
                    debug!(nodes = self.node_seq, edges = self.edge_seq, "Generation completed");
                    return None;
                }
                self.parents = mem::take(&mut self.next_parents);
                self.parent_idx = 0;
                self.child_idx = 0;
                continue;
            }

            if self.child_idx >= self.config.fan_out {
                self.parent_idx += 1;
                self.child_idx = 0;
                continue;
            }

            let parent_id = self.parents[self.parent_idx].clone();
            let id = NodeId::new(self.node_seq.to_string());
            self.node_seq += 1;

            let node = self.make_node(id, self.depth);
            self.next_parents.push(node.id.clone());
            self.pending_edge = Some(self.make_edge(parent_id, node.id.clone()));
            self.child_idx += 1;
            self.remaining -= 1;
            return Some(Entity::Node(node));
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining as usize;
        (remaining, Some(remaining))
    }
}

impl<R: Rng> FusedIterator for GraphGenerator<R> {}
