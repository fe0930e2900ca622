//! Error types for graph generation and store interaction.

use crate::types::{EdgeId, NodeId};
use std::path::PathBuf;
use thiserror::Error;

/// Generator configuration errors, reported at construction.
///
/// A zero `levels` or `fan_out` is not an error; both produce a root-only
/// graph.
#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("relationship label must not be empty")]
    EmptyRelationship,

    #[error("node label must not be empty")]
    EmptyNodeLabel,

    #[error("graph too large: levels={levels}, fan_out={fan_out} overflows the entity counter")]
    GraphTooLarge { levels: u32, fan_out: u32 },
}

/// Graph-store errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("node not found: {0}")]
    NodeNotFound(NodeId),

    #[error("edge {edge} references missing node {node}")]
    MissingEndpoint { edge: EdgeId, node: NodeId },

    #[error("store does not support queries: {0}")]
    QueryUnsupported(String),

    #[error("store I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Configuration-file and logging-setup errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

impl From<GeneratorError> for ConfigError {
    fn from(err: GeneratorError) -> Self {
        ConfigError::Invalid(err.to_string())
    }
}
