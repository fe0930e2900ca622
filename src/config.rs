//! Configuration System
//!
//! TOML file configuration for the generator shape and logging, with serde
//! defaults and eager validation. CLI flags override file values; the file
//! overrides built-in defaults.

use crate::error::ConfigError;
use crate::generator::{GeneratorConfig, DEFAULT_NODE_LABEL};
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "twingen.toml";

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TwingenConfig {
    /// Generated graph shape
    #[serde(default)]
    pub generator: GeneratorSettings,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// File form of the generator shape.
///
/// Defaults mirror the benchmark shape the tool was built around: a
/// ten-level binary tree wired with `contains` edges.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorSettings {
    #[serde(default = "default_levels")]
    pub levels: u32,

    #[serde(default = "default_fan_out")]
    pub fan_out: u32,

    #[serde(default = "default_relationship")]
    pub relationship: String,

    #[serde(default = "default_node_label")]
    pub node_label: String,
}

fn default_levels() -> u32 {
    10
}

fn default_fan_out() -> u32 {
    2
}

fn default_relationship() -> String {
    "contains".to_string()
}

fn default_node_label() -> String {
    DEFAULT_NODE_LABEL.to_string()
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            levels: default_levels(),
            fan_out: default_fan_out(),
            relationship: default_relationship(),
            node_label: default_node_label(),
        }
    }
}

impl GeneratorSettings {
    pub fn to_generator_config(&self) -> GeneratorConfig {
        GeneratorConfig::new(self.levels, self.fan_out, self.relationship.clone())
            .with_node_label(self.node_label.clone())
    }
}

impl TwingenConfig {
    /// Load and validate configuration from a TOML file.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from an explicit path, from `twingen.toml` in the
    /// working directory if present, or fall back to defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_from_file(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::load_from_file(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.generator.to_generator_config().validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
