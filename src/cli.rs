//! CLI domain: clap definitions and result presentation only. Command
//! execution lives in the binary.

use crate::config::GeneratorSettings;
use crate::error::GeneratorError;
use crate::generator::GeneratorConfig;
use crate::loader::IngestReport;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Twingen CLI - Synthetic twin-graph generation
#[derive(Parser)]
#[command(name = "twingen")]
#[command(about = "Generate synthetic twin graphs and load them into a graph store")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Disable all logging
    #[arg(long, default_value = "false")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr)
    #[arg(long)]
    pub log_output: Option<String>,
}

/// Graph shape flags shared by the subcommands; unset flags fall back to the
/// config file.
#[derive(Args)]
pub struct ShapeArgs {
    /// Maximum depth of the generated tree (the root is level 0)
    #[arg(long)]
    pub levels: Option<u32>,

    /// Children generated per parent
    #[arg(long)]
    pub fan_out: Option<u32>,

    /// Label applied to every edge
    #[arg(long)]
    pub relationship: Option<String>,

    /// Label applied to every node
    #[arg(long)]
    pub node_label: Option<String>,
}

impl ShapeArgs {
    pub fn resolve(&self, base: &GeneratorSettings) -> GeneratorConfig {
        GeneratorConfig {
            levels: self.levels.unwrap_or(base.levels),
            fan_out: self.fan_out.unwrap_or(base.fan_out),
            relationship: self
                .relationship
                .clone()
                .unwrap_or_else(|| base.relationship.clone()),
            node_label: self
                .node_label
                .clone()
                .unwrap_or_else(|| base.node_label.clone()),
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a graph and write entities to stdout, one JSON object per line
    Generate {
        #[command(flatten)]
        shape: ShapeArgs,

        /// Pretty-print each entity instead of one line per entity
        #[arg(long)]
        pretty: bool,
    },
    /// Generate a graph and load it into the in-memory reference store
    Ingest {
        #[command(flatten)]
        shape: ShapeArgs,

        /// Output format for the summary (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Show the entity counts a shape would produce, without generating
    Plan {
        #[command(flatten)]
        shape: ShapeArgs,

        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
}

pub fn format_ingest_report(report: &IngestReport, format: &str) -> String {
    match format {
        "json" => serde_json::to_string_pretty(report)
            .unwrap_or_else(|e| format!("{{\"error\":\"{}\"}}", e)),
        _ => format!(
            "Ingest completed:\n  Nodes: {}\n  Edges: {}\n  Failures: {}\n  Completed in: {} ms",
            report.nodes_created, report.edges_created, report.failures, report.elapsed_ms
        ),
    }
}

pub fn format_plan(config: &GeneratorConfig, format: &str) -> Result<String, GeneratorError> {
    let nodes = config.node_count()?;
    let edges = config.edge_count()?;
    match format {
        "json" => {
            let out = serde_json::json!({
                "levels": config.levels,
                "fanOut": config.fan_out,
                "nodes": nodes,
                "edges": edges,
                "entities": nodes + edges,
            });
            Ok(serde_json::to_string_pretty(&out).unwrap_or_default())
        }
        _ => Ok(format!(
            "Shape levels={} fan_out={}:\n  Nodes: {}\n  Edges: {}\n  Entities: {}",
            config.levels,
            config.fan_out,
            nodes,
            edges,
            nodes + edges
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_args_fall_back_to_settings() {
        let args = ShapeArgs {
            levels: Some(4),
            fan_out: None,
            relationship: None,
            node_label: None,
        };
        let config = args.resolve(&GeneratorSettings::default());
        assert_eq!(config.levels, 4);
        assert_eq!(config.fan_out, 2);
        assert_eq!(config.relationship, "contains");
    }

    #[test]
    fn test_format_plan_text() {
        let config = GeneratorConfig::new(2, 2, "contains");
        let text = format_plan(&config, "text").unwrap();
        assert!(text.contains("Nodes: 7"));
        assert!(text.contains("Edges: 6"));
    }

    #[test]
    fn test_format_ingest_report_json() {
        let report = IngestReport {
            nodes_created: 3,
            edges_created: 2,
            failures: 0,
            elapsed_ms: 12,
            completed_at: "2026-01-01T00:00:00+00:00".to_string(),
        };
        let json: serde_json::Value =
            serde_json::from_str(&format_ingest_report(&report, "json")).unwrap();
        assert_eq!(json["nodes_created"], 3);
        assert_eq!(json["edges_created"], 2);
    }
}
