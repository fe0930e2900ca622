//! Twingen CLI Binary
//!
//! Command-line interface for generating synthetic twin graphs and loading
//! them into the reference store.

use clap::Parser;
use std::io::Write;
use std::process;
use tracing::{error, info};
use twingen::cli::{self, Cli, Commands};
use twingen::config::TwingenConfig;
use twingen::generator::GraphGenerator;
use twingen::loader::Loader;
use twingen::logging::{self, LoggingConfig};
use twingen::store::MemoryStore;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match TwingenConfig::load_or_default(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    // Initialize logging early
    let logging_config = build_logging_config(&cli, &config);
    if let Err(e) = logging::init(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("Twingen CLI starting");

    match run(cli, config).await {
        Ok(()) => {
            info!("Command completed successfully");
        }
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    }
}

async fn run(cli: Cli, config: TwingenConfig) -> anyhow::Result<()> {
    match cli.command {
        Commands::Generate { shape, pretty } => {
            let generator = GraphGenerator::new(shape.resolve(&config.generator))?;
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            for entity in generator {
                let line = if pretty {
                    serde_json::to_string_pretty(&entity)?
                } else {
                    serde_json::to_string(&entity)?
                };
                writeln!(out, "{}", line)?;
            }
        }
        Commands::Ingest { shape, format } => {
            let generator = GraphGenerator::new(shape.resolve(&config.generator))?;
            let store = MemoryStore::new();
            let report = Loader::new(&store).ingest(generator).await;
            println!("{}", cli::format_ingest_report(&report, &format));
        }
        Commands::Plan { shape, format } => {
            let generator_config = shape.resolve(&config.generator);
            generator_config.validate()?;
            println!("{}", cli::format_plan(&generator_config, &format)?);
        }
    }
    Ok(())
}

/// Build logging configuration from CLI args, environment, and config file.
/// Precedence: CLI flags override config file override defaults.
fn build_logging_config(cli: &Cli, config: &TwingenConfig) -> LoggingConfig {
    let mut logging = config.logging.clone();

    if cli.quiet {
        logging.level = "off".to_string();
    }
    if cli.verbose {
        logging.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        logging.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        logging.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        logging.output = output.clone();
    }

    logging
}
