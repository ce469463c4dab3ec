//! CLI for pathprobe.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use pathprobe_core::classifier::PathClassifier;
use pathprobe_core::config;
use std::path::PathBuf;
use std::sync::Arc;

use commands::{run_check, run_registry, run_watch};

/// Top-level CLI for pathprobe.
#[derive(Debug, Parser)]
#[command(name = "pathprobe")]
#[command(about = "pathprobe: debounced URL validation and path classification", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/.config/pathprobe/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Validate and classify a single URL (no debounce).
    Check {
        /// URL to classify.
        url: String,
    },

    /// Treat each stdin line as the current input value and print debounced results.
    Watch {
        /// Override the configured debounce window, in milliseconds.
        #[arg(long, value_name = "MS")]
        debounce_ms: Option<u64>,
    },

    /// List the known paths in the registry.
    Registry,
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = match &cli.config {
            Some(path) => config::load_from(path)?,
            None => config::load_or_init()?,
        };
        tracing::debug!("loaded config: {:?}", cfg);

        let registry = Arc::new(cfg.build_registry()?);
        let classifier = PathClassifier::new(registry, cfg.backend_latency());

        match cli.command {
            CliCommand::Check { url } => run_check(&classifier, &url).await?,
            CliCommand::Watch { debounce_ms } => {
                let delay = debounce_ms
                    .map(std::time::Duration::from_millis)
                    .unwrap_or_else(|| cfg.debounce_delay());
                run_watch(classifier, delay).await?;
            }
            CliCommand::Registry => run_registry(classifier.registry())?,
        }

        Ok(())
    }
}
