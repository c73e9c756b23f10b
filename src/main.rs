//! Hash constant search tool - Main entrypoint.
//!
//! Loads configuration, initializes logging, and runs the exhaustive search
//! over hash parameter candidates, streaming one progress line per strict
//! improvement. The final best constants are logged and can optionally be
//! written out as a JSON report for transcription into the consuming
//! codebase.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;

use param_hash_search_lib::config::{AppConfig, ConfigLoader, LogConfig, ENV_PREFIX};
use param_hash_search_lib::keyset::KeySet;
use param_hash_search_lib::search::{SearchEngine, TracingSink};

/// Command line arguments for the hash constant search tool.
#[derive(Parser, Debug)]
#[clap(name = "param-hash-search", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Run the search over the configured candidate space
    Search {
        /// Optional key file (one identifier per line) replacing the
        /// compiled-in parameter table
        #[clap(short, long, value_parser)]
        keys: Option<PathBuf>,

        /// Write the final best record to this path as JSON
        #[clap(short, long, value_parser)]
        report: Option<PathBuf>,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system from the loaded configuration.
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_logging(log: &LogConfig) -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log.level));

    if log.json {
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .context("Failed to set global tracing subscriber")
    } else {
        let subscriber = tracing_subscriber::fmt().with_env_filter(filter).finish();
        tracing::subscriber::set_global_default(subscriber)
            .context("Failed to set global tracing subscriber")
    }
}

/// Main entry point for the application.
fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let loader = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX);

    match args.command.unwrap_or(Command::Search {
        keys: None,
        report: None,
    }) {
        Command::Search { keys, report } => {
            let config = loader.load().context("Failed to load configuration")?;
            init_logging(&config.log)?;

            let key_set = match keys {
                Some(path) => KeySet::from_file(&path)
                    .with_context(|| format!("Failed to load key file {}", path.display()))?,
                None => KeySet::synth_params(),
            };

            info!(
                keys = key_set.len(),
                max_multiplier_index = config.search.max_multiplier_index,
                max_shift = config.search.max_shift,
                moduli = ?config.search.modulus_candidates,
                "starting hash constant search"
            );

            let engine = SearchEngine::new(key_set, config.search)?;
            let mut sink = TracingSink;
            let best = engine.run(&mut sink)?;

            info!(
                multiplier = best.params.multiplier(),
                shift = best.params.shift(),
                modulus = best.params.modulus(),
                max_bucket = best.score.max_bucket,
                avg_bucket = best.score.avg_bucket,
                utilized = best.score.utilized,
                elapsed_secs = best.elapsed.as_secs_f64(),
                "search exhausted; best constants found"
            );

            if let Some(path) = report {
                let json = serde_json::to_string_pretty(&best)
                    .context("Failed to serialize report")?;
                std::fs::write(&path, json)
                    .with_context(|| format!("Failed to write report {}", path.display()))?;
                info!(report = %path.display(), "report written");
            }

            Ok(())
        }
        Command::Validate => {
            let config = loader.load().context("Configuration validation failed")?;
            init_logging(&config.log)?;
            info!("Configuration validated successfully");
            Ok(())
        }
        Command::GenConfig { output } => {
            let default_config = AppConfig::default();

            // Create parent directories if they don't exist
            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }

            let toml = toml::to_string_pretty(&default_config)
                .context("Failed to serialize default configuration")?;
            std::fs::write(&output, toml)
                .with_context(|| format!("Failed to write {}", output.display()))?;

            println!("Default configuration written to {}", output.display());
            Ok(())
        }
    }
}
