//! Roster - user directory admin
//!
//! Main entry point for the interactive front-end.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use roster_infra::{config, init_tracing};
use roster_lib::{repl, AppContext};
use tracing::{debug, info, warn};

/// roster - browse and edit the user directory
#[derive(Parser, Debug)]
#[command(name = "roster")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to a JSON or TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory holding local_storage.json (overrides configuration)
    #[arg(long)]
    storage_dir: Option<PathBuf>,

    /// Keep all data in memory; nothing is written to disk
    #[arg(long)]
    ephemeral: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load .env before reading configuration from the environment
    let dotenv = dotenvy::dotenv();

    let (mut config, fallback) = match &cli.config {
        Some(path) => (config::load_from_file(Some(path.clone()))?, None),
        None => match config::load() {
            Ok(config) => (config, None),
            Err(err) => (roster_domain::Config::default(), Some(err)),
        },
    };
    if let Some(dir) = &cli.storage_dir {
        config.storage.dir = dir.to_string_lossy().into_owned();
    }

    init_tracing(&config.logging)?;

    match dotenv {
        Ok(path) => info!(path = %path.display(), "Loaded .env"),
        Err(e) => debug!(error = %e, "No .env file loaded"),
    }
    if let Some(err) = fallback {
        warn!(error = %err, "No configuration found; using defaults");
    }

    let ctx = if cli.ephemeral {
        AppContext::in_memory(config)
    } else {
        AppContext::new_with_config(config)?
    };
    info!("Roster starting");

    repl::run(Arc::new(ctx)).await
}
