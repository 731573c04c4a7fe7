mod commands;
mod fetch;

use std::path::{Path, PathBuf};

use anyhow::Result;
use calsieve_core::config::SieveConfig;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "calsieve")]
#[command(about = "Fetch a calendar feed, drop blocklisted events, annotate the rest")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the feed, apply the sieve, write the result
    Sync {
        /// Use this config file instead of ~/.config/calsieve/config.toml
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Report what would be written without touching the filesystem
        #[arg(long)]
        dry_run: bool,
    },
    /// Show the per-event verdict without writing anything
    Preview {
        /// Use this config file instead of ~/.config/calsieve/config.toml
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Sync { config, dry_run } => {
            let config = load_config(config.as_deref())?;
            commands::sync::run(&config, dry_run).await
        }
        Commands::Preview { config } => {
            let config = load_config(config.as_deref())?;
            commands::preview::run(&config).await
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<SieveConfig> {
    let config = match path {
        Some(path) => SieveConfig::load(path)?,
        None => SieveConfig::load_default()?,
    };
    Ok(config)
}
