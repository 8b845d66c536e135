//! leadgen: literature-driven lead generation pipeline.
//! Entry point for the CLI binary.

mod commands;

use std::path::{Path, PathBuf};

use chrono::Datelike;
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use leadgen_common::config::{Config, CONFIG_ENV};

#[derive(Parser, Debug)]
#[command(name = "leadgen", version, about = "Find, enrich and rank leads from recent literature")]
struct Cli {
    /// Path to config TOML file
    #[arg(long, global = true, env = CONFIG_ENV)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Command {
    /// Query PubMed and write the papers table
    Fetch,
    /// Expand papers into enriched leads
    Enrich,
    /// Score and rank enriched leads
    Score,
    /// Fetch, enrich and score in order
    Run,
    /// Serve the ranked leads viewer
    Serve {
        /// Address to bind, overrides web.bind
        #[arg(long)]
        bind: Option<String>,
    },
}

/// Load the config file. Only the implicit default path may be absent;
/// a path given with `--config` or `LEADGEN_CONFIG` must exist.
fn load_config(explicit: Option<&Path>) -> anyhow::Result<Config> {
    let path = Config::resolve_path(explicit);
    if explicit.is_none() && !path.exists() {
        warn!("Config file {} not found, using defaults", path.display());
        return Ok(Config::default());
    }
    let config = Config::load(&path)?;
    info!("Configuration loaded from {}", path.display());
    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("leadgen=debug,info")),
        )
        .init();

    let cli = Cli::parse();
    info!("leadgen {}", env!("CARGO_PKG_VERSION"));

    let config = load_config(cli.config.as_deref())?;
    let current_year = chrono::Local::now().year();

    match cli.command {
        Command::Fetch => commands::fetch(&config, current_year).await?,
        Command::Enrich => commands::enrich(&config)?,
        Command::Score => commands::score(&config, current_year)?,
        Command::Run => {
            commands::fetch(&config, current_year).await?;
            commands::enrich(&config)?;
            commands::score(&config, current_year)?;
        }
        Command::Serve { bind } => {
            let addr = bind.unwrap_or_else(|| config.web.bind.clone());
            commands::serve(&config, &addr).await?;
        }
    }

    Ok(())
}
