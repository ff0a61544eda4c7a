//! scraper-guard - admission control and metrics for the scraping service
//!
//! Loads the effective configuration, builds the shared state and prints
//! what an operator would see on startup.

#![allow(missing_docs)]

use anyhow::Context;
use clap::{Parser, ValueEnum};
use scraper_guard::{AppState, Config, init_tracing};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Json,
    Yaml,
}

#[derive(Debug, Parser)]
#[command(name = "scraper-guard", version, about)]
struct Cli {
    /// Configuration file (YAML, or JSON by extension). Falls back to SCRAPER_* variables.
    #[arg(short, long, env = "SCRAPER_CONFIG")]
    config: Option<PathBuf>,

    /// Print the effective configuration
    #[arg(long)]
    print_config: bool,

    /// Output format for the configuration
    #[arg(long, value_enum, default_value = "yaml")]
    format: Format,
}

async fn load_config(path: Option<&PathBuf>) -> anyhow::Result<Config> {
    match path {
        Some(path) => Config::from_file(path)
            .await
            .with_context(|| format!("failed to load {}", path.display())),
        None => Config::from_env().context("failed to load configuration from environment"),
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(cli.config.as_ref()).await?;
    init_tracing(config.logging());

    if cli.print_config {
        let rendered = match cli.format {
            Format::Json => config.to_json()?,
            Format::Yaml => config.to_yaml()?,
        };
        println!("{}", rendered);
    }

    let state = AppState::new(config);
    info!(
        max_keys = state.admission.max_keys(),
        history_capacity = state.metrics.history_capacity(),
        "Scraper guard ready"
    );

    println!("{}", state.snapshot().to_json_pretty()?);
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
