// src/main.rs
use route_patterns::cli::{execute_command, Cli};
use route_patterns::config::Settings;
use clap::Parser;
use anyhow::{Context, Result};

fn main() -> Result<()> {
    // Initialize environment
    dotenv::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Parse command line arguments
    let cli = Cli::parse();

    let settings = Settings::load().context("Failed to load settings")?;

    execute_command(cli.command, &settings)
}
