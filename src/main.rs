//! Strictly Five - Unified CLI
//!
//! Terminal UI and headless script driver.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use strictly_five::{AppConfig, Controller};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load_or_default(&cli.config)?;

    match cli.command.unwrap_or(Command::Tui) {
        Command::Tui => strictly_five::tui::run_tui(&config),
        Command::PlayScript { input } => run_play_script(&config, input),
    }
}

/// Run the headless driver, logging to stderr so stdout stays pure JSON lines
#[instrument(skip(config))]
fn run_play_script(config: &AppConfig, input: Option<PathBuf>) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(io::stderr)
        .init();

    info!(?input, "Starting script run");

    let mut controller = Controller::new();
    let stdout = io::stdout().lock();
    let summary = match input {
        Some(path) => {
            let file = File::open(&path)
                .with_context(|| format!("Failed to open script {}", path.display()))?;
            strictly_five::run_script(&mut controller, BufReader::new(file), stdout)?
        }
        None => strictly_five::run_script(&mut controller, io::stdin().lock(), stdout)?,
    };

    info!(
        commands = summary.commands,
        events = summary.events,
        "Script complete"
    );
    Ok(())
}
