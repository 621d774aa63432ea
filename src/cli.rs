//! Command-line interface for strictly_five.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Five - five-in-a-row in the terminal
#[derive(Parser, Debug)]
#[command(name = "strictly_five")]
#[command(about = "Five-in-a-row on a 10x10 board", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults apply when it is missing)
    #[arg(long, global = true, default_value = "strictly_five.toml")]
    pub config: PathBuf,

    /// Subcommand to run (the terminal UI when omitted)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal UI
    Tui,

    /// Read `row,col` / `restart` lines and print events as JSON lines
    PlayScript {
        /// Script file to read (stdin when omitted)
        input: Option<PathBuf>,
    },
}
