//! Noughts - play noughts and crosses in the terminal.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use noughts_crosses_cli::render::{board_text, headline};
use noughts_crosses_cli::{AppConfig, harness, tui};
use std::sync::Mutex;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;

    initialize_tracing(&config, matches!(cli.command, Command::Tui))?;
    info!(config = %cli.config.display(), "Configuration ready");

    match cli.command {
        Command::Play => run_play(&config),
        Command::Replay { moves, json } => run_replay(&config, &moves, json),
        Command::Tui => tui::run(&config),
    }
}

/// Routes logs to the configured file, or to stderr outside the TUI.
fn initialize_tracing(config: &AppConfig, tui_mode: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter()));

    match config.log_file() {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        // Anything written to the terminal would tear the board view.
        None if tui_mode => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::sink)
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
    Ok(())
}

/// Run the line-oriented harness on stdin/stdout
fn run_play(config: &AppConfig) -> Result<()> {
    let stdin = std::io::stdin();
    harness::run(stdin.lock(), std::io::stdout(), config)
}

/// Replay moves and print the final state
#[instrument(skip(config))]
fn run_replay(config: &AppConfig, moves: &[usize], json: bool) -> Result<()> {
    let state = harness::replay(moves)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&state)?);
    } else {
        println!("{}", board_text(state.board(), config));
        println!();
        println!("{}", headline(&state, config));
    }
    Ok(())
}
