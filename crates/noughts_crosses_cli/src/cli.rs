//! Command-line interface for noughts.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Noughts and Crosses - two-player game in the terminal
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Two-player noughts and crosses", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults apply if it does not exist)
    #[arg(short, long, global = true, default_value = "noughts.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play on stdin/stdout, one move (0-8) per line
    Play,

    /// Apply moves to a fresh game and print the result
    Replay {
        /// Squares to play, in order (0-8)
        moves: Vec<usize>,

        /// Print the final state as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run the interactive terminal board
    Tui,
}
