//! Command-line interface for the timetravel front end.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Timetravel - tic-tac-toe with full move history
#[derive(Parser, Debug)]
#[command(name = "timetravel")]
#[command(about = "Tic-tac-toe with undo, redo and branching history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the session config file (defaults are used if it is missing)
    #[arg(short, long, default_value = "timetravel.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively, one command per line on stdin
    Play,

    /// Apply a list of moves and print the resulting view
    Replay {
        /// Cell indices (0-8) in the order they are played
        moves: Vec<usize>,

        /// Step to jump to after all moves are applied
        #[arg(short, long)]
        jump: Option<usize>,

        /// Print the view as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}
