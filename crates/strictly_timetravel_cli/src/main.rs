//! Strictly Timetravel - terminal front end.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use strictly_timetravel_cli::{Cli, Command, Session, SessionConfig, render, replay};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so they never interleave with the board on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = SessionConfig::load_or_default(&cli.config)?;

    match cli.command {
        Command::Play => run_play(config),
        Command::Replay { moves, jump, json } => run_replay(config, &moves, jump, json),
    }
}

/// Run the interactive session on stdin/stdout
#[instrument(skip(config))]
fn run_play(config: SessionConfig) -> Result<()> {
    info!("Starting interactive session");
    let mut session = Session::new(config);
    session.run(std::io::stdin().lock(), std::io::stdout().lock())?;
    Ok(())
}

/// Apply a move list and print the final view once
#[instrument(skip(config))]
fn run_replay(config: SessionConfig, moves: &[usize], jump: Option<usize>, json: bool) -> Result<()> {
    let view = replay(moves, jump)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        println!("{}", render(&view, &config));
    }
    Ok(())
}
