//! Strictly Heuristic - terminal tic-tac-toe.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use strictly_heuristic::{
    GameConfig, GameEngine, RunOptions, SeededSource, draw_board, heuristic, status_text,
};
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    initialize_tracing();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            mode,
            seed,
            delay_ms,
            json,
        } => {
            let base = match config {
                Some(path) => GameConfig::from_file(&path)
                    .with_context(|| format!("Failed to load {}", path.display()))?,
                None => GameConfig::default(),
            };
            let config = base.with_overrides(mode, delay_ms, seed);
            strictly_heuristic::run(config, RunOptions { json }).await
        }
        Command::Hint { moves, seed } => run_hint(&moves, seed),
    }
}

/// Replays `moves` and prints what the heuristic would play for the side to move.
#[instrument]
fn run_hint(moves: &[usize], seed: u64) -> Result<()> {
    let engine = GameEngine::replay(moves).context("Invalid move list")?;
    let snapshot = engine.snapshot();
    println!("{}\n", draw_board(&snapshot));

    if engine.is_over() {
        println!("{}", status_text(&snapshot));
        return Ok(());
    }

    let player = engine.current_turn();
    let mut source = SeededSource::new(seed);
    match heuristic::select_move_with_reason(engine.board(), player, &mut source) {
        Some((position, reason)) => {
            info!(%player, %position, %reason, "Hint computed");
            println!("{player} should play {} ({position}, {reason})", position.to_index());
        }
        None => println!("No empty squares"),
    }
    Ok(())
}

/// Logs go to stderr so they never interleave with the board on stdout.
fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
