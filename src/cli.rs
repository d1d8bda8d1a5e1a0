//! Command-line interface for strictly_heuristic.

use clap::{Parser, Subcommand};
use strictly_heuristic::GameMode;

/// Strictly Heuristic - tic-tac-toe against a friend or a heuristic computer
#[derive(Parser, Debug)]
#[command(name = "strictly_heuristic")]
#[command(about = "Tic-tac-toe with a win/block/random computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal
    Play {
        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Mode to start in ("human" or "computer")
        #[arg(short, long)]
        mode: Option<GameMode>,

        /// Seed for the computer's random fallback
        #[arg(long)]
        seed: Option<u64>,

        /// Pause before the computer moves, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Print a JSON snapshot after each command
        #[arg(long)]
        json: bool,
    },

    /// Show the heuristic's choice for a position
    Hint {
        /// Squares played so far (0-8, comma separated, X first)
        #[arg(value_delimiter = ',')]
        moves: Vec<usize>,

        /// Seed for the random fallback
        #[arg(long, default_value = "0")]
        seed: u64,
    },
}
