//! Strictly Heuristic - tic-tac-toe engine with a heuristic opponent
//!
//! The engine owns all game state and is driven through a small command
//! interface; presentation code holds one engine and renders what it
//! returns.
//!
//! # Architecture
//!
//! - **Engine**: [`GameEngine`] with `apply_move`, `select_computer_move`,
//!   `reset_game` and `set_mode`
//! - **Rules**: the eight win lines, win and draw detection
//! - **Heuristic**: win, then block, then a random empty square
//! - **Terminal**: a line-oriented front end with a delayed computer turn
//!
//! # Example
//!
//! ```
//! use strictly_heuristic::{GameEngine, GameMode, GameStatus, SeededSource};
//!
//! let mut engine = GameEngine::with_mode(GameMode::ComputerOpponent);
//! engine.apply_move(4).unwrap();
//!
//! let reply = engine.select_computer_move(&mut SeededSource::new(7)).unwrap();
//! let outcome = engine.place(reply).unwrap();
//! assert_eq!(outcome.status, GameStatus::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod tui;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Terminal front end
pub use tui::{
    Command, Flow, GameEvent, HELP, InputError, Orchestrator, RunOptions, draw_board, mode_text,
    parse_command, run, status_text,
};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, COMPUTER_MARK, EngineSnapshot, GameEngine, GameMode, GameStatus, IndexSource, Mark,
    MoveError, MoveOutcome, MoveReason, Player, Position, SeededSource, Square, ThreadSource,
    WIN_LINES, WinLine, heuristic, invariants, rules,
};
