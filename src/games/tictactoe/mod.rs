//! Tic-tac-toe: engine, rules and the heuristic computer opponent.

mod action;
mod engine;
pub mod heuristic;
pub mod invariants;
mod position;
pub mod rng;
pub mod rules;
mod types;

pub use action::{MoveError, MoveOutcome};
pub use engine::{COMPUTER_MARK, EngineSnapshot, GameEngine, GameMode};
pub use heuristic::MoveReason;
pub use position::Position;
pub use rng::{IndexSource, SeededSource, ThreadSource};
pub use rules::{WIN_LINES, WinLine};
pub use types::{Board, GameStatus, Player, Square};

/// Alias for clarity at the presentation layer.
pub type Mark = Player;
