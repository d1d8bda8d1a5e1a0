//! Move outcomes and rejections.
//!
//! Rejections are routine in play (a click on a taken square, a click
//! after the game ended). Callers can surface them or ignore them; the
//! engine state is unchanged either way.

use super::{GameStatus, Position, WinLine};
use serde::{Deserialize, Serialize};

/// Result of an accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct MoveOutcome {
    /// Status after the move.
    pub status: GameStatus,
    /// The completed line, when the move won the game.
    pub win_line: Option<WinLine>,
}

/// Reasons a move is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The index is outside 0-8.
    #[display("Index {} is off the board (must be 0-8)", _0)]
    InvalidIndex(usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    CellOccupied(Position),

    /// The game has already been won or drawn.
    #[display("Game is not in progress")]
    GameNotInProgress,
}

impl std::error::Error for MoveError {}
