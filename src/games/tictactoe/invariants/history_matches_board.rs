//! History consistency invariant: every played square is in history once.

use super::super::{GameEngine, Square};
use super::Invariant;

/// Invariant: history has no repeats, each entry is occupied, and the
/// number of occupied squares equals the history length.
pub struct HistoryMatchesBoardInvariant;

impl Invariant<GameEngine> for HistoryMatchesBoardInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let history = engine.history();
        let board = engine.board();

        let occupied = board
            .squares()
            .iter()
            .filter(|s| **s != Square::Empty)
            .count();
        if occupied != history.len() {
            return false;
        }

        history.iter().enumerate().all(|(i, pos)| {
            !board.is_empty(*pos) && !history[..i].contains(pos)
        })
    }

    fn description() -> &'static str {
        "History matches the occupied squares"
    }
}
