//! Alternating marks invariant: history reads X, O, X, O, ...

use super::super::{GameEngine, Player, Square};
use super::Invariant;

/// Invariant: the n-th history entry holds X for even n and O for odd n,
/// and while the game is on, the mark to move continues the pattern.
pub struct AlternatingMarksInvariant;

impl Invariant<GameEngine> for AlternatingMarksInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let expected = |n: usize| if n % 2 == 0 { Player::X } else { Player::O };

        let alternates = engine
            .history()
            .iter()
            .enumerate()
            .all(|(n, pos)| engine.board().get(*pos) == Square::Occupied(expected(n)));

        let history_len = engine.history().len();
        let turn_ok = if engine.is_over() {
            // Frozen on whoever moved last.
            history_len > 0 && engine.current_turn() == expected(history_len - 1)
        } else {
            engine.current_turn() == expected(history_len)
        };

        alternates && turn_ok
    }

    fn description() -> &'static str {
        "Marks alternate X, O, X, O, ..."
    }
}
