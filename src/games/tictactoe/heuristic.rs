//! Heuristic computer opponent.
//!
//! The policy is fixed and shallow: complete our own two-in-a-row, else
//! block the opponent's, else play a random empty square. It does not
//! search the game tree.

use super::rng::IndexSource;
use super::rules::WIN_LINES;
use super::{Board, Player, Position, Square};
use tracing::{debug, instrument};

/// Why the heuristic chose a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveReason {
    /// Completes the computer's own line.
    #[display("win")]
    Win,
    /// Stops the opponent from completing a line.
    #[display("block")]
    Block,
    /// No line was one move from completion.
    #[display("random")]
    Random,
}

/// Returns the empty square of the first line holding two of `player`'s
/// marks and one empty square, scanning lines in their fixed order.
#[instrument(skip(board))]
pub fn find_line_completion(board: &Board, player: Player) -> Option<Position> {
    WIN_LINES.iter().find_map(|line| {
        let squares = line.positions().map(|pos| board.get(pos));
        let owned = squares
            .iter()
            .filter(|s| **s == Square::Occupied(player))
            .count();
        let empty = squares.iter().position(|s| *s == Square::Empty);
        match (owned, empty) {
            (2, Some(i)) => Some(line.positions()[i]),
            _ => None,
        }
    })
}

/// Picks a uniformly random empty square, `None` on a full board.
#[instrument(skip(board, source))]
pub fn random_move<S: IndexSource + ?Sized>(board: &Board, source: &mut S) -> Option<Position> {
    let empty = board.empty_positions();
    if empty.is_empty() {
        return None;
    }
    Some(empty[source.pick(empty.len())])
}

/// Selects a move for `computer` on `board`, with the reason it was chosen.
///
/// Returns `None` only when the board has no empty square.
#[instrument(skip(board, source))]
pub fn select_move_with_reason<S: IndexSource + ?Sized>(
    board: &Board,
    computer: Player,
    source: &mut S,
) -> Option<(Position, MoveReason)> {
    let choice = if let Some(pos) = find_line_completion(board, computer) {
        Some((pos, MoveReason::Win))
    } else if let Some(pos) = find_line_completion(board, computer.opponent()) {
        Some((pos, MoveReason::Block))
    } else {
        random_move(board, source).map(|pos| (pos, MoveReason::Random))
    };

    if let Some((pos, reason)) = choice {
        debug!(player = %computer, position = %pos, %reason, "Heuristic chose move");
    }
    choice
}

/// Selects a move for `computer` on `board`.
pub fn select_move<S: IndexSource + ?Sized>(
    board: &Board,
    computer: Player,
    source: &mut S,
) -> Option<Position> {
    select_move_with_reason(board, computer, source).map(|(pos, _)| pos)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Always picks the last candidate.
    struct LastSource;

    impl IndexSource for LastSource {
        fn pick(&mut self, len: usize) -> usize {
            len - 1
        }
    }

    fn board_from(marks: &str) -> Board {
        let mut board = Board::new();
        for (pos, c) in Position::ALL.iter().zip(marks.chars()) {
            match c {
                'X' => board.set(*pos, Square::Occupied(Player::X)),
                'O' => board.set(*pos, Square::Occupied(Player::O)),
                _ => {}
            }
        }
        board
    }

    #[test]
    fn test_completion_needs_empty_third_square() {
        let board = board_from("XXO......");
        assert_eq!(find_line_completion(&board, Player::X), None);
    }

    #[test]
    fn test_completion_finds_gap_in_middle() {
        let board = board_from("X.X......");
        assert_eq!(find_line_completion(&board, Player::X), Some(Position::TopCenter));
    }

    #[test]
    fn test_win_before_block() {
        let board = board_from("OO.XX....");
        let choice = select_move_with_reason(&board, Player::O, &mut LastSource);
        assert_eq!(choice, Some((Position::TopRight, MoveReason::Win)));
    }

    #[test]
    fn test_block() {
        let board = board_from("XX.......");
        let choice = select_move_with_reason(&board, Player::O, &mut LastSource);
        assert_eq!(choice, Some((Position::TopRight, MoveReason::Block)));
    }

    #[test]
    fn test_random_uses_source_over_empty_squares() {
        let board = board_from("X...O....");
        let choice = select_move_with_reason(&board, Player::O, &mut LastSource);
        assert_eq!(choice, Some((Position::BottomRight, MoveReason::Random)));
    }

    #[test]
    fn test_full_board_has_no_move() {
        let board = board_from("XOXXOOOXX");
        assert_eq!(select_move(&board, Player::O, &mut LastSource), None);
    }
}
