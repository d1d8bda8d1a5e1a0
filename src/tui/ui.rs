//! Stateless text rendering for tic-tac-toe.

use crate::games::tictactoe::{EngineSnapshot, GameMode, GameStatus, Position, Square};

/// Renders the board. Empty squares show their number; winning squares
/// are bracketed.
pub fn draw_board(snapshot: &EngineSnapshot) -> String {
    let rows: Vec<String> = Position::ALL
        .chunks(3)
        .map(|row| {
            row.iter()
                .map(|pos| draw_cell(snapshot, *pos))
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect();
    rows.join("\n---+---+---\n")
}

fn draw_cell(snapshot: &EngineSnapshot, pos: Position) -> String {
    let symbol = match snapshot.board.get(pos) {
        Square::Empty => (pos.to_index() + 1).to_string(),
        Square::Occupied(p) => p.to_string(),
    };
    let winning = snapshot.win_line.is_some_and(|line| line.contains(pos));
    if winning {
        format!("[{symbol}]")
    } else {
        format!(" {symbol} ")
    }
}

/// Status line shown under the board.
pub fn status_text(snapshot: &EngineSnapshot) -> String {
    match snapshot.status {
        GameStatus::InProgress => format!("Player {}'s turn", snapshot.current_turn),
        GameStatus::Won(p) => format!("Player {p} wins!"),
        GameStatus::Draw => "Game ended in a draw!".to_string(),
    }
}

/// Human-readable mode name.
pub fn mode_text(mode: GameMode) -> &'static str {
    match mode {
        GameMode::Human => "Player vs Player",
        GameMode::ComputerOpponent => "Player vs Computer",
    }
}
