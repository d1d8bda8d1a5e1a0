//! Game engine for tic-tac-toe.
//!
//! [`GameEngine`] is the single owner of the board, the turn marker, the
//! status and the mode. Presentation code holds one engine, feeds it cell
//! indices, and renders what it returns.

use super::action::{MoveError, MoveOutcome};
use super::heuristic;
use super::invariants::{InvariantSet, InvariantViolation, TicTacToeInvariants};
use super::rng::IndexSource;
use super::rules::{self, WinLine};
use super::{Board, GameStatus, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument};

/// The mark played by the computer opponent.
pub const COMPUTER_MARK: Player = Player::O;

/// Who plays O.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::EnumString,
    strum::Display,
)]
pub enum GameMode {
    /// Two humans share the board.
    #[default]
    #[serde(rename = "human")]
    #[strum(to_string = "human")]
    Human,
    /// A human plays X against the heuristic computer as O.
    #[serde(rename = "computer")]
    #[strum(to_string = "computer")]
    ComputerOpponent,
}

/// Serializable view of the engine's observable state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    /// The board.
    pub board: Board,
    /// Mark to move next (frozen once the game ends).
    pub current_turn: Player,
    /// Game status.
    pub status: GameStatus,
    /// Current mode.
    pub mode: GameMode,
    /// Winning line, if the game was won.
    pub win_line: Option<WinLine>,
}

/// Tic-tac-toe game engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    board: Board,
    current_turn: Player,
    status: GameStatus,
    mode: GameMode,
    win_line: Option<WinLine>,
    history: Vec<Position>,
}

impl GameEngine {
    /// Creates a new game: empty board, X to move, two-human mode.
    #[instrument]
    pub fn new() -> Self {
        Self::with_mode(GameMode::default())
    }

    /// Creates a new game in the given mode.
    #[instrument]
    pub fn with_mode(mode: GameMode) -> Self {
        Self {
            board: Board::new(),
            current_turn: Player::X,
            status: GameStatus::InProgress,
            mode,
            win_line: None,
            history: Vec::new(),
        }
    }

    /// Plays the given indices in order from a fresh game.
    #[instrument]
    pub fn replay(indices: &[usize]) -> Result<Self, MoveError> {
        let mut engine = Self::new();
        for &index in indices {
            engine.apply_move(index)?;
        }
        Ok(engine)
    }

    /// Places the current player's mark at `index` (0-8).
    ///
    /// # Errors
    ///
    /// Rejected moves leave the engine untouched:
    /// - [`MoveError::GameNotInProgress`] once the game is won or drawn
    /// - [`MoveError::InvalidIndex`] for indices outside 0-8
    /// - [`MoveError::CellOccupied`] if the square is taken
    #[instrument(skip(self), fields(player = %self.current_turn))]
    pub fn apply_move(&mut self, index: usize) -> Result<MoveOutcome, MoveError> {
        if self.status.is_over() {
            debug!("Rejected move: game is over");
            return Err(MoveError::GameNotInProgress);
        }

        let pos = Position::from_index(index).ok_or_else(|| {
            debug!("Rejected move: index off the board");
            MoveError::InvalidIndex(index)
        })?;

        if !self.board.is_empty(pos) {
            debug!(position = %pos, "Rejected move: square occupied");
            return Err(MoveError::CellOccupied(pos));
        }

        self.board.set(pos, Square::Occupied(self.current_turn));
        self.history.push(pos);
        debug!(position = %pos, "Mark placed");

        self.evaluate_result();
        self.verify_invariants();

        Ok(MoveOutcome::new(self.status, self.win_line))
    }

    /// Places the current player's mark at `pos`.
    pub fn place(&mut self, pos: Position) -> Result<MoveOutcome, MoveError> {
        self.apply_move(pos.to_index())
    }

    /// Updates status after a move and passes the turn if play continues.
    fn evaluate_result(&mut self) {
        if let Some((_, line)) = rules::winning_line(&self.board) {
            self.status = GameStatus::Won(self.current_turn);
            self.win_line = Some(line);
            info!(winner = %self.current_turn, line = ?line.indices(), "Game won");
        } else if rules::is_full(&self.board) {
            self.status = GameStatus::Draw;
            info!("Game drawn");
        } else {
            self.current_turn = self.current_turn.opponent();
        }
    }

    fn verify_invariants(&self) {
        if let Err(violations) = self.check_invariants() {
            for v in &violations {
                error!(invariant = %v.description, "Invariant violated");
            }
            debug_assert!(violations.is_empty(), "invariants violated: {violations:?}");
        }
    }

    /// Checks every board invariant against the current state.
    pub fn check_invariants(&self) -> Result<(), Vec<InvariantViolation>> {
        TicTacToeInvariants::check_all(self)
    }

    /// Chooses the computer's next square with the win, block, random policy.
    ///
    /// Returns `None` when the game is over.
    #[instrument(skip(self, source))]
    pub fn select_computer_move<S: IndexSource + ?Sized>(&self, source: &mut S) -> Option<Position> {
        if self.status.is_over() {
            return None;
        }
        heuristic::select_move(&self.board, COMPUTER_MARK, source)
    }

    /// Restarts the game. The mode is kept.
    #[instrument(skip(self))]
    pub fn reset_game(&mut self) {
        info!(mode = %self.mode, "Resetting game");
        *self = Self::with_mode(self.mode);
    }

    /// Switches mode. Always restarts the game.
    #[instrument(skip(self))]
    pub fn set_mode(&mut self, mode: GameMode) {
        self.mode = mode;
        self.reset_game();
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark to move. Frozen on the final mover once the game ends.
    pub fn current_turn(&self) -> Player {
        self.current_turn
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the current mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Returns the winning line, if the game was won.
    pub fn win_line(&self) -> Option<WinLine> {
        self.win_line
    }

    /// Returns the positions played, in order.
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// True once the game has been won or drawn.
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// The computer's mark in computer mode, `None` with two humans.
    pub fn computer_mark(&self) -> Option<Player> {
        match self.mode {
            GameMode::Human => None,
            GameMode::ComputerOpponent => Some(COMPUTER_MARK),
        }
    }

    /// Whether the scheduler should play the computer's move now.
    pub fn is_computer_turn(&self) -> bool {
        !self.is_over() && self.computer_mark() == Some(self.current_turn)
    }

    /// Copies the observable state.
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            board: self.board.clone(),
            current_turn: self.current_turn,
            status: self.status,
            mode: self.mode,
            win_line: self.win_line,
        }
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::rng::SeededSource;

    #[test]
    fn test_new_game() {
        let engine = GameEngine::new();
        assert_eq!(engine.status(), GameStatus::InProgress);
        assert_eq!(engine.current_turn(), Player::X);
        assert_eq!(engine.mode(), GameMode::Human);
        assert!(engine.history().is_empty());
    }

    #[test]
    fn test_rejection_order_prefers_game_over() {
        // X wins on the top row; afterwards even bad indices report game over.
        let mut engine = GameEngine::replay(&[0, 3, 1, 4, 2]).unwrap();
        assert_eq!(engine.apply_move(42), Err(MoveError::GameNotInProgress));
        assert_eq!(engine.apply_move(0), Err(MoveError::GameNotInProgress));
    }

    #[test]
    fn test_turn_frozen_after_win() {
        let engine = GameEngine::replay(&[0, 3, 1, 4, 2]).unwrap();
        assert_eq!(engine.status(), GameStatus::Won(Player::X));
        assert_eq!(engine.current_turn(), Player::X);
        assert_eq!(engine.win_line().map(|l| l.indices()), Some([0, 1, 2]));
    }

    #[test]
    fn test_mode_parses_from_config_names() {
        assert_eq!("human".parse::<GameMode>().unwrap(), GameMode::Human);
        assert_eq!(
            "computer".parse::<GameMode>().unwrap(),
            GameMode::ComputerOpponent
        );
        assert!("robot".parse::<GameMode>().is_err());
        assert_eq!(GameMode::ComputerOpponent.to_string(), "computer");
    }

    #[test]
    fn test_computer_turn_only_in_computer_mode() {
        let mut engine = GameEngine::new();
        engine.apply_move(4).unwrap();
        assert!(!engine.is_computer_turn());

        engine.set_mode(GameMode::ComputerOpponent);
        assert!(!engine.is_computer_turn());
        engine.apply_move(4).unwrap();
        assert!(engine.is_computer_turn());
    }

    #[test]
    fn test_select_computer_move_none_when_over() {
        let engine = GameEngine::replay(&[0, 3, 1, 4, 2]).unwrap();
        assert_eq!(engine.select_computer_move(&mut SeededSource::new(1)), None);
    }

    #[test]
    fn test_corrupted_board_detected() {
        let mut engine = GameEngine::replay(&[4]).unwrap();
        engine
            .board_mut()
            .set(Position::TopLeft, Square::Occupied(Player::X));
        assert!(engine.check_invariants().is_err());
    }
}
