//! Turn orchestration between the typed input and the engine.
//!
//! The orchestrator owns the one [`GameEngine`] of a session. It applies
//! human commands, plays the computer's reply after a fixed pause, and
//! reports everything that happened as [`GameEvent`]s.

use super::input::Command;
use crate::games::tictactoe::{
    GameEngine, GameMode, GameStatus, IndexSource, Mark, MoveError, Position,
};
use anyhow::Result;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

/// Messages sent from orchestrator to UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A mark was placed.
    MoveMade {
        /// Who moved.
        player: Mark,
        /// Where.
        position: Position,
    },
    /// The computer is about to move.
    ComputerThinking,
    /// A move was refused; nothing changed.
    Rejected(MoveError),
    /// The game restarted.
    Reset,
    /// The mode changed (and the game restarted).
    ModeChanged(GameMode),
    /// The game ended.
    GameOver(GameStatus),
    /// The command list was requested.
    Help,
}

/// Whether the session continues after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep reading input.
    Continue,
    /// Stop.
    Quit,
}

/// Drives one game session.
pub struct Orchestrator {
    engine: GameEngine,
    source: Box<dyn IndexSource + Send>,
    computer_delay: Duration,
    event_tx: mpsc::UnboundedSender<GameEvent>,
}

impl Orchestrator {
    /// Creates a new orchestrator.
    pub fn new(
        mode: GameMode,
        source: Box<dyn IndexSource + Send>,
        computer_delay: Duration,
        event_tx: mpsc::UnboundedSender<GameEvent>,
    ) -> Self {
        Self {
            engine: GameEngine::with_mode(mode),
            source,
            computer_delay,
            event_tx,
        }
    }

    /// The engine, for rendering.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Applies one command.
    #[instrument(skip(self))]
    pub async fn handle(&mut self, command: Command) -> Result<Flow> {
        match command {
            Command::Place(position) => {
                self.place(position)?;
            }
            Command::Reset => {
                self.engine.reset_game();
                self.event_tx.send(GameEvent::Reset)?;
            }
            Command::Mode(mode) => {
                self.engine.set_mode(mode);
                self.event_tx.send(GameEvent::ModeChanged(mode))?;
            }
            Command::Help => self.event_tx.send(GameEvent::Help)?,
            Command::Quit => {
                info!("Quit requested");
                return Ok(Flow::Quit);
            }
        }
        Ok(Flow::Continue)
    }

    /// Plays the computer's reply if it is the computer's turn.
    ///
    /// Kept apart from [`Orchestrator::handle`] so the caller can show the
    /// human's move before the delay starts.
    #[instrument(skip(self))]
    pub async fn computer_turn(&mut self) -> Result<()> {
        if !self.engine.is_computer_turn() {
            return Ok(());
        }

        self.event_tx.send(GameEvent::ComputerThinking)?;
        tokio::time::sleep(self.computer_delay).await;

        match self.engine.select_computer_move(&mut *self.source) {
            Some(position) => {
                debug!(position = %position, "Computer chose position");
                self.place(position)?;
            }
            None => warn!("Computer had no move available"),
        }
        Ok(())
    }

    /// Places the current mark and reports it. Returns whether it was accepted.
    fn place(&mut self, position: Position) -> Result<bool> {
        let player = self.engine.current_turn();
        match self.engine.place(position) {
            Ok(outcome) => {
                self.event_tx.send(GameEvent::MoveMade { player, position })?;
                if outcome.status.is_over() {
                    self.event_tx.send(GameEvent::GameOver(outcome.status))?;
                }
                Ok(true)
            }
            Err(e) => {
                debug!(error = %e, "Move rejected");
                self.event_tx.send(GameEvent::Rejected(e))?;
                Ok(false)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Player, SeededSource};

    fn orchestrator(mode: GameMode) -> (Orchestrator, mpsc::UnboundedReceiver<GameEvent>) {
        orchestrator_with_delay(mode, Duration::ZERO)
    }

    fn orchestrator_with_delay(
        mode: GameMode,
        delay: Duration,
    ) -> (Orchestrator, mpsc::UnboundedReceiver<GameEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let orch = Orchestrator::new(mode, Box::new(SeededSource::new(1)), delay, tx);
        (orch, rx)
    }

    fn drain(rx: &mut mpsc::UnboundedReceiver<GameEvent>) -> Vec<GameEvent> {
        let mut events = Vec::new();
        while let Ok(event) = rx.try_recv() {
            events.push(event);
        }
        events
    }

    #[tokio::test]
    async fn test_human_mode_does_not_answer() {
        let (mut orch, mut rx) = orchestrator(GameMode::Human);
        orch.handle(Command::Place(Position::Center)).await.unwrap();
        orch.computer_turn().await.unwrap();
        assert_eq!(
            drain(&mut rx),
            vec![GameEvent::MoveMade {
                player: Player::X,
                position: Position::Center
            }]
        );
        assert_eq!(orch.engine().current_turn(), Player::O);
    }

    #[tokio::test]
    async fn test_computer_answers_human_move() {
        let (mut orch, mut rx) = orchestrator(GameMode::ComputerOpponent);
        orch.handle(Command::Place(Position::Center)).await.unwrap();
        orch.computer_turn().await.unwrap();

        let events = drain(&mut rx);
        assert_eq!(events.len(), 3);
        assert_eq!(events[1], GameEvent::ComputerThinking);
        assert!(matches!(
            events[2],
            GameEvent::MoveMade {
                player: Player::O,
                ..
            }
        ));
        assert_eq!(orch.engine().current_turn(), Player::X);
        assert_eq!(orch.engine().history().len(), 2);
    }

    #[tokio::test]
    async fn test_computer_blocks() {
        let (mut orch, mut rx) = orchestrator(GameMode::ComputerOpponent);
        // X takes the top-left corner; O replies somewhere.
        orch.handle(Command::Place(Position::TopLeft)).await.unwrap();
        orch.computer_turn().await.unwrap();
        let o_first = *orch.engine().history().last().unwrap();

        // Threaten whichever top-row or left-column line O left open.
        let threat = if o_first == Position::TopCenter || o_first == Position::TopRight {
            Position::MiddleLeft
        } else {
            Position::TopCenter
        };
        let expected_block = if threat == Position::MiddleLeft {
            Position::BottomLeft
        } else {
            Position::TopRight
        };
        drain(&mut rx);

        orch.handle(Command::Place(threat)).await.unwrap();
        orch.computer_turn().await.unwrap();
        assert_eq!(orch.engine().history().last(), Some(&expected_block));
    }

    #[tokio::test(start_paused = true)]
    async fn test_human_move_visible_before_computer_delay() {
        let (mut orch, mut rx) =
            orchestrator_with_delay(GameMode::ComputerOpponent, Duration::from_secs(2));
        orch.handle(Command::Place(Position::Center)).await.unwrap();
        assert_eq!(
            drain(&mut rx),
            vec![GameEvent::MoveMade {
                player: Player::X,
                position: Position::Center
            }]
        );

        {
            let reply = orch.computer_turn();
            tokio::pin!(reply);
            let early = tokio::time::timeout(Duration::from_millis(100), &mut reply).await;
            assert!(early.is_err(), "computer answered before its delay");
            assert_eq!(drain(&mut rx), vec![GameEvent::ComputerThinking]);

            reply.await.unwrap();
        }
        assert!(matches!(
            drain(&mut rx).as_slice(),
            [GameEvent::MoveMade {
                player: Player::O,
                ..
            }]
        ));
        assert_eq!(orch.engine().history().len(), 2);
    }

    #[tokio::test]
    async fn test_rejected_move_reports_and_keeps_turn() {
        let (mut orch, mut rx) = orchestrator(GameMode::Human);
        orch.handle(Command::Place(Position::Center)).await.unwrap();
        drain(&mut rx);

        orch.handle(Command::Place(Position::Center)).await.unwrap();
        assert_eq!(
            drain(&mut rx),
            vec![GameEvent::Rejected(MoveError::CellOccupied(Position::Center))]
        );
        assert_eq!(orch.engine().current_turn(), Player::O);
    }

    #[tokio::test]
    async fn test_mode_change_resets() {
        let (mut orch, mut rx) = orchestrator(GameMode::Human);
        orch.handle(Command::Place(Position::Center)).await.unwrap();
        orch.handle(Command::Mode(GameMode::ComputerOpponent))
            .await
            .unwrap();

        assert!(orch.engine().history().is_empty());
        assert_eq!(orch.engine().mode(), GameMode::ComputerOpponent);
        assert_eq!(
            drain(&mut rx).last(),
            Some(&GameEvent::ModeChanged(GameMode::ComputerOpponent))
        );
    }

    #[tokio::test]
    async fn test_quit() {
        let (mut orch, _rx) = orchestrator(GameMode::Human);
        assert_eq!(orch.handle(Command::Quit).await.unwrap(), Flow::Quit);
        assert_eq!(orch.handle(Command::Help).await.unwrap(), Flow::Continue);
    }
}
