//! Line-oriented terminal front end.
//!
//! Reads commands from stdin, hands them to the [`Orchestrator`], and
//! prints the board and status after each move, including before the
//! computer's delayed reply. Logs go to stderr.

mod input;
mod orchestrator;
mod ui;

pub use input::{Command, HELP, InputError, parse_command};
pub use orchestrator::{Flow, GameEvent, Orchestrator};
pub use ui::{draw_board, mode_text, status_text};

use crate::config::GameConfig;
use crate::games::tictactoe::{IndexSource, SeededSource, ThreadSource};
use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{info, instrument};

/// Output options for [`run`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Print a JSON snapshot of the engine after each command.
    pub json: bool,
}

/// Runs an interactive session until `quit` or end of input.
#[instrument(skip(config))]
pub async fn run(config: GameConfig, options: RunOptions) -> Result<()> {
    info!(mode = %config.mode(), seed = ?config.seed(), "Starting session");

    let source: Box<dyn IndexSource + Send> = match config.seed() {
        Some(seed) => Box::new(SeededSource::new(*seed)),
        None => Box::new(ThreadSource),
    };

    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let mut orchestrator =
        Orchestrator::new(*config.mode(), source, config.computer_delay(), event_tx);

    println!("Tic-tac-toe ({})", mode_text(orchestrator.engine().mode()));
    println!("{HELP}\n");
    render(&orchestrator, options)?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("Failed to read input")? {
        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(e) => {
                println!("{e}");
                continue;
            }
        };

        let flow = orchestrator.handle(command).await?;
        drain_events(&mut event_rx);
        if flow == Flow::Quit {
            break;
        }
        render(&orchestrator, options)?;

        if orchestrator.engine().is_computer_turn() {
            orchestrator.computer_turn().await?;
            drain_events(&mut event_rx);
            render(&orchestrator, options)?;
        }
    }

    info!("Session ended");
    Ok(())
}

fn render(orchestrator: &Orchestrator, options: RunOptions) -> Result<()> {
    let snapshot = orchestrator.engine().snapshot();
    println!("{}\n", draw_board(&snapshot));
    println!("{}", status_text(&snapshot));
    if options.json {
        let json = serde_json::to_string(&snapshot).context("Failed to serialize snapshot")?;
        println!("{json}");
    }
    Ok(())
}

fn drain_events(event_rx: &mut mpsc::UnboundedReceiver<GameEvent>) {
    while let Ok(event) = event_rx.try_recv() {
        print_event(&event);
    }
}

fn print_event(event: &GameEvent) {
    match event {
        GameEvent::MoveMade { player, position } => println!("{player} -> {position}"),
        GameEvent::ComputerThinking => println!("Computer is thinking..."),
        GameEvent::Rejected(e) => println!("{e}"),
        GameEvent::Reset => println!("New game"),
        GameEvent::ModeChanged(mode) => println!("New game ({})", mode_text(*mode)),
        GameEvent::GameOver(_) => {}
        GameEvent::Help => println!("{HELP}"),
    }
}
