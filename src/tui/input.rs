//! Parsing of typed commands.

use crate::games::tictactoe::{GameMode, Position};
use derive_more::Display;
use tracing::instrument;

/// A command typed at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Place the current mark.
    Place(Position),
    /// Start over in the current mode.
    Reset,
    /// Switch mode (restarts the game).
    Mode(GameMode),
    /// Print the command list.
    Help,
    /// Leave.
    Quit,
}

/// A line that is not a command.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum InputError {
    /// Nothing was typed.
    #[display("Type a square (1-9) or 'help'")]
    Empty,
    /// `mode` with an unknown argument.
    #[display("Unknown mode '{}' (use 'human' or 'computer')", _0)]
    UnknownMode(String),
    /// Anything else.
    #[display("Unrecognized input '{}'", _0)]
    Unrecognized(String),
}

impl std::error::Error for InputError {}

/// Text printed for `help`.
pub const HELP: &str = "\
Commands:
  1-9 or a label (e.g. 'center', 'top-left')  place your mark
  reset                                       start over
  mode human | mode computer                  switch mode and start over
  help                                        show this list
  quit                                        leave";

/// Parses one input line.
#[instrument]
pub fn parse_command(line: &str) -> Result<Command, InputError> {
    let line = line.trim();
    if line.is_empty() {
        return Err(InputError::Empty);
    }

    let lower = line.to_lowercase();
    let mut words = lower.split_whitespace();
    match (words.next(), words.next()) {
        (Some("reset" | "r"), None) => Ok(Command::Reset),
        (Some("help" | "h" | "?"), None) => Ok(Command::Help),
        (Some("quit" | "q" | "exit"), None) => Ok(Command::Quit),
        (Some("mode"), Some(arg)) => arg
            .parse::<GameMode>()
            .map(Command::Mode)
            .map_err(|_| InputError::UnknownMode(arg.to_string())),
        _ => Position::parse(line)
            .map(Command::Place)
            .ok_or_else(|| InputError::Unrecognized(line.to_string())),
    }
}
