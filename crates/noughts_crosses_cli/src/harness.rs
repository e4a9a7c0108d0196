//! Line-oriented play harness and move replay.
//!
//! The harness reads one command per line, so it works the same against a
//! terminal or a scripted input stream.

use crate::config::AppConfig;
use crate::render::{board_text, headline, turn_line};
use derive_more::{Display, Error};
use noughts_crosses::{GameEngine, GameState, InvalidMove, Position, place_mark, reset};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument, warn};

/// A parsed line of harness input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HarnessCommand {
    /// Place at a raw index; range is checked by the engine.
    Place(usize),
    /// Start a new game.
    NewGame,
    /// Show the command summary.
    Help,
    /// Leave the harness.
    Quit,
    /// Blank line.
    Nothing,
    /// Anything else.
    Unknown(String),
}

impl HarnessCommand {
    /// Parses a line: an index, a position label, or a command word.
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return Self::Nothing;
        }
        if let Ok(index) = line.parse::<usize>() {
            return Self::Place(index);
        }
        match line.to_lowercase().as_str() {
            "new" | "reset" | "n" => Self::NewGame,
            "help" | "?" | "h" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            _ => match Position::from_label_or_number(line) {
                Some(pos) => Self::Place(pos.to_index()),
                None => Self::Unknown(line.to_string()),
            },
        }
    }
}

const HELP: &str = "Enter a square 0-8 (or a label such as \"center\"), \
'new' for a new game, 'quit' to exit.";

fn write_state<W: Write>(output: &mut W, state: &GameState, config: &AppConfig) -> std::io::Result<()> {
    writeln!(output)?;
    writeln!(output, "{}", board_text(state.board(), config))?;
    writeln!(output)?;
    writeln!(output, "{}", headline(state, config))?;
    match turn_line(state) {
        Some(line) => writeln!(output, "{}", line),
        None => writeln!(output, "Type 'new' for a new game or 'quit' to exit."),
    }
}

/// Runs the interactive harness until `quit` or end of input.
///
/// Rejected moves are reported and the player is prompted again.
#[instrument(skip_all)]
pub fn run<R: BufRead, W: Write>(input: R, mut output: W, config: &AppConfig) -> anyhow::Result<()> {
    info!("Starting play harness");
    let mut engine = GameEngine::new();
    writeln!(output, "{}", HELP)?;
    write_state(&mut output, engine.state(), config)?;

    for line in input.lines() {
        let line = line?;
        match HarnessCommand::parse(&line) {
            HarnessCommand::Place(index) => match engine.place_mark(index) {
                Ok(state) => write_state(&mut output, state, config)?,
                Err(e) => {
                    debug!(index, error = %e, "Move rejected");
                    writeln!(output, "Invalid move: {}", e)?;
                }
            },
            HarnessCommand::NewGame => {
                let state = engine.reset();
                write_state(&mut output, state, config)?;
            }
            HarnessCommand::Help => writeln!(output, "{}", HELP)?,
            HarnessCommand::Quit => break,
            HarnessCommand::Nothing => {}
            HarnessCommand::Unknown(text) => {
                writeln!(output, "Unrecognized input: {}", text)?;
            }
        }
        output.flush()?;
    }

    info!("Play harness finished");
    Ok(())
}

/// A replayed move that the engine rejected.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Move {} (square {}) rejected: {}", move_number, index, source)]
pub struct ReplayError {
    /// 1-based position of the move in the replay.
    pub move_number: usize,
    /// Requested square.
    pub index: usize,
    /// Why the engine refused it.
    pub source: InvalidMove,
}

/// Applies `moves` in order to a fresh game.
#[instrument]
pub fn replay(moves: &[usize]) -> Result<GameState, ReplayError> {
    moves
        .iter()
        .enumerate()
        .try_fold(reset(), |state, (i, &index)| {
            place_mark(&state, index).map_err(|source| {
                warn!(move_number = i + 1, index, error = %source, "Replay stopped");
                ReplayError {
                    move_number: i + 1,
                    index,
                    source,
                }
            })
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use noughts_crosses::{GameStatus, Player};

    #[test]
    fn test_parse_commands() {
        assert_eq!(HarnessCommand::parse("4"), HarnessCommand::Place(4));
        assert_eq!(HarnessCommand::parse(" 9 "), HarnessCommand::Place(9));
        assert_eq!(HarnessCommand::parse("Center"), HarnessCommand::Place(4));
        assert_eq!(HarnessCommand::parse("NEW"), HarnessCommand::NewGame);
        assert_eq!(HarnessCommand::parse("q"), HarnessCommand::Quit);
        assert_eq!(HarnessCommand::parse("   "), HarnessCommand::Nothing);
        assert_eq!(
            HarnessCommand::parse("middle"),
            HarnessCommand::Unknown("middle".to_string())
        );
    }

    #[test]
    fn test_replay_win() {
        let state = replay(&[0, 3, 1, 4, 2]).expect("valid replay");
        assert_eq!(state.status(), GameStatus::Won(Player::Nought));
    }

    #[test]
    fn test_replay_empty_is_fresh() {
        assert_eq!(replay(&[]), Ok(GameState::new()));
    }

    #[test]
    fn test_replay_reports_offending_move() {
        let err = replay(&[4, 4]).unwrap_err();
        assert_eq!(err.move_number, 2);
        assert_eq!(err.index, 4);
        assert_eq!(err.source, InvalidMove::SquareOccupied(Position::Center));
        assert_eq!(
            err.to_string(),
            "Move 2 (square 4) rejected: Square Center is already occupied"
        );
    }
}
