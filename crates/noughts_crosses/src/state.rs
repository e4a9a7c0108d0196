//! Game state value.

use super::invariants::{GameInvariants, InvariantSet};
use super::position::Position;
use super::types::{Board, Player};
use serde::{Deserialize, Serialize};

/// Turn number reached once all nine squares are filled.
pub const FINAL_TURN: u8 = 10;

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(*player),
            GameStatus::InProgress | GameStatus::Draw => None,
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::Won(player) => write!(f, "{} wins", player),
            GameStatus::Draw => write!(f, "Draw"),
        }
    }
}

/// Complete game state.
///
/// Only [`crate::place_mark`] produces successor states; a reset replaces
/// the value wholesale. Deserialization rejects any state that fails
/// [`GameInvariants`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StateRecord")]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) current_player: Player,
    pub(crate) turn_number: u8,
    pub(crate) status: GameStatus,
}

impl GameState {
    /// Creates a fresh game: empty board, Nought to move, turn 1.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::Nought,
            turn_number: 1,
            status: GameStatus::InProgress,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move, or the player who made the final move
    /// once the game is over.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the turn number (1-10).
    pub fn turn_number(&self) -> u8 {
        self.turn_number
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns true once the game has been won or drawn.
    pub fn is_game_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// Returns the open positions, in row-major order.
    pub fn open_positions(&self) -> Vec<Position> {
        super::rules::open_positions(&self.board)
    }

    /// Places the current player's mark and advances the turn counter.
    pub(crate) fn record_placement(&mut self, pos: Position) {
        self.board.set(pos, self.current_player.into());
        self.turn_number += 1;
    }

    /// Hands the move to the other player.
    pub(crate) fn pass_turn(&mut self) {
        self.current_player = self.current_player.opponent();
    }

    pub(crate) fn set_status(&mut self, status: GameStatus) {
        self.status = status;
    }
}

/// Unchecked wire form of [`GameState`].
#[derive(Deserialize)]
struct StateRecord {
    board: Board,
    current_player: Player,
    turn_number: u8,
    status: GameStatus,
}

impl TryFrom<StateRecord> for GameState {
    type Error = String;

    fn try_from(record: StateRecord) -> Result<Self, Self::Error> {
        let state = Self {
            board: record.board,
            current_player: record.current_player,
            turn_number: record.turn_number,
            status: record.status,
        };
        GameInvariants::check_all(&state).map_err(|violations| {
            let reasons: Vec<_> = violations.into_iter().map(|v| v.description).collect();
            format!("unreachable game state: {}", reasons.join("; "))
        })?;
        Ok(state)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
