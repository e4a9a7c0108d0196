//! Core domain types for noughts and crosses.

use super::position::Position;
use serde::{Deserialize, Serialize};

/// A player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Player {
    /// Noughts (goes first).
    Nought,
    /// Crosses (goes second).
    Cross,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Nought => Player::Cross,
            Player::Cross => Player::Nought,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::Nought => write!(f, "Nought"),
            Player::Cross => write!(f, "Cross"),
        }
    }
}

/// The contents of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Mark {
    /// Nobody has played here.
    #[default]
    Empty,
    /// A nought.
    Nought,
    /// A cross.
    Cross,
}

impl Mark {
    /// Returns the player owning this mark, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Mark::Empty => None,
            Mark::Nought => Some(Player::Nought),
            Mark::Cross => Some(Player::Cross),
        }
    }

    /// Returns true for [`Mark::Empty`].
    pub fn is_empty(self) -> bool {
        self == Mark::Empty
    }
}

impl From<Player> for Mark {
    fn from(player: Player) -> Self {
        match player {
            Player::Nought => Mark::Nought,
            Player::Cross => Mark::Cross,
        }
    }
}

/// 3x3 board.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    /// Marks in row-major order (0-8).
    marks: [Mark; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            marks: [Mark::Empty; 9],
        }
    }

    /// Gets the mark at the given position.
    pub fn get(&self, pos: Position) -> Mark {
        self.marks[pos.to_index()]
    }

    /// Gets the mark at a raw index, or `None` outside 0-8.
    pub fn at(&self, index: usize) -> Option<Mark> {
        self.marks.get(index).copied()
    }

    /// Checks if a position is still open.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Returns all marks in row-major order.
    pub fn marks(&self) -> &[Mark; 9] {
        &self.marks
    }

    /// Counts cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.marks.iter().filter(|m| **m == mark).count()
    }

    /// Counts cells holding either player's mark.
    pub fn occupied(&self) -> usize {
        self.marks.len() - self.count(Mark::Empty)
    }

    pub(crate) fn set(&mut self, pos: Position, mark: Mark) {
        self.marks[pos.to_index()] = mark;
    }
}
