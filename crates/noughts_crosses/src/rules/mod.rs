//! Game rules.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are separated from
//! state storage so contracts and invariants can reuse them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{has_line, winner, LINES};

use super::{Board, Position};

/// Returns the unoccupied positions in row-major order.
pub fn open_positions(board: &Board) -> Vec<Position> {
    Position::ALL
        .iter()
        .copied()
        .filter(|pos| board.is_empty(*pos))
        .collect()
}
