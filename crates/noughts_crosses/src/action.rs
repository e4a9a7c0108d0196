//! Move rejection errors.

use super::position::Position;

/// Error returned when a placement is rejected.
///
/// The state the placement was attempted on is never modified.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum InvalidMove {
    /// The game has already been won or drawn.
    #[display("Game is already over")]
    GameOver,

    /// The requested index is outside 0-8.
    #[display("Position {} is out of range (must be 0-8)", _0)]
    OutOfRange(usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// A postcondition failed after applying the placement.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for InvalidMove {}
