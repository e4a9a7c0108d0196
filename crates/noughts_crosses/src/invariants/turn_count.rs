//! Turn count invariant: the turn counter tracks occupied squares.

use super::super::GameState;
use super::Invariant;

/// Invariant: `turn_number - 1` equals the number of occupied squares.
///
/// The counter starts at 1 on an empty board and advances exactly once per
/// placement, so it never drifts from the board.
pub struct TurnCountInvariant;

impl Invariant<GameState> for TurnCountInvariant {
    fn holds(state: &GameState) -> bool {
        let turn = state.turn_number() as usize;
        turn >= 1 && turn - 1 == state.board().occupied()
    }

    fn description() -> &'static str {
        "Turn number is one more than the number of occupied squares"
    }
}
