//! Balanced marks invariant: noughts lead crosses by at most one.

use super::super::{GameState, Mark};
use super::Invariant;

/// Invariant: noughts minus crosses is 0 or 1.
///
/// Noughts move first and players alternate, so noughts are never behind
/// and never more than one ahead.
pub struct BalancedMarksInvariant;

impl Invariant<GameState> for BalancedMarksInvariant {
    fn holds(state: &GameState) -> bool {
        let noughts = state.board().count(Mark::Nought);
        let crosses = state.board().count(Mark::Cross);
        noughts == crosses || noughts == crosses + 1
    }

    fn description() -> &'static str {
        "Noughts lead crosses by zero or one"
    }
}
