//! First-class invariants for noughts and crosses.
//!
//! Invariants are logical properties of a [`GameState`](crate::GameState)
//! that every reachable state satisfies. They are checked after each
//! placement in debug builds and can be tested independently.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of up to four invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);

pub mod balanced_marks;
pub mod current_player;
pub mod status;
pub mod turn_count;

pub use balanced_marks::BalancedMarksInvariant;
pub use current_player::CurrentPlayerInvariant;
pub use status::StatusInvariant;
pub use turn_count::TurnCountInvariant;

/// All game invariants as a composable set.
pub type GameInvariants = (
    TurnCountInvariant,
    BalancedMarksInvariant,
    CurrentPlayerInvariant,
    StatusInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{place_mark, GameState, Mark, Position};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        assert!(GameInvariants::check_all(&GameState::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let mut state = GameState::new();
        for index in [4, 0, 8] {
            state = place_mark(&state, index).expect("legal move");
        }
        assert!(GameInvariants::check_all(&state).is_ok());
    }

    #[test]
    fn test_invariant_set_collects_every_violation() {
        let mut state = GameState::new();
        // A stray cross with no turn recorded breaks three properties at once.
        state.board.set(Position::TopLeft, Mark::Cross);

        let violations = GameInvariants::check_all(&state).unwrap_err();
        assert_eq!(violations.len(), 3);
        assert!(
            violations
                .iter()
                .any(|v| v.description == TurnCountInvariant::description())
        );
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (TurnCountInvariant, StatusInvariant);
        assert!(TwoInvariants::check_all(&GameState::new()).is_ok());
    }
}
