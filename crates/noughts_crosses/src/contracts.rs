//! Contract-based validation for placements.
//!
//! Contracts formalize Hoare-style reasoning, `{P} action {Q}`: the
//! precondition gates every placement, the postcondition verifies the
//! successor state in debug builds.

use super::action::InvalidMove;
use super::invariants::{GameInvariants, InvariantSet};
use super::{GameState, GameStatus, Mark, Position};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// What a satisfied precondition hands to the transition.
    type Checked;

    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<Self::Checked, InvalidMove>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), InvalidMove>;
}

// ─────────────────────────────────────────────────────────────
//  Placement Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the game must still be in progress.
pub struct GameNotOver;

impl GameNotOver {
    /// Rejects finished games.
    pub fn check(state: &GameState) -> Result<(), InvalidMove> {
        if state.status() == GameStatus::InProgress {
            Ok(())
        } else {
            Err(InvalidMove::GameOver)
        }
    }
}

/// Precondition: the index must name a square (0-8).
pub struct InRange;

impl InRange {
    /// Converts the index, rejecting anything past the last square.
    pub fn check(index: usize) -> Result<Position, InvalidMove> {
        Position::try_from(index)
    }
}

/// Precondition: the square must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects occupied squares.
    pub fn check(state: &GameState, pos: Position) -> Result<(), InvalidMove> {
        if state.board().is_empty(pos) {
            Ok(())
        } else {
            Err(InvalidMove::SquareOccupied(pos))
        }
    }
}

/// Composite precondition, checked in order: game not over, index in
/// range, square empty.
pub struct LegalPlacement;

impl LegalPlacement {
    /// Validates all preconditions, returning the target position.
    #[instrument(skip(state))]
    pub fn check(state: &GameState, index: usize) -> Result<Position, InvalidMove> {
        GameNotOver::check(state)?;
        let pos = InRange::check(index)?;
        SquareIsEmpty::check(state, pos)?;
        Ok(pos)
    }
}

// ─────────────────────────────────────────────────────────────
//  Postconditions
// ─────────────────────────────────────────────────────────────

/// Postcondition: exactly one previously empty square was filled and
/// nothing else changed.
pub struct SingleNewMark;

impl SingleNewMark {
    /// Compares boards square by square.
    pub fn holds(before: &GameState, after: &GameState) -> bool {
        let mut filled = 0;
        for (old, new) in before
            .board()
            .marks()
            .iter()
            .zip(after.board().marks().iter())
        {
            if old == new {
                continue;
            }
            if *old != Mark::Empty || *new == Mark::Empty {
                return false;
            }
            filled += 1;
        }
        filled == 1
    }
}

// ─────────────────────────────────────────────────────────────
//  Placement Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for placing a mark by raw board index.
///
/// Preconditions:
/// - Game is in progress
/// - Index is 0-8
/// - Square is empty
///
/// Postconditions:
/// - Exactly one square changed, from empty to a mark
/// - Every [`GameInvariants`] member holds
pub struct PlacementContract;

impl Contract<GameState, usize> for PlacementContract {
    type Checked = Position;

    fn pre(state: &GameState, index: &usize) -> Result<Position, InvalidMove> {
        LegalPlacement::check(state, *index)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), InvalidMove> {
        let mut descriptions = Vec::new();
        if !SingleNewMark::holds(before, after) {
            descriptions.push("exactly one empty square is filled".to_string());
        }
        if let Err(violations) = GameInvariants::check_all(after) {
            descriptions.extend(violations.into_iter().map(|v| v.description));
        }

        if descriptions.is_empty() {
            Ok(())
        } else {
            warn!(?descriptions, "Placement postcondition failed");
            Err(InvalidMove::InvariantViolation(format!(
                "Postcondition failed: {}",
                descriptions.join("; ")
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{place_mark, Player};

    #[test]
    fn test_precondition_empty_square() {
        let state = GameState::new();
        assert_eq!(PlacementContract::pre(&state, &4), Ok(Position::Center));
    }

    #[test]
    fn test_precondition_occupied_square() {
        let state = place_mark(&GameState::new(), 4).expect("legal move");
        assert_eq!(
            PlacementContract::pre(&state, &4),
            Err(InvalidMove::SquareOccupied(Position::Center))
        );
    }

    #[test]
    fn test_precondition_out_of_range() {
        let state = GameState::new();
        assert_eq!(
            PlacementContract::pre(&state, &9),
            Err(InvalidMove::OutOfRange(9))
        );
    }

    #[test]
    fn test_game_over_checked_first() {
        let mut state = GameState::new();
        for index in [0, 3, 1, 4, 2] {
            state = place_mark(&state, index).expect("legal move");
        }
        // Occupied and out-of-range targets both report the finished game.
        assert_eq!(PlacementContract::pre(&state, &0), Err(InvalidMove::GameOver));
        assert_eq!(PlacementContract::pre(&state, &42), Err(InvalidMove::GameOver));
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = GameState::new();
        let after = place_mark(&before, 4).expect("legal move");
        assert!(PlacementContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_overwrite() {
        let before = place_mark(&GameState::new(), 4).expect("legal move");
        let mut after = place_mark(&before, 0).expect("legal move");
        after.board.set(Position::Center, Player::Cross.into());

        let result = PlacementContract::post(&before, &after);
        assert!(matches!(result, Err(InvalidMove::InvariantViolation(_))));
    }

    #[test]
    fn test_postcondition_detects_no_change() {
        let before = GameState::new();
        let mut after = before.clone();
        after.turn_number += 1;
        assert!(PlacementContract::post(&before, &after).is_err());
    }
}
