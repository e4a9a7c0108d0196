//! Current player invariant: the player on the clock matches the board.

use super::super::{GameState, GameStatus, Player};
use super::Invariant;

/// Invariant: the current player follows from the occupied count.
///
/// While in progress, Nought is to move on an even count. Once the game is
/// over the current player is whoever made the final placement, and a
/// winner is always that player.
pub struct CurrentPlayerInvariant;

impl Invariant<GameState> for CurrentPlayerInvariant {
    fn holds(state: &GameState) -> bool {
        let even = state.board().occupied() % 2 == 0;
        let expected = match (state.status(), even) {
            (GameStatus::InProgress, true) | (GameStatus::Won(_) | GameStatus::Draw, false) => {
                Player::Nought
            }
            _ => Player::Cross,
        };

        let winner_matches = state
            .status()
            .winner()
            .is_none_or(|winner| winner == state.current_player());

        state.current_player() == expected && winner_matches
    }

    fn description() -> &'static str {
        "Current player alternates from Nought and stays on the final mover"
    }
}
