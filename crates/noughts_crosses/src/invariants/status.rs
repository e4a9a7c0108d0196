//! Status invariant: the recorded status agrees with the board.

use super::super::rules::{has_line, is_full};
use super::super::{GameState, GameStatus, Player};
use super::Invariant;

/// Invariant: `Won(p)` iff only `p` holds a line, `Draw` iff the board is
/// full without a line, `InProgress` otherwise.
pub struct StatusInvariant;

impl Invariant<GameState> for StatusInvariant {
    fn holds(state: &GameState) -> bool {
        let board = state.board();
        let noughts = has_line(board, Player::Nought);
        let crosses = has_line(board, Player::Cross);

        match state.status() {
            GameStatus::Won(player) => {
                has_line(board, player) && !has_line(board, player.opponent())
            }
            GameStatus::Draw => is_full(board) && !noughts && !crosses,
            GameStatus::InProgress => !is_full(board) && !noughts && !crosses,
        }
    }

    fn description() -> &'static str {
        "Status agrees with lines and fullness of the board"
    }
}
