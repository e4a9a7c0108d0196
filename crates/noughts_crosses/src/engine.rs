//! Placement and reset transitions.
//!
//! [`place_mark`] is the single transition function: it takes a state by
//! reference and returns its successor, so a rejected move can never leave
//! a half-updated state behind. [`GameEngine`] owns one state for callers
//! that prefer a mutable handle.

use super::contracts::{Contract, PlacementContract};
use super::rules::has_line;
use super::state::FINAL_TURN;
use super::{GameState, GameStatus, InvalidMove};
use tracing::{debug, info, instrument, warn};

/// Places the current player's mark at `index` (0-8).
///
/// On success the returned state has the mark placed and the turn counter
/// advanced. The placing player is checked for a line first; a win keeps
/// them as current player. Otherwise the ninth placement is a draw, and
/// any other placement passes the turn.
///
/// # Errors
///
/// Returns [`InvalidMove`] if the game is over, `index` is out of range, or
/// the square is occupied. `state` is left untouched.
#[instrument(skip(state), fields(turn = state.turn_number(), player = %state.current_player()))]
pub fn place_mark(state: &GameState, index: usize) -> Result<GameState, InvalidMove> {
    let pos = PlacementContract::pre(state, &index).inspect_err(|e| {
        warn!(error = %e, "Placement rejected");
    })?;

    let mut next = state.clone();
    let player = next.current_player();
    next.record_placement(pos);
    debug!(%pos, turn = next.turn_number(), "Mark placed");

    if has_line(next.board(), player) {
        info!(%player, "Game won");
        next.set_status(GameStatus::Won(player));
    } else if next.turn_number() == FINAL_TURN {
        info!("Game drawn");
        next.set_status(GameStatus::Draw);
    } else {
        next.pass_turn();
        debug!(next_player = %next.current_player(), "Turn passed");
    }

    #[cfg(debug_assertions)]
    PlacementContract::post(state, &next)?;

    Ok(next)
}

/// Returns a freshly initialized game.
#[instrument]
pub fn reset() -> GameState {
    debug!("New game");
    GameState::new()
}

/// Returns true once the game has been won or drawn.
pub fn is_game_over(state: &GameState) -> bool {
    state.is_game_over()
}

/// Owns a single game and applies transitions in place.
#[derive(Debug, Clone, Default)]
pub struct GameEngine {
    state: GameState,
}

impl GameEngine {
    /// Creates an engine holding a fresh game.
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
        }
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Places the current player's mark; the state is replaced only on success.
    pub fn place_mark(&mut self, index: usize) -> Result<&GameState, InvalidMove> {
        self.state = place_mark(&self.state, index)?;
        Ok(&self.state)
    }

    /// Discards the current game and starts a new one.
    pub fn reset(&mut self) -> &GameState {
        self.state = reset();
        &self.state
    }

    /// Returns true once the game has been won or drawn.
    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }
}
