//! Shared game handle for concurrent callers.

use super::{engine, GameState, InvalidMove};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, instrument};

/// A single game shared between callers.
///
/// Clones refer to the same game. Every placement runs under one lock, so
/// concurrent moves are applied one at a time against the latest state.
#[derive(Debug, Clone, Default)]
pub struct SharedGame {
    state: Arc<Mutex<GameState>>,
}

impl SharedGame {
    /// Creates a handle to a fresh game.
    pub fn new() -> Self {
        Self::default()
    }

    // The state is only ever replaced whole, so a poisoned lock still
    // guards a consistent value.
    fn lock(&self) -> MutexGuard<'_, GameState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Places the current player's mark, returning the new state.
    #[instrument(skip(self))]
    pub fn place_mark(&self, index: usize) -> Result<GameState, InvalidMove> {
        let mut guard = self.lock();
        let next = engine::place_mark(&guard, index)?;
        *guard = next.clone();
        Ok(next)
    }

    /// Replaces the game with a fresh one.
    #[instrument(skip(self))]
    pub fn reset(&self) -> GameState {
        let mut guard = self.lock();
        *guard = engine::reset();
        debug!("Shared game reset");
        guard.clone()
    }

    /// Returns a copy of the current state.
    pub fn snapshot(&self) -> GameState {
        self.lock().clone()
    }

    /// Returns true once the game has been won or drawn.
    pub fn is_game_over(&self) -> bool {
        self.lock().is_game_over()
    }
}
