//! Noughts and crosses game engine.
//!
//! A presentation-free engine for two-player noughts and crosses. The whole
//! game lives in one [`GameState`] value; [`place_mark`] is the only
//! transition and [`reset`] starts over.
//!
//! # Example
//!
//! ```
//! use noughts_crosses::{place_mark, reset, GameStatus, Player};
//!
//! let mut state = reset();
//! for index in [0, 3, 1, 4, 2] {
//!     state = place_mark(&state, index)?;
//! }
//! assert_eq!(state.status(), GameStatus::Won(Player::Nought));
//! # Ok::<(), noughts_crosses::InvalidMove>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod engine;
mod position;
mod shared;
mod state;
mod types;

// Public modules
pub mod contracts;
pub mod invariants;
pub mod rules;

// Crate-level exports - Core types
pub use position::Position;
pub use state::{GameState, GameStatus, FINAL_TURN};
pub use types::{Board, Mark, Player};

// Crate-level exports - Errors
pub use action::InvalidMove;

// Crate-level exports - Transitions
pub use engine::{is_game_over, place_mark, reset, GameEngine};
pub use shared::SharedGame;

// Crate-level exports - Contracts and invariants
pub use contracts::{Contract, PlacementContract};
pub use invariants::{GameInvariants, Invariant, InvariantSet, InvariantViolation};
