//! Terminal front ends for the noughts and crosses engine.
//!
//! Each front end is a presentation collaborator: it renders
//! [`noughts_crosses::GameState`] and dispatches moves, leaving every rule
//! to the engine.
//!
//! - **harness**: line-oriented play over any reader/writer pair, plus replay
//! - **tui**: interactive board view
//! - **config**: TOML settings shared by both

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod config;
pub mod harness;
pub mod render;
pub mod tui;

pub use config::{AppConfig, ConfigError};
pub use harness::{HarnessCommand, ReplayError, replay};
