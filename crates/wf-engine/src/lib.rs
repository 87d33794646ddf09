//! Turn loop and command dispatch for Wayfarer.
//!
//! A [`Game`] owns a [`wf_core::World`], the player's position and inventory.
//! Each turn it shows the current section and its commands, reads one line,
//! matches it against the section's commands by prefix, and applies whatever
//! the command or the resulting encounter changed.

/// Game configuration.
pub mod config;
/// Error types for the engine.
pub mod error;
/// The game state machine.
pub mod game;
/// Matching player input against commands.
pub mod parser;

pub use config::GameConfig;
pub use error::{GameError, GameResult};
pub use game::{Game, GameStats};
pub use parser::{match_command, split_use_argument};
