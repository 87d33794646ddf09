//! Error types for the engine.

use thiserror::Error;
use wf_core::WorldError;

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;

/// Errors that can occur while playing.
///
/// The first four are refusals: the turn ends, nothing changes, and the
/// message is shown to the player as is.
#[derive(Debug, Error)]
pub enum GameError {
    /// Input matched none of the current section's commands.
    #[error("No such command")]
    NoSuchCommand,

    /// No link in the requested direction.
    #[error("You cannot go that way.")]
    CannotGoThatWay,

    /// No character by that name is here.
    #[error("No such character")]
    NoSuchCharacter,

    /// No item by that name is here.
    #[error("No such item")]
    NoSuchItem,

    /// The world could not be addressed.
    #[error("world error: {0}")]
    World(#[from] WorldError),

    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl GameError {
    /// Whether this error only ends the turn rather than the game.
    pub fn is_refusal(&self) -> bool {
        matches!(
            self,
            Self::NoSuchCommand | Self::CannotGoThatWay | Self::NoSuchCharacter | Self::NoSuchItem
        )
    }
}
