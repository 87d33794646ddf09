//! Core types for Wayfarer: items, characters, encounters, and the section graph.
//!
//! This crate holds the data model a game is played on. A [`World`] is an
//! arena of [`Section`]s joined by symmetric directional links; sections hold
//! [`Item`]s and [`Character`]s, and applying an item to a character yields an
//! [`EncounterResult`] whose [`Summary`] describes what changed.

/// Declarative world descriptions that build into a [`World`].
pub mod blueprint;
/// Fixed items used by the built-in character variants.
pub mod catalog;
/// Characters and their encounter behaviour.
pub mod character;
/// Commands a section offers to the player.
pub mod command;
/// Compass directions and their opposites.
pub mod direction;
/// Encounter outcomes and the deltas they carry.
pub mod encounter;
/// Error types used throughout the crate.
pub mod error;
/// Items the player can carry.
pub mod item;
/// Sections, the nodes of the world graph.
pub mod section;
/// The arena that owns every section.
pub mod world;

/// Re-export blueprint types.
pub use blueprint::Blueprint;
/// Re-export character types.
pub use character::{Character, CharacterId, Kind};
/// Re-export command types.
pub use command::{Action, Command};
/// Re-export direction.
pub use direction::Direction;
/// Re-export encounter types.
pub use encounter::{EncounterResult, Summary, Transaction};
/// Re-export error types.
pub use error::{WorldError, WorldResult};
/// Re-export item.
pub use item::Item;
/// Re-export section types.
pub use section::{Section, SectionId};
/// Re-export world.
pub use world::World;
