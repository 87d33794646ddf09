//! Declarative world descriptions.
//!
//! A [`Blueprint`] is plain data (usually JSON) naming sections, what lies in
//! them, and how they connect. [`Blueprint::build`] turns it into a [`World`]
//! and the ID of the starting section.

use std::collections::HashSet;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::character::Character;
use crate::direction::Direction;
use crate::encounter::Transaction;
use crate::error::{WorldError, WorldResult};
use crate::item::Item;
use crate::section::SectionId;
use crate::world::World;

/// A whole world, ready to build.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Blueprint {
    /// Name of the section the player starts in.
    pub start: String,
    /// Every section, in order.
    pub sections: Vec<SectionSpec>,
    /// Links between sections, applied in order.
    #[serde(default)]
    pub links: Vec<LinkSpec>,
}

/// One section of a blueprint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionSpec {
    /// Unique section name.
    pub name: String,
    /// Flavor text.
    #[serde(default)]
    pub description: String,
    /// Items lying in the section.
    #[serde(default)]
    pub items: Vec<Item>,
    /// Characters standing in the section.
    #[serde(default)]
    pub characters: Vec<CharacterSpec>,
}

/// A link from one named section to another.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkSpec {
    /// Section the link starts from.
    pub from: String,
    /// Direction of travel from `from`.
    pub direction: Direction,
    /// Section the link leads to.
    pub to: String,
}

/// A character entry, tagged by `kind`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CharacterSpec {
    /// See [`Character::enemy`].
    Enemy {
        /// Name.
        name: String,
        /// Description.
        #[serde(default)]
        description: String,
        /// Weaknesses.
        #[serde(default)]
        weaknesses: Vec<Item>,
    },
    /// See [`Character::zombie`].
    Zombie {
        /// Name.
        name: String,
        /// Weaknesses.
        #[serde(default)]
        weaknesses: Vec<Item>,
    },
    /// See [`Character::dragon`].
    Dragon {
        /// Name.
        name: String,
    },
    /// See [`Character::friend`].
    Friend {
        /// Name.
        name: String,
        /// Description.
        #[serde(default)]
        description: String,
        /// Trades on offer.
        #[serde(default)]
        sells: Vec<Transaction>,
        /// Weaknesses.
        #[serde(default)]
        weaknesses: Vec<Item>,
    },
    /// See [`Character::student`].
    Student {
        /// Name.
        name: String,
    },
    /// See [`Character::teacher`].
    Teacher {
        /// Name.
        name: String,
    },
}

impl CharacterSpec {
    /// Create the character this entry describes.
    pub fn to_character(&self) -> Character {
        match self {
            Self::Enemy {
                name,
                description,
                weaknesses,
            } => Character::enemy(name, description, weaknesses.clone()),
            Self::Zombie { name, weaknesses } => Character::zombie(name, weaknesses.clone()),
            Self::Dragon { name } => Character::dragon(name),
            Self::Friend {
                name,
                description,
                sells,
                weaknesses,
            } => Character::friend(name, description, sells.clone())
                .with_weaknesses(weaknesses.clone()),
            Self::Student { name } => Character::student(name),
            Self::Teacher { name } => Character::teacher(name),
        }
    }
}

impl Blueprint {
    /// Parse a JSON blueprint.
    pub fn from_json(source: &str) -> WorldResult<Self> {
        Ok(serde_json::from_str(source)?)
    }

    /// Build the world and return it with the starting section.
    ///
    /// Links go through [`World::attach`], so every link has its reverse.
    pub fn build(&self) -> WorldResult<(World, SectionId)> {
        let mut world = World::new();
        let mut seen = HashSet::new();

        for spec in &self.sections {
            if !seen.insert(spec.name.as_str()) {
                return Err(WorldError::DuplicateSection(spec.name.clone()));
            }
            let id = world.add_section(&spec.name, &spec.description);
            let section = world.section_mut(id)?;
            for item in &spec.items {
                section.add_item(item.clone());
            }
            for character in &spec.characters {
                section.add_character(character.to_character());
            }
        }

        for link in &self.links {
            let from = resolve(&world, &link.from)?;
            let to = resolve(&world, &link.to)?;
            world.attach(from, link.direction, to)?;
        }

        let start = resolve(&world, &self.start)?;
        debug!(
            "built world with {} sections and {} links, starting in {}",
            world.len(),
            self.links.len(),
            self.start
        );
        Ok((world, start))
    }
}

fn resolve(world: &World, name: &str) -> WorldResult<SectionId> {
    world
        .find(name)
        .ok_or_else(|| WorldError::UnknownSectionName(name.to_string()))
}
