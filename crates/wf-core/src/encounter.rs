use serde::{Deserialize, Serialize};

use crate::character::Character;
use crate::item::Item;

/// A trade offered by a friend: the player hands over `exchanged_for` and
/// receives `item`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// What the player receives.
    pub item: Item,
    /// What the player gives up.
    pub exchanged_for: Item,
}

impl Transaction {
    /// Create a trade of `exchanged_for` for `item`.
    pub fn new(item: Item, exchanged_for: Item) -> Self {
        Self {
            item,
            exchanged_for,
        }
    }
}

/// Inventory and roster deltas produced by an encounter.
///
/// All four lists keep their order; they are applied as
/// set-difference-then-append.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Summary {
    /// Items to add to the player's inventory.
    pub inventory_additions: Vec<Item>,
    /// Items leaving the player's inventory.
    pub inventory_removals: Vec<Item>,
    /// Characters to add to the current section.
    pub character_additions: Vec<Character>,
    /// Characters to remove from the current section.
    pub character_removals: Vec<Character>,
}

impl Summary {
    /// Whether applying this summary changes nothing.
    pub fn is_empty(&self) -> bool {
        self.inventory_additions.is_empty()
            && self.inventory_removals.is_empty()
            && self.character_additions.is_empty()
            && self.character_removals.is_empty()
    }
}

/// The outcome of using an item on a character.
#[derive(Debug, Clone, PartialEq)]
pub enum EncounterResult {
    /// Nothing happened.
    Empty,
    /// Something happened that only needs telling.
    Annotated(String),
    /// An item changed hands.
    Transaction(Transaction),
    /// One character instance is replaced by another.
    CharacterSwap {
        /// The character leaving the roster.
        old: Character,
        /// The character taking its place.
        new: Character,
    },
}

impl EncounterResult {
    /// The deltas this outcome asks the game to apply.
    pub fn summary(&self) -> Summary {
        match self {
            Self::Empty | Self::Annotated(_) => Summary::default(),
            Self::Transaction(transaction) => Summary {
                inventory_additions: vec![transaction.item.clone()],
                inventory_removals: vec![transaction.exchanged_for.clone()],
                ..Summary::default()
            },
            Self::CharacterSwap { old, new } => Summary {
                character_additions: vec![new.clone()],
                character_removals: vec![old.clone()],
                ..Summary::default()
            },
        }
    }

    /// Text shown to the player.
    pub fn description(&self) -> String {
        match self {
            Self::Empty => "Nothing happens.".to_string(),
            Self::Annotated(message) => message.clone(),
            Self::Transaction(transaction) => format!(
                "You traded {} for {}.",
                transaction.exchanged_for.name(),
                transaction.item.name()
            ),
            Self::CharacterSwap { old, new } => format!(
                "{} is a {} now.",
                old.name(),
                new.kind().label()
            ),
        }
    }

    /// Short tag for logging.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Annotated(_) => "annotated",
            Self::Transaction(_) => "transaction",
            Self::CharacterSwap { .. } => "character swap",
        }
    }
}
