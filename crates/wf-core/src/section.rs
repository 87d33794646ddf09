use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::character::Character;
use crate::command::Command;
use crate::direction::Direction;
use crate::item::Item;

/// Stable index of a section inside its [`World`](crate::World).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SectionId(pub usize);

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A location in the world graph.
///
/// A section owns the items lying in it and the characters standing in it.
/// Links are stored as section IDs; the owning world keeps them symmetric.
#[derive(Debug, Clone)]
pub struct Section {
    id: SectionId,
    name: String,
    description: String,
    links: BTreeMap<Direction, SectionId>,
    items: Vec<Item>,
    characters: Vec<Character>,
}

impl Section {
    pub(crate) fn new(
        id: SectionId,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            links: BTreeMap::new(),
            items: Vec::new(),
            characters: Vec::new(),
        }
    }

    /// This section's ID.
    pub fn id(&self) -> SectionId {
        self.id
    }

    /// The section's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Longer flavor text; may be empty.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The section reached by walking in `direction`, if any.
    pub fn link(&self, direction: Direction) -> Option<SectionId> {
        self.links.get(&direction).copied()
    }

    /// All outgoing links in compass order.
    pub fn links(&self) -> impl Iterator<Item = (Direction, SectionId)> + '_ {
        self.links.iter().map(|(direction, id)| (*direction, *id))
    }

    pub(crate) fn set_link(&mut self, direction: Direction, other: SectionId) {
        self.links.insert(direction, other);
    }

    /// Items lying here, in placement order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Every character on the roster, including dead ones not yet removed.
    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    /// Place an item here.
    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Place a character here.
    pub fn add_character(&mut self, character: Character) {
        self.characters.push(character);
    }

    /// Replace the whole roster.
    pub fn set_characters(&mut self, characters: Vec<Character>) {
        self.characters = characters;
    }

    /// First item named `name`.
    pub fn item(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.name() == name)
    }

    /// Remove and return the first item named `name`.
    pub fn take_item(&mut self, name: &str) -> Option<Item> {
        let pos = self.items.iter().position(|item| item.name() == name)?;
        Some(self.items.remove(pos))
    }

    /// First character named `name` that still takes part in encounters.
    pub fn character(&self, name: &str) -> Option<&Character> {
        self.characters
            .iter()
            .find(|character| character.in_game() && character.name() == name)
    }

    /// Mutable form of [`Section::character`].
    pub fn character_mut(&mut self, name: &str) -> Option<&mut Character> {
        self.characters
            .iter_mut()
            .find(|character| character.in_game() && character.name() == name)
    }

    /// Commands available here, rebuilt on every call: one per link, then
    /// the interactions.
    pub fn actions(&self) -> Vec<Command> {
        self.links
            .keys()
            .map(|direction| Command::movement(*direction))
            .chain(Command::interactions())
            .collect()
    }

    /// One-line summary: the name, then what is here.
    pub fn describe(&self) -> String {
        let present: Vec<&str> = self
            .items
            .iter()
            .map(Item::name)
            .chain(
                self.characters
                    .iter()
                    .filter(|character| character.in_game())
                    .map(Character::name),
            )
            .collect();

        if present.is_empty() {
            self.name.clone()
        } else {
            format!("{} - {}", self.name, present.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::Action;

    fn hall() -> Section {
        Section::new(SectionId(0), "Hall", "A long hall.")
    }

    #[test]
    fn describe_empty_section_is_just_the_name() {
        assert_eq!(hall().describe(), "Hall");
    }

    #[test]
    fn describe_lists_items_then_characters() {
        let mut section = hall();
        section.add_item(Item::new("Key", "", ""));
        section.add_character(Character::student("Amy"));
        section.add_item(Item::new("Map", "", ""));
        assert_eq!(section.describe(), "Hall - Key, Map, Amy");
    }

    #[test]
    fn describe_skips_the_dead() {
        let mut section = hall();
        let mut jack = Character::enemy("Jack", "", vec![Item::new("Knife", "", "")]);
        jack.encounter(&Item::new("Knife", "", ""));
        section.add_character(jack);
        assert_eq!(section.describe(), "Hall");
    }

    #[test]
    fn take_item_removes_first_match() {
        let mut section = hall();
        section.add_item(Item::new("Key", "brass", ""));
        section.add_item(Item::new("Key", "iron", ""));

        let taken = section.take_item("Key").unwrap();
        assert_eq!(taken.description(), "brass");
        assert_eq!(section.items().len(), 1);
        assert!(section.take_item("Lamp").is_none());
    }

    #[test]
    fn lookups_report_absence() {
        let section = hall();
        assert!(section.item("Key").is_none());
        assert!(section.character("Jack").is_none());
    }

    #[test]
    fn actions_list_links_first() {
        let mut section = hall();
        section.set_link(Direction::West, SectionId(2));
        section.set_link(Direction::North, SectionId(1));

        let names: Vec<String> = section.actions().into_iter().map(|c| c.name).collect();
        assert_eq!(
            names,
            vec!["north", "west", "talk", "take", "use", "look", "inventory"]
        );
        assert_eq!(
            section.actions()[0].action,
            Action::Move(Direction::North)
        );
    }
}
