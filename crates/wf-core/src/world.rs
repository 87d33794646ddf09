use std::ops::{Index, IndexMut};

use log::debug;

use crate::direction::Direction;
use crate::error::{WorldError, WorldResult};
use crate::section::{Section, SectionId};

/// The world graph. Owns every section; sections refer to each other by
/// [`SectionId`].
///
/// Sections are never removed, so an ID handed out by
/// [`World::add_section`] stays valid for the life of the world.
#[derive(Debug, Clone, Default)]
pub struct World {
    sections: Vec<Section>,
}

impl World {
    /// An empty world.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a section and return its ID.
    pub fn add_section(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> SectionId {
        let id = SectionId(self.sections.len());
        self.sections.push(Section::new(id, name, description));
        id
    }

    /// The section with this ID.
    pub fn section(&self, id: SectionId) -> WorldResult<&Section> {
        self.sections.get(id.0).ok_or(WorldError::UnknownSection(id))
    }

    /// Mutable form of [`World::section`].
    pub fn section_mut(&mut self, id: SectionId) -> WorldResult<&mut Section> {
        self.sections
            .get_mut(id.0)
            .ok_or(WorldError::UnknownSection(id))
    }

    /// Whether `id` belongs to this world.
    pub fn contains(&self, id: SectionId) -> bool {
        id.0 < self.sections.len()
    }

    /// ID of the first section named `name`.
    pub fn find(&self, name: &str) -> Option<SectionId> {
        self.sections
            .iter()
            .find(|section| section.name() == name)
            .map(Section::id)
    }

    /// All sections in insertion order.
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Whether the world has no sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Link `from` to `to` through `direction`, and `to` back to `from`
    /// through the opposite direction.
    ///
    /// An occupied direction is overwritten. The old neighbour keeps its link
    /// back to `from`.
    pub fn attach(
        &mut self,
        from: SectionId,
        direction: Direction,
        to: SectionId,
    ) -> WorldResult<()> {
        if !self.contains(to) {
            return Err(WorldError::UnknownSection(to));
        }
        self.section_mut(from)?.set_link(direction, to);
        self.section_mut(to)?.set_link(direction.opposite(), from);
        debug!("attached {from} {direction} to {to}");
        Ok(())
    }

    /// Multi-line rendering of a section: name, rule, description, exits,
    /// items, and characters.
    pub fn details(&self, id: SectionId) -> WorldResult<String> {
        let section = self.section(id)?;
        let mut lines = vec![section.name().to_string(), "-".repeat(20)];

        if !section.description().is_empty() {
            lines.push(section.description().to_string());
        }
        for (direction, other) in section.links() {
            lines.push(format!("The {} is {direction}.", self.section(other)?.name()));
        }
        for item in section.items() {
            lines.push(format!("The [{}] is here - {}", item.name(), item.description()));
        }
        for character in section.characters().iter().filter(|c| c.in_game()) {
            lines.push(format!("{} is here!", character.name()));
        }

        Ok(lines.join("\n"))
    }
}

impl Index<SectionId> for World {
    type Output = Section;

    fn index(&self, id: SectionId) -> &Section {
        &self.sections[id.0]
    }
}

impl IndexMut<SectionId> for World {
    fn index_mut(&mut self, id: SectionId) -> &mut Section {
        &mut self.sections[id.0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::Character;
    use crate::item::Item;
    use proptest::prelude::*;

    fn two_rooms() -> (World, SectionId, SectionId) {
        let mut world = World::new();
        let start = world.add_section("start", "");
        let end = world.add_section("end", "");
        (world, start, end)
    }

    #[test]
    fn attach_links_both_ways() {
        let (mut world, start, end) = two_rooms();
        world.attach(start, Direction::North, end).unwrap();

        assert_eq!(world[start].link(Direction::North), Some(end));
        assert_eq!(world[end].link(Direction::South), Some(start));
        assert_eq!(world[start].link(Direction::South), None);
    }

    #[test]
    fn reattach_leaves_stale_back_link() {
        let (mut world, start, end) = two_rooms();
        let other = world.add_section("other", "");
        world.attach(start, Direction::North, end).unwrap();
        world.attach(start, Direction::North, other).unwrap();

        assert_eq!(world[start].link(Direction::North), Some(other));
        assert_eq!(world[other].link(Direction::South), Some(start));
        assert_eq!(world[end].link(Direction::South), Some(start));
    }

    #[test]
    fn attach_rejects_unknown_sections() {
        let (mut world, start, _) = two_rooms();
        assert!(matches!(
            world.attach(start, Direction::East, SectionId(9)),
            Err(WorldError::UnknownSection(SectionId(9)))
        ));
        assert!(world.attach(SectionId(9), Direction::East, start).is_err());
        assert!(world[start].link(Direction::East).is_none());
    }

    #[test]
    fn find_by_name() {
        let (world, _, end) = two_rooms();
        assert_eq!(world.find("end"), Some(end));
        assert_eq!(world.find("nowhere"), None);
    }

    #[test]
    fn details_lists_exits_items_and_characters() {
        let mut world = World::new();
        let hall = world.add_section("Hall", "A long hall.");
        let kitchen = world.add_section("Kitchen", "");
        world.attach(hall, Direction::North, kitchen).unwrap();
        world[hall].add_item(Item::new("Key", "A brass key.", ""));
        world[hall].add_character(Character::student("Amy"));

        let details = world.details(hall).unwrap();
        assert_eq!(
            details,
            "Hall\n--------------------\nA long hall.\nThe Kitchen is north.\n\
             The [Key] is here - A brass key.\nAmy is here!"
        );
    }

    proptest! {
        #[test]
        fn attach_is_symmetric(index in 0usize..4, self_loop in any::<bool>()) {
            let (mut world, a, b) = two_rooms();
            let b = if self_loop { a } else { b };
            let direction = Direction::from_index(index);
            world.attach(a, direction, b).unwrap();

            prop_assert_eq!(world[a].link(direction), Some(b));
            prop_assert_eq!(world[b].link(direction.opposite()), Some(a));
        }
    }
}
