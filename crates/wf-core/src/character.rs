use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog;
use crate::encounter::{EncounterResult, Transaction};
use crate::item::Item;

const ZOMBIE_DESCRIPTION: &str = "I'm a zombie woo hoo! I'm also dead.";
const DRAGON_DESCRIPTION: &str = "An ebil dragon :3";
const STUDENT_DESCRIPTION: &str = "Just trying to pass my exams.";
const TEACHER_DESCRIPTION: &str = "Please hand in your homework on time.";

/// Identity of one character instance.
///
/// Rosters add and remove characters by identity, so a zombie and the student
/// it turns into are different characters even though they share a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CharacterId(pub Uuid);

impl CharacterId {
    /// Generate a new random character ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CharacterId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// What sort of character this is, with the state that sort needs.
///
/// Enemy-like variants fight and can die; friend-like variants trade and are
/// always alive.
#[derive(Debug, Clone, PartialEq)]
pub enum Kind {
    /// Dies when struck with one of its weaknesses.
    Enemy {
        /// Whether it can still be fought.
        alive: bool,
    },
    /// Already dead but still wandering the world; the antidote turns it
    /// into a student.
    Zombie {
        /// Starts out `false`.
        alive: bool,
    },
    /// An enemy with a fixed set of weaknesses.
    Dragon {
        /// Whether it can still be fought.
        alive: bool,
    },
    /// Trades items instead of fighting.
    Friend {
        /// Trades on offer.
        sells: Vec<Transaction>,
    },
    /// A friend with fixed weaknesses and trades.
    Student {
        /// Trades on offer.
        sells: Vec<Transaction>,
    },
    /// A friend with fixed weaknesses and trades.
    Teacher {
        /// Trades on offer.
        sells: Vec<Transaction>,
    },
}

impl Kind {
    /// Lowercase name of the variant.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Enemy { .. } => "enemy",
            Self::Zombie { .. } => "zombie",
            Self::Dragon { .. } => "dragon",
            Self::Friend { .. } => "friend",
            Self::Student { .. } => "student",
            Self::Teacher { .. } => "teacher",
        }
    }

    /// Whether this variant fights rather than trades.
    pub fn is_hostile(&self) -> bool {
        matches!(
            self,
            Self::Enemy { .. } | Self::Zombie { .. } | Self::Dragon { .. }
        )
    }
}

/// A non-player character living in a section.
#[derive(Debug, Clone)]
pub struct Character {
    id: CharacterId,
    name: String,
    description: String,
    weaknesses: Vec<Item>,
    kind: Kind,
}

impl Character {
    fn build(
        name: impl Into<String>,
        description: impl Into<String>,
        weaknesses: Vec<Item>,
        kind: Kind,
    ) -> Self {
        Self {
            id: CharacterId::new(),
            name: name.into(),
            description: description.into(),
            weaknesses,
            kind,
        }
    }

    /// An enemy that dies when struck with any of `weaknesses`.
    pub fn enemy(
        name: impl Into<String>,
        description: impl Into<String>,
        weaknesses: Vec<Item>,
    ) -> Self {
        Self::build(name, description, weaknesses, Kind::Enemy { alive: true })
    }

    /// A zombie. It counts as present in the world even though it is dead.
    pub fn zombie(name: impl Into<String>, weaknesses: Vec<Item>) -> Self {
        Self::build(
            name,
            ZOMBIE_DESCRIPTION,
            weaknesses,
            Kind::Zombie { alive: false },
        )
    }

    /// A dragon, weak to the catalog's dragon weaknesses.
    pub fn dragon(name: impl Into<String>) -> Self {
        Self::build(
            name,
            DRAGON_DESCRIPTION,
            catalog::dragon_weaknesses(),
            Kind::Dragon { alive: true },
        )
    }

    /// A friend offering `sells`.
    pub fn friend(
        name: impl Into<String>,
        description: impl Into<String>,
        sells: Vec<Transaction>,
    ) -> Self {
        Self::build(name, description, Vec::new(), Kind::Friend { sells })
    }

    /// A student with the catalog's student weaknesses and trades.
    pub fn student(name: impl Into<String>) -> Self {
        Self::build(
            name,
            STUDENT_DESCRIPTION,
            catalog::student_weaknesses(),
            Kind::Student {
                sells: catalog::student_sells(),
            },
        )
    }

    /// A teacher with the catalog's teacher weaknesses and trades.
    pub fn teacher(name: impl Into<String>) -> Self {
        Self::build(
            name,
            TEACHER_DESCRIPTION,
            catalog::teacher_weaknesses(),
            Kind::Teacher {
                sells: catalog::teacher_sells(),
            },
        )
    }

    /// Replace the weaknesses.
    pub fn with_weaknesses(mut self, weaknesses: Vec<Item>) -> Self {
        self.weaknesses = weaknesses;
        self
    }

    /// This instance's identity.
    pub fn id(&self) -> CharacterId {
        self.id
    }

    /// The character's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Who the character says they are.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Items this character is weak to.
    pub fn weaknesses(&self) -> &[Item] {
        &self.weaknesses
    }

    /// The variant and its state.
    pub fn kind(&self) -> &Kind {
        &self.kind
    }

    /// Trades on offer; empty for enemy-like characters.
    pub fn sells(&self) -> &[Transaction] {
        match &self.kind {
            Kind::Friend { sells } | Kind::Student { sells } | Kind::Teacher { sells } => {
                sells.as_slice()
            }
            Kind::Enemy { .. } | Kind::Zombie { .. } | Kind::Dragon { .. } => &[],
        }
    }

    /// Whether the character is alive. Friends always are.
    pub fn alive(&self) -> bool {
        match self.kind {
            Kind::Enemy { alive } | Kind::Zombie { alive } | Kind::Dragon { alive } => alive,
            Kind::Friend { .. } | Kind::Student { .. } | Kind::Teacher { .. } => true,
        }
    }

    /// Whether the character still takes part in encounters.
    ///
    /// Zombies stay in the game while dead; everyone else leaves it when they
    /// die.
    pub fn in_game(&self) -> bool {
        matches!(self.kind, Kind::Zombie { .. }) || self.alive()
    }

    /// What each weakness makes the character worry about.
    pub fn worries(&self) -> Vec<&str> {
        self.weaknesses
            .iter()
            .map(|item| item.worry_description())
            .collect()
    }

    /// The character's worries as one sentence.
    pub fn complaint(&self) -> String {
        let worries = self.worries();
        if worries.is_empty() {
            "I'm not worried about anything".to_string()
        } else {
            format!("I'm so worried about {}", worries.join(", "))
        }
    }

    /// What the character says when talked to. Enemies also complain.
    pub fn greeting(&self) -> String {
        let greeting = format!("Hello I am {} - {}", self.name, self.description);
        if self.kind.is_hostile() {
            format!("{greeting}\n{}", self.complaint())
        } else {
            greeting
        }
    }

    /// Use `item` on this character.
    ///
    /// Enemies die when hit with a weakness while alive. A zombie given the
    /// antidote asks to be swapped for a student of the same name without
    /// changing itself. Friends offer the trade whose price is `item`.
    pub fn encounter(&mut self, item: &Item) -> EncounterResult {
        if matches!(self.kind, Kind::Zombie { .. }) && item.name() == catalog::ANTIDOTE {
            debug!("{} is cured by {}", self.name, item.name());
            return EncounterResult::CharacterSwap {
                old: self.clone(),
                new: Character::student(self.name.clone()),
            };
        }

        match &mut self.kind {
            Kind::Enemy { alive } | Kind::Zombie { alive } | Kind::Dragon { alive } => {
                if !*alive || !self.weaknesses.contains(item) {
                    return EncounterResult::Empty;
                }
                *alive = false;
                debug!("{} killed with {}", self.name, item.name());
                EncounterResult::Annotated(format!("You killed {}", self.name))
            }
            Kind::Friend { sells } | Kind::Student { sells } | Kind::Teacher { sells } => sells
                .iter()
                .find(|transaction| transaction.exchanged_for == *item)
                .cloned()
                .map_or(EncounterResult::Empty, EncounterResult::Transaction),
        }
    }
}

impl PartialEq for Character {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Character {}

#[cfg(test)]
mod tests {
    use super::*;

    fn knife() -> Item {
        Item::new("Knife", "A sharp knife.", "knives")
    }

    fn cactus() -> Item {
        Item::new("Cactus", "A prickly cactus.", "cacti")
    }

    #[test]
    fn enemy_dies_to_weakness() {
        let mut jack = Character::enemy("Jack", "A bully", vec![knife()]);
        assert!(jack.alive());

        let result = jack.encounter(&knife());
        assert_eq!(result, EncounterResult::Annotated("You killed Jack".into()));
        assert!(!jack.alive());
        assert!(!jack.in_game());
    }

    #[test]
    fn enemy_matches_weakness_by_name() {
        let mut jack = Character::enemy("Jack", "A bully", vec![knife()]);
        let other_knife = Item::new("Knife", "A different knife", "");
        jack.encounter(&other_knife);
        assert!(!jack.alive());
    }

    #[test]
    fn enemy_shrugs_off_other_items() {
        let mut jack = Character::enemy("Jack", "A bully", vec![knife()]);
        assert_eq!(jack.encounter(&cactus()), EncounterResult::Empty);
        assert!(jack.alive());
    }

    #[test]
    fn dead_enemy_is_not_killed_twice() {
        let mut jack = Character::enemy("Jack", "A bully", vec![knife()]);
        jack.encounter(&knife());
        assert_eq!(jack.encounter(&knife()), EncounterResult::Empty);
        assert!(!jack.alive());
    }

    #[test]
    fn zombie_is_dead_but_in_game() {
        let zombie = Character::zombie("Jack", vec![knife()]);
        assert!(!zombie.alive());
        assert!(zombie.in_game());
    }

    #[test]
    fn zombie_cured_by_antidote() {
        let mut zombie = Character::zombie("Jack", vec![knife()]);
        let before = zombie.clone();

        let EncounterResult::CharacterSwap { old, new } = zombie.encounter(&catalog::antidote())
        else {
            panic!("expected a character swap");
        };
        assert_eq!(old, before);
        assert_eq!(new.name(), "Jack");
        assert_eq!(new.kind().label(), "student");
        assert_ne!(new.id(), zombie.id());
        assert_eq!(zombie.kind(), before.kind());
    }

    #[test]
    fn zombie_ignores_other_items() {
        let mut zombie = Character::zombie("Jack", vec![knife()]);
        assert_eq!(zombie.encounter(&knife()), EncounterResult::Empty);
        assert!(zombie.in_game());
    }

    #[test]
    fn dragon_has_fixed_weaknesses() {
        let mut dragon = Character::dragon("Smaug");
        assert_eq!(dragon.weaknesses(), catalog::dragon_weaknesses().as_slice());
        assert_eq!(
            dragon.encounter(&catalog::ice()),
            EncounterResult::Annotated("You killed Smaug".into())
        );
    }

    #[test]
    fn friend_trades_on_matching_price() {
        let sells = vec![Transaction::new(cactus(), catalog::exam_results())];
        let mut smith = Character::friend("Mr. Smith", "A botanist", sells.clone());

        let result = smith.encounter(&catalog::exam_results());
        assert_eq!(
            result,
            EncounterResult::Transaction(Transaction::new(cactus(), catalog::exam_results()))
        );
        assert_eq!(smith.sells(), sells.as_slice());
        assert!(smith.alive());
    }

    #[test]
    fn friend_ignores_other_items() {
        let mut smith = Character::friend(
            "Mr. Smith",
            "A botanist",
            vec![Transaction::new(cactus(), catalog::exam_results())],
        );
        assert_eq!(smith.encounter(&knife()), EncounterResult::Empty);
        assert_eq!(smith.encounter(&cactus()), EncounterResult::Empty);
    }

    #[test]
    fn student_and_teacher_tables() {
        let mut student = Character::student("Amy");
        let mut teacher = Character::teacher("Mrs. Jones");

        assert!(matches!(
            student.encounter(&catalog::pencil()),
            EncounterResult::Transaction(t) if t.item == catalog::homework()
        ));
        assert!(matches!(
            teacher.encounter(&catalog::apple()),
            EncounterResult::Transaction(t) if t.item == catalog::exam_results()
        ));
        assert_eq!(student.worries(), vec!["getting detention"]);
    }

    #[test]
    fn enemy_greeting_includes_complaint() {
        let jack = Character::enemy("Jack", "A bully", vec![knife(), cactus()]);
        assert_eq!(
            jack.greeting(),
            "Hello I am Jack - A bully\nI'm so worried about knives, cacti"
        );
    }

    #[test]
    fn carefree_enemy_says_so() {
        let jack = Character::enemy("Jack", "A bully", Vec::new());
        assert_eq!(
            jack.greeting(),
            "Hello I am Jack - A bully\nI'm not worried about anything"
        );
    }

    #[test]
    fn friend_greeting_has_no_complaint() {
        let smith = Character::friend("Mr. Smith", "A botanist", Vec::new())
            .with_weaknesses(vec![knife()]);
        assert_eq!(smith.greeting(), "Hello I am Mr. Smith - A botanist");
        assert_eq!(smith.complaint(), "I'm so worried about knives");
    }

    #[test]
    fn identity_not_name_decides_equality() {
        let a = Character::student("Jack");
        let b = Character::student("Jack");
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }
}
