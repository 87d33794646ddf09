//! Commands a section offers to the player.

use crate::direction::Direction;

/// What a command does when invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Walk through the link in this direction.
    Move(Direction),
    /// Hear a character's greeting.
    Talk,
    /// Pick up an item from the section.
    Take,
    /// Use a carried item on a character.
    Use,
    /// Look around, or at something specific.
    Look,
    /// List what the player carries.
    Inventory,
}

/// A command available in the current section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    /// Input must start with this to select the command.
    pub name: String,
    /// Usage line, e.g. `take <item>`.
    pub documentation: String,
    /// What the command does.
    pub description: String,
    /// The effect to dispatch.
    pub action: Action,
}

impl Command {
    /// Create a command.
    pub fn new(
        name: impl Into<String>,
        documentation: impl Into<String>,
        description: impl Into<String>,
        action: Action,
    ) -> Self {
        Self {
            name: name.into(),
            documentation: documentation.into(),
            description: description.into(),
            action,
        }
    }

    /// The command that walks in `direction`.
    pub fn movement(direction: Direction) -> Self {
        Self::new(
            direction.name(),
            direction.name(),
            format!("Go {direction}"),
            Action::Move(direction),
        )
    }

    /// The commands every section offers after its movement commands.
    pub fn interactions() -> Vec<Self> {
        vec![
            Self::new("talk", "talk <character>", "Talk to a character", Action::Talk),
            Self::new("take", "take <item>", "Pick up an item", Action::Take),
            Self::new(
                "use",
                "use <item> on <character>",
                "Use an item on a character",
                Action::Use,
            ),
            Self::new("look", "look [<name>]", "Look around or at something", Action::Look),
            Self::new("inventory", "inventory", "List what you are carrying", Action::Inventory),
        ]
    }
}
