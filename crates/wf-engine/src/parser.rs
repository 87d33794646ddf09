//! Matching player input against the commands on offer.

use wf_core::Command;

/// The first command whose name starts the input, with the argument text.
///
/// Commands are tried in the order given, so movement commands win over the
/// interactions. The name is matched case-insensitively; the argument is
/// everything after the first space, or empty.
pub fn match_command<'c, 'i>(
    commands: &'c [Command],
    input: &'i str,
) -> Option<(&'c Command, &'i str)> {
    let input = input.trim();
    let lowered = input.to_lowercase();
    let command = commands
        .iter()
        .find(|command| lowered.starts_with(&command.name.to_lowercase()))?;
    let argument = input.split_once(' ').map_or("", |(_, rest)| rest.trim());
    Some((command, argument))
}

/// Split the argument of `use` into item and character names.
///
/// Splits on the first literal `" on "`. Without one, the whole argument is
/// the item and the character name is empty.
pub fn split_use_argument(argument: &str) -> (&str, &str) {
    argument
        .split_once(" on ")
        .map_or((argument, ""), |(item, character)| (item.trim(), character.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wf_core::{Action, Direction};

    fn commands() -> Vec<Command> {
        let mut commands = vec![Command::movement(Direction::North)];
        commands.extend(Command::interactions());
        commands
    }

    #[test]
    fn bare_direction() {
        let commands = commands();
        let (command, argument) = match_command(&commands, "north").unwrap();
        assert_eq!(command.action, Action::Move(Direction::North));
        assert_eq!(argument, "");
    }

    #[test]
    fn argument_is_text_after_first_space() {
        let commands = commands();
        let (command, argument) = match_command(&commands, "take Exam results").unwrap();
        assert_eq!(command.action, Action::Take);
        assert_eq!(argument, "Exam results");
    }

    #[test]
    fn prefix_match_without_space() {
        let commands = commands();
        let (command, argument) = match_command(&commands, "talkative").unwrap();
        assert_eq!(command.action, Action::Talk);
        assert_eq!(argument, "");
    }

    #[test]
    fn name_is_case_insensitive() {
        let commands = commands();
        let (command, _) = match_command(&commands, "NORTH").unwrap();
        assert_eq!(command.action, Action::Move(Direction::North));
    }

    #[test]
    fn unavailable_direction_does_not_match() {
        let commands = commands();
        assert!(match_command(&commands, "south").is_none());
        assert!(match_command(&commands, "dance").is_none());
        assert!(match_command(&commands, "").is_none());
    }

    #[test]
    fn split_use() {
        assert_eq!(
            split_use_argument("Exam results on Mr. Smith"),
            ("Exam results", "Mr. Smith")
        );
        assert_eq!(split_use_argument("Knife"), ("Knife", ""));
        assert_eq!(split_use_argument("Onion on Jack"), ("Onion", "Jack"));
    }
}
