//! The game state machine.

use std::io::{BufRead, Write};

use log::{debug, info};
use wf_core::{Action, Direction, EncounterResult, Item, Section, SectionId, World, WorldError};

use crate::config::GameConfig;
use crate::error::{GameError, GameResult};
use crate::parser::{match_command, split_use_argument};

/// Running totals kept for the life of a game.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameStats {
    /// Characters that went from alive to dead in an encounter.
    pub enemies_defeated: u32,
}

/// A game in progress: the world, where the player stands, and what they
/// carry.
pub struct Game {
    world: World,
    current: SectionId,
    inventory: Vec<Item>,
    stats: GameStats,
    config: GameConfig,
}

impl Game {
    /// Start a game in `start` with default configuration.
    pub fn new(world: World, start: SectionId) -> GameResult<Self> {
        Self::with_config(world, start, GameConfig::default())
    }

    /// Start a game in `start`.
    pub fn with_config(world: World, start: SectionId, config: GameConfig) -> GameResult<Self> {
        if !world.contains(start) {
            return Err(WorldError::UnknownSection(start).into());
        }
        Ok(Self {
            world,
            current: start,
            inventory: Vec::new(),
            stats: GameStats::default(),
            config,
        })
    }

    /// The world being played.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable access to the world, for setting up scenes.
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// The section the player stands in.
    pub fn current_section(&self) -> &Section {
        &self.world[self.current]
    }

    /// ID of the section the player stands in.
    pub fn current_id(&self) -> SectionId {
        self.current
    }

    /// What the player carries, in pickup order.
    pub fn inventory(&self) -> &[Item] {
        &self.inventory
    }

    /// Put an item straight into the inventory.
    pub fn give(&mut self, item: Item) {
        self.inventory.push(item);
    }

    /// Totals so far.
    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    /// The active configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Play one turn: show the section and its commands, read a line, and run
    /// it.
    ///
    /// Refusals are printed and end the turn. Returns `false` once the input
    /// is exhausted.
    pub fn iteration<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        output: &mut W,
    ) -> GameResult<bool> {
        writeln!(output, "{}", self.current_section().describe())?;
        if self.config.show_commands {
            writeln!(output, "Commands:")?;
            for command in self.current_section().actions() {
                writeln!(output, "  {}: {}", command.documentation, command.description)?;
            }
        }
        write!(output, "{}", self.config.prompt)?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            debug!("input exhausted");
            return Ok(false);
        }

        match self.execute(&line) {
            Ok(text) if text.is_empty() => {}
            Ok(text) => writeln!(output, "{text}")?,
            Err(refusal) if refusal.is_refusal() => writeln!(output, "{refusal}")?,
            Err(e) => return Err(e),
        }
        Ok(true)
    }

    /// Play turns until the input is exhausted.
    pub fn mainloop<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        output: &mut W,
    ) -> GameResult<()> {
        while self.iteration(input, output)? {}
        Ok(())
    }

    /// Run one line of input against the current section's commands.
    pub fn execute(&mut self, input: &str) -> GameResult<String> {
        let commands = self.current_section().actions();
        let Some((command, argument)) = match_command(&commands, input) else {
            debug!("no command matches {:?}", input.trim());
            return Err(GameError::NoSuchCommand);
        };
        debug!("running {} with {argument:?}", command.name);

        match command.action {
            Action::Move(direction) => self.move_to(direction),
            Action::Talk => self.talk(argument),
            Action::Take => self.take(argument),
            Action::Use => {
                let (item, character) = split_use_argument(argument);
                self.use_item(character, item)
            }
            Action::Look => self.look(argument),
            Action::Inventory => Ok(self.describe_inventory()),
        }
    }

    /// Walk through the link in `direction`.
    pub fn move_to(&mut self, direction: Direction) -> GameResult<String> {
        let destination = self
            .current_section()
            .link(direction)
            .ok_or(GameError::CannotGoThatWay)?;
        debug!("moving {direction} from {} to {destination}", self.current);
        self.current = destination;
        Ok(format!("You go {direction}."))
    }

    /// Hear a character's greeting.
    pub fn talk(&self, character: &str) -> GameResult<String> {
        self.current_section()
            .character(character)
            .map(|c| c.greeting())
            .ok_or(GameError::NoSuchCharacter)
    }

    /// Move an item from the section into the inventory.
    pub fn take(&mut self, item: &str) -> GameResult<String> {
        let item = self.world[self.current]
            .take_item(item)
            .ok_or(GameError::NoSuchItem)?;
        let message = format!("You take {}.", item.name());
        self.inventory.push(item);
        Ok(message)
    }

    /// Use a carried item on a character here and apply the outcome.
    ///
    /// An item the player does not carry is ignored without a message.
    pub fn use_item(&mut self, character: &str, item: &str) -> GameResult<String> {
        let target = self.world[self.current]
            .character_mut(character)
            .ok_or(GameError::NoSuchCharacter)?;
        let Some(item) = self.inventory.iter().find(|held| held.name() == item) else {
            debug!("{item:?} is not in the inventory");
            return Ok(String::new());
        };

        let was_alive = target.alive();
        let result = target.encounter(item);
        let defeated = was_alive && !target.alive();
        debug!("{} encountered {}: {}", target.name(), item.name(), result.label());

        if defeated {
            self.stats.enemies_defeated += 1;
            info!("enemies defeated: {}", self.stats.enemies_defeated);
        }
        Ok(self.apply_result(&result))
    }

    /// Apply an encounter's summary and return its description.
    ///
    /// The new inventory is the old one plus the inventory additions. Only
    /// character removals are checked against it, and an item is never a
    /// character, so nothing held is lost. The roster loses the character
    /// removals and gains the character additions at the end, so a swapped-in
    /// character moves to the back of the roster rather than taking the old
    /// one's slot. Both are computed before either is stored.
    pub fn apply_result(&mut self, result: &EncounterResult) -> String {
        let summary = result.summary();

        let mut inventory = self.inventory.clone();
        if self.config.honor_inventory_removals {
            for removed in &summary.inventory_removals {
                if let Some(pos) = inventory.iter().position(|item| item == removed) {
                    inventory.remove(pos);
                }
            }
        }
        inventory.extend(summary.inventory_additions.iter().cloned());

        let roster = self.world[self.current]
            .characters()
            .iter()
            .filter(|character| !summary.character_removals.contains(character))
            .cloned()
            .chain(summary.character_additions.iter().cloned())
            .collect();

        debug!(
            "applying {}: +{}/-{} items, +{}/-{} characters",
            result.label(),
            summary.inventory_additions.len(),
            summary.inventory_removals.len(),
            summary.character_additions.len(),
            summary.character_removals.len()
        );
        self.inventory = inventory;
        self.world[self.current].set_characters(roster);

        result.description()
    }

    /// Look around, or at a named item or character.
    pub fn look(&self, target: &str) -> GameResult<String> {
        if target.is_empty() {
            return Ok(self.world.details(self.current)?);
        }

        let section = self.current_section();
        if let Some(item) = section
            .item(target)
            .or_else(|| self.inventory.iter().find(|held| held.name() == target))
        {
            return Ok(format!("{} - {}", item.name(), item.description()));
        }
        section
            .character(target)
            .map(|character| format!("{} - {}", character.name(), character.description()))
            .ok_or(GameError::NoSuchItem)
    }

    /// What the player carries, as one line.
    pub fn describe_inventory(&self) -> String {
        if self.inventory.is_empty() {
            return "You are carrying nothing.".to_string();
        }
        let names: Vec<&str> = self.inventory.iter().map(Item::name).collect();
        format!("You are carrying: {}", names.join(", "))
    }
}
