//! Game configuration.

/// Configuration for a game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Printed before reading each line of input.
    pub prompt: String,
    /// Whether each turn lists the available commands.
    pub show_commands: bool,
    /// Whether applying an encounter also takes its inventory removals out of
    /// the inventory. Off by default, so traded items stay in the inventory.
    pub honor_inventory_removals: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            prompt: "> ".to_string(),
            show_commands: true,
            honor_inventory_removals: false,
        }
    }
}

impl GameConfig {
    /// Create a config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the prompt.
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Show or hide the command list.
    pub fn with_show_commands(mut self, show: bool) -> Self {
        self.show_commands = show;
        self
    }

    /// Apply inventory removals too.
    pub fn with_honor_inventory_removals(mut self, honor: bool) -> Self {
        self.honor_inventory_removals = honor;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = GameConfig::new();
        assert_eq!(config.prompt, "> ");
        assert!(config.show_commands);
        assert!(!config.honor_inventory_removals);
    }

    #[test]
    fn builder_methods() {
        let config = GameConfig::new()
            .with_prompt("? ")
            .with_show_commands(false)
            .with_honor_inventory_removals(true);
        assert_eq!(config.prompt, "? ");
        assert!(!config.show_commands);
        assert!(config.honor_inventory_removals);
    }
}
