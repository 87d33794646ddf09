use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// An item the player can find, carry, and use on characters.
///
/// Items compare by name only: two items with the same name are
/// interchangeable wherever an item is looked up or matched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    worry_description: String,
}

impl Item {
    /// Create an item.
    ///
    /// `worry_description` is how a character weak to this item talks about it.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        worry_description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            worry_description: worry_description.into(),
        }
    }

    /// The item's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Flavor text describing the item.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// What a character weak to this item worries about.
    pub fn worry_description(&self) -> &str {
        &self.worry_description
    }
}

impl PartialEq for Item {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Item {}

impl Hash for Item {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_ignores_flavor_text() {
        let a = Item::new("Knife", "A sharp knife", "knives");
        let b = Item::new("Knife", "A blunt knife", "cutlery");
        let c = Item::new("Fork", "A sharp knife", "knives");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn deserialize_defaults_flavor_text() {
        let item: Item = serde_json::from_str(r#"{"name": "Key"}"#).unwrap();
        assert_eq!(item.name(), "Key");
        assert!(item.description().is_empty());
        assert!(item.worry_description().is_empty());
    }
}
