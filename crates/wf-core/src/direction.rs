use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::WorldError;

/// One of the four compass directions a section can link through.
///
/// The discriminants run clockwise, so the opposite of a direction is two
/// steps further round: `(d + 2) mod 4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// North.
    North = 0,
    /// East.
    East = 1,
    /// South.
    South = 2,
    /// West.
    West = 3,
}

impl Direction {
    /// All directions in clockwise order, starting at north.
    pub const ALL: [Direction; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// The direction at `index` modulo four.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % 4]
    }

    /// The position of this direction in [`Direction::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// The direction pointing the other way.
    pub fn opposite(self) -> Self {
        Self::from_index(self.index() + 2)
    }

    /// Lowercase name, also used as the movement command's name.
    pub fn name(self) -> &'static str {
        match self {
            Self::North => "north",
            Self::East => "east",
            Self::South => "south",
            Self::West => "west",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = WorldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "n" | "north" => Ok(Self::North),
            "e" | "east" => Ok(Self::East),
            "s" | "south" => Ok(Self::South),
            "w" | "west" => Ok(Self::West),
            _ => Err(WorldError::UnknownDirection(s.to_string())),
        }
    }
}
