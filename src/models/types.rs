use serde::{Deserialize, Serialize};

/// Direction token used as key in a room's connections.
///
/// Variant order doubles as display order of a room's exits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Direction {
    North,
    South,
    East,
    West,
    Up,
    Down,
    Custom(String), // anything else, stored lowercased
}

impl Direction {
    pub fn as_str(&self) -> &str {
        match self {
            Direction::Custom(s) => s.as_str(),
            _ => self.canonical(),
        }
    }

    #[inline]
    pub fn canonical(&self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Custom(_) => "custom",
        }
    }

    /// Parses a direction token case-insensitively. Unknown words become `Custom`.
    pub fn parse(s: &str) -> Self {
        let lower = s.trim().to_lowercase();
        match lower.as_str() {
            "n" | "north" => Direction::North,
            "s" | "south" => Direction::South,
            "e" | "east" => Direction::East,
            "w" | "west" => Direction::West,
            "u" | "up" => Direction::Up,
            "d" | "down" => Direction::Down,
            _ => Direction::Custom(lower),
        }
    }
}

impl core::fmt::Display for Direction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for Direction {
    fn from(s: String) -> Self {
        Direction::parse(&s)
    }
}

impl From<&str> for Direction {
    fn from(s: &str) -> Self {
        Direction::parse(s)
    }
}

impl From<Direction> for String {
    fn from(d: Direction) -> Self {
        d.to_string()
    }
}

/// Lowercased comparison key for names. Display names are never mutated.
#[inline]
pub fn name_key(name: &str) -> String {
    name.trim().to_lowercase()
}

#[inline]
pub fn same_name(a: &str, b: &str) -> bool {
    name_key(a) == name_key(b)
}
