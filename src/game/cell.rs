use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Content of a single grid cell. `Red` and `Yellow` double as the two
/// players; `Empty` is the "no player" sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cell {
    #[default]
    #[serde(alias = "none")]
    Empty,
    Red,
    Yellow,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown player '{0}' (expected 'red' or 'yellow')")]
pub struct ParseCellError(String);

impl Cell {
    /// True for `Red` and `Yellow`.
    pub fn is_player(self) -> bool {
        self != Cell::Empty
    }

    /// Get the other player. `Empty` has no opponent and maps to itself.
    pub fn other(self) -> Cell {
        match self {
            Cell::Red => Cell::Yellow,
            Cell::Yellow => Cell::Red,
            Cell::Empty => Cell::Empty,
        }
    }

    /// Get player name for display
    pub fn name(self) -> &'static str {
        match self {
            Cell::Empty => "None",
            Cell::Red => "Red",
            Cell::Yellow => "Yellow",
        }
    }

    /// Single-character glyph used by the text renderings.
    pub fn glyph(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Red => 'R',
            Cell::Yellow => 'Y',
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Cell {
    type Err = ParseCellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "red" | "r" => Ok(Cell::Red),
            "yellow" | "y" => Ok(Cell::Yellow),
            "none" | "empty" => Ok(Cell::Empty),
            _ => Err(ParseCellError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_player() {
        assert_eq!(Cell::Red.other(), Cell::Yellow);
        assert_eq!(Cell::Yellow.other(), Cell::Red);
        assert_eq!(Cell::Empty.other(), Cell::Empty);
    }

    #[test]
    fn test_player_name() {
        assert_eq!(Cell::Red.name(), "Red");
        assert_eq!(Cell::Yellow.name(), "Yellow");
        assert_eq!(Cell::Empty.to_string(), "None");
    }

    #[test]
    fn test_parse() {
        assert_eq!("red".parse::<Cell>(), Ok(Cell::Red));
        assert_eq!(" Y ".parse::<Cell>(), Ok(Cell::Yellow));
        assert_eq!("none".parse::<Cell>(), Ok(Cell::Empty));
        assert!("blue".parse::<Cell>().is_err());
    }
}
