//! Move directions.

use serde::{Deserialize, Serialize};

use super::error::EngineError;

/// One of the four cardinal move commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions, in the order playability checks try them.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Merges accumulate from the far end of each group.
    #[must_use]
    pub const fn is_inverted(self) -> bool {
        matches!(self, Direction::Right | Direction::Down)
    }

    /// Groups are columns rather than rows.
    #[must_use]
    pub const fn is_columnar(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        f.write_str(name)
    }
}

/// Parses direction names and browser arrow-key names.
///
/// ```
/// use rust_2048::core::Direction;
///
/// assert_eq!("left".parse::<Direction>().unwrap(), Direction::Left);
/// assert_eq!("ArrowUp".parse::<Direction>().unwrap(), Direction::Up);
/// assert!("sideways".parse::<Direction>().is_err());
/// ```
impl std::str::FromStr for Direction {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "up" | "arrowup" => Ok(Direction::Up),
            "down" | "arrowdown" => Ok(Direction::Down),
            "left" | "arrowleft" => Ok(Direction::Left),
            "right" | "arrowright" => Ok(Direction::Right),
            _ => Err(EngineError::UnknownDirection(s.to_string())),
        }
    }
}
