//! Directional markers ("desert tiles") and placement descriptors.

use serde::{Deserialize, Serialize};

/// Which way a marker pushes a camel that lands on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Direction {
    Backward,
    Forward,
}

impl Direction {
    /// Both directions, forward first.
    pub const BOTH: [Direction; 2] = [Direction::Forward, Direction::Backward];

    /// Cell offset applied to a landing camel.
    #[must_use]
    pub const fn delta(self) -> i32 {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }

    /// Notation symbol: `+` or `-`.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Direction::Forward => '+',
            Direction::Backward => '-',
        }
    }
}

/// A marker on the board with its landing counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Marker {
    pub position: i32,
    pub direction: Direction,
    /// Number of times a camel has landed here.
    pub triggers: u32,
}

impl Marker {
    #[must_use]
    pub const fn new(position: i32, direction: Direction) -> Self {
        Self {
            position,
            direction,
            triggers: 0,
        }
    }
}

/// A candidate marker placement: cell plus direction.
///
/// Displays as `+5` / `-5`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MarkerOption {
    pub position: i32,
    pub direction: Direction,
}

impl MarkerOption {
    #[must_use]
    pub const fn new(position: i32, direction: Direction) -> Self {
        Self {
            position,
            direction,
        }
    }
}

impl std::fmt::Display for MarkerOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.direction.symbol(), self.position)
    }
}
