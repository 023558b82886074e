//! Competitor identities and records.
//!
//! ## Colour
//!
//! The fixed set of racing camels. Ordering follows the declaration order,
//! which is also the order used when iterating a board.
//!
//! ## Competitor
//!
//! Position, stack height and movable flag of one camel.

use serde::{Deserialize, Serialize};

/// Identity of a racing camel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Colour {
    Green,
    Blue,
    Orange,
    Yellow,
    White,
}

impl Colour {
    /// Every colour, in declaration order.
    pub const ALL: [Colour; 5] = [
        Colour::Green,
        Colour::Blue,
        Colour::Orange,
        Colour::Yellow,
        Colour::White,
    ];

    /// Lowercase name used in reports.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Colour::Green => "green",
            Colour::Blue => "blue",
            Colour::Orange => "orange",
            Colour::Yellow => "yellow",
            Colour::White => "white",
        }
    }

    /// Single-letter board notation symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Colour::Green => 'g',
            Colour::Blue => 'b',
            Colour::Orange => 'o',
            Colour::Yellow => 'y',
            Colour::White => 'w',
        }
    }

    /// Look up a colour by its notation symbol.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'g' => Some(Colour::Green),
            'b' => Some(Colour::Blue),
            'o' => Some(Colour::Orange),
            'y' => Some(Colour::Yellow),
            'w' => Some(Colour::White),
            _ => None,
        }
    }
}

impl std::fmt::Display for Colour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.name())
    }
}

/// A camel on the track.
///
/// Height 0 is the bottom of the stack on `position`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Competitor {
    pub colour: Colour,
    pub position: i32,
    pub height: u32,
    /// False once this camel's move has been resolved in the current leg.
    pub movable: bool,
}

impl Competitor {
    #[must_use]
    pub const fn new(colour: Colour, position: i32, height: u32, movable: bool) -> Self {
        Self {
            colour,
            position,
            height,
            movable,
        }
    }

    /// Sort key for race standing: further along, then higher in the stack.
    #[must_use]
    pub const fn standing(&self) -> (i32, u32) {
        (self.position, self.height)
    }
}
