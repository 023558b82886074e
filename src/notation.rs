//! Single-line board notation.
//!
//! ```text
//! g.bo!..+.w
//! ```
//!
//! - `g b o y w`: a camel on the current cell, listed bottom to top
//! - `!` right after a camel: its die has already been rolled this leg
//! - `+` / `-`: forward / backward marker on the current cell
//! - `.`: next cell (the first cell is 0)
//!
//! Whitespace is ignored. The example above has green on 0, blue under
//! orange on 1 (orange already moved), a forward marker on 3 and white on 4.

use std::fmt;
use std::str::FromStr;

use crate::core::{Board, Colour, Direction, NotationError};

impl FromStr for Board {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Board::new();
        let mut cell = 0;
        let mut previous: Option<Colour> = None;

        for (offset, symbol) in s.char_indices() {
            let current = match symbol {
                '.' => {
                    cell += 1;
                    None
                }
                '+' | '-' => {
                    let direction = if symbol == '+' {
                        Direction::Forward
                    } else {
                        Direction::Backward
                    };
                    if (cell - 1..=cell + 1).any(|near| board.marker(near).is_some()) {
                        return Err(NotationError::AdjacentMarkers { cell });
                    }
                    board.add_marker(cell, direction);
                    None
                }
                '!' => {
                    let colour = previous.ok_or(NotationError::DanglingImmovable { offset })?;
                    board.set_competitor(colour, cell, board.stack_size(cell) as u32 - 1, false);
                    None
                }
                symbol if symbol.is_whitespace() => previous,
                symbol => {
                    let colour =
                        Colour::from_symbol(symbol).ok_or(NotationError::UnknownSymbol { symbol, offset })?;
                    if board.competitor(colour).is_some() {
                        return Err(NotationError::DuplicateCompetitor(colour));
                    }
                    board.add_competitor(colour, cell, true);
                    Some(colour)
                }
            };
            previous = current;
        }

        if let Some(marker) = board.markers().find(|m| board.stack_size(m.position) > 0) {
            return Err(NotationError::MarkerOnCompetitor { cell: marker.position });
        }

        Ok(board)
    }
}

impl fmt::Display for Board {
    /// Writes the board in the notation accepted by `FromStr`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let last = self
            .competitors()
            .map(|c| c.position)
            .chain(self.markers().map(|m| m.position))
            .max();
        let Some(last) = last else {
            return Ok(());
        };

        for cell in 0..=last {
            if cell > 0 {
                f.write_str(".")?;
            }
            for camel in self.stack(cell) {
                write!(f, "{}", camel.colour.symbol())?;
                if !camel.movable {
                    f.write_str("!")?;
                }
            }
            if let Some(marker) = self.marker(cell) {
                write!(f, "{}", marker.direction.symbol())?;
            }
        }
        Ok(())
    }
}
