//! Errors raised at the crate boundary.
//!
//! The race engine itself never fails; these cover reading boards and
//! configuration from the outside world.

use std::path::PathBuf;

use thiserror::Error;

use super::competitor::Colour;

/// A board line that could not be read.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum NotationError {
    #[error("unexpected symbol {symbol:?} at offset {offset}")]
    UnknownSymbol { symbol: char, offset: usize },

    #[error("'!' at offset {offset} does not follow a camel")]
    DanglingImmovable { offset: usize },

    #[error("{0} appears more than once")]
    DuplicateCompetitor(Colour),

    #[error("marker on cell {cell} is next to another marker")]
    AdjacentMarkers { cell: i32 },

    #[error("cell {cell} holds both a camel and a marker")]
    MarkerOnCompetitor { cell: i32 },
}

/// Configuration that could not be loaded or is out of range.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not decode config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}
