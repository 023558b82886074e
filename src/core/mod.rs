//! Core race types: camels, markers, the board, RNG, configuration, errors.
//!
//! Everything here is independent of how boards are read or results shown.

pub mod board;
pub mod competitor;
pub mod config;
pub mod error;
pub mod marker;
pub mod rng;

pub use board::{Board, MoveReport};
pub use competitor::{Colour, Competitor};
pub use config::SimConfig;
pub use error::{ConfigError, NotationError};
pub use marker::{Direction, Marker, MarkerOption};
pub use rng::RaceRng;
