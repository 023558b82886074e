//! Rollouts: playing a board forward until the leg is over.
//!
//! ## Overview
//!
//! A rollout takes a board where some camels have not yet moved this leg and
//! resolves it. At every step a [`RolloutPolicy`] picks either a camel move
//! (consuming that camel's die) or, when exploring, a marker placement. The
//! loop ends once no camel is waiting.
//!
//! ## Usage
//!
//! ```rust
//! use camel_odds::core::{Board, Colour, RaceRng, SimConfig};
//! use camel_odds::rollout::Rollout;
//!
//! let mut board = Board::new();
//! board.add_competitor(Colour::Green, 0, true);
//! board.add_competitor(Colour::Blue, 0, true);
//!
//! let config = SimConfig::default();
//! let mut rng = RaceRng::new(42);
//! let finished = Rollout::from_config(&config).run(board, &mut rng);
//!
//! assert!(finished.movable_colours().is_empty());
//! assert!(finished.leader(None).is_some());
//! ```

pub mod driver;
pub mod policy;

pub use driver::{rollout, Rollout, RolloutStats};
pub use policy::{RaceAction, RolloutPolicy, ScriptedPolicy, UniformPolicy};
