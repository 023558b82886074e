//! # camel-odds
//!
//! Monte Carlo odds for a camel race leg.
//!
//! Given a board mid-leg (camel stacks, markers, which dice are already
//! rolled) the crate answers two questions by simulation:
//!
//! 1. How likely is each camel to lead, or be runner-up, when the leg ends,
//!    and what is each leg ticket worth?
//! 2. Where should a marker go to be landed on most often?
//!
//! ## Design Principles
//!
//! 1. **Explicit randomness**: every function that rolls dice takes an RNG.
//!    Seeded runs are reproducible, on any number of threads.
//!
//! 2. **Cheap copies**: boards use `im` persistent maps, so each trial clones
//!    the starting board in O(1) and mutates its own copy.
//!
//! 3. **Configuration over constants**: trial counts, dice, marker reach and
//!    ticket payouts all live in `SimConfig`.
//!
//! ## Modules
//!
//! - `core`: Board, camels, markers, RNG, configuration, errors
//! - `notation`: one-line textual board format
//! - `rollout`: playing a leg to completion
//! - `estimate`: outcome and marker estimates over many rollouts
//! - `analysis`: random starting boards and win rates per starting profile
//! - `report`: plain-text tables
//!
//! ## Example
//!
//! ```
//! use camel_odds::{estimate_outcomes, Board, SimConfig};
//!
//! let board: Board = "g.bo..w".parse().unwrap();
//! let config = SimConfig::default().with_trials(2_000).with_seed(1);
//! let estimate = estimate_outcomes(&board, &config).unwrap();
//!
//! let total: f64 = estimate.odds.iter().map(|o| o.p_leader).sum();
//! assert!((total - 1.0).abs() < 1e-9);
//! ```

pub mod analysis;
pub mod core;
pub mod estimate;
pub mod notation;
pub mod report;
pub mod rollout;

// Re-export commonly used types
pub use crate::core::{
    Board, Colour, Competitor, ConfigError, Direction, Marker, MarkerOption, MoveReport, NotationError,
    RaceRng, SimConfig,
};

pub use crate::rollout::{rollout, RaceAction, Rollout, RolloutPolicy, RolloutStats, ScriptedPolicy, UniformPolicy};

pub use crate::estimate::{
    estimate_markers, estimate_markers_with, estimate_outcomes, estimate_outcomes_with, ticket_score,
    CompetitorOdds, MarkerEstimate, MarkerOdds, OutcomeEstimate, TicketScore,
};

pub use crate::analysis::{analyse_starts, random_board, StartAnalysis, StartProfile};
