//! Monte Carlo estimates over many rollouts.
//!
//! ## Overview
//!
//! - [`estimate_outcomes`]: probability of each camel leading or being
//!   runner-up at the end of the leg, plus leg-ticket expected values for
//!   each configured payout weight.
//! - [`estimate_markers`]: for every legal marker cell and direction, the
//!   mean number of landings on a marker placed there.
//!
//! Trials run on the rayon pool. Each trial clones the starting board (O(1)
//! thanks to persistent maps) and draws from its own seeded stream, so a
//! fixed seed gives identical results on any number of threads.

pub mod marker;
pub mod outcome;
pub mod stats;

pub use marker::{estimate_markers, estimate_markers_with, marker_options, MarkerEstimate, MarkerOdds};
pub use outcome::{
    estimate_outcomes, estimate_outcomes_with, ticket_score, CompetitorOdds, OutcomeEstimate, TicketScore,
};
pub use stats::{run_trials, MarkerTally, OutcomeTally, Tally};
