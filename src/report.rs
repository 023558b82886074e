//! Plain-text tables and JSON output for estimates.
//!
//! The table types wrap a borrowed result and implement `Display`, so they
//! can be written straight to any formatter or `io::Write` sink.

use std::fmt;

use serde::Serialize;

use crate::analysis::StartAnalysis;
use crate::core::Board;
use crate::estimate::{MarkerEstimate, OutcomeEstimate};

/// One line per camel: name, first %, second %, then a ticket score per
/// payout weight.
///
/// ```text
/// blue    60.00  40.00    3.40   2.20   1.60
/// ```
#[derive(Clone, Copy, Debug)]
pub struct OutcomeTable<'a>(pub &'a OutcomeEstimate);

impl fmt::Display for OutcomeTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for odds in &self.0.odds {
            write!(
                f,
                "{:6} {:>6.2} {:>6.2} ",
                odds.colour,
                odds.p_leader * 100.0,
                odds.p_runner_up * 100.0
            )?;
            for score in &odds.scores {
                write!(f, " {:6.2}", score.expected)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// One line per placement option: descriptor and mean landings.
#[derive(Clone, Copy, Debug)]
pub struct MarkerTable<'a>(pub &'a MarkerEstimate);

impl fmt::Display for MarkerTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for odds in &self.0.odds {
            writeln!(f, "{} {:.4}", odds.option, odds.expected_triggers)?;
        }
        Ok(())
    }
}

/// One line per starting profile, most wins first.
#[derive(Clone, Copy, Debug)]
pub struct StartTable<'a>(pub &'a StartAnalysis);

impl fmt::Display for StartTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (profile, wins) in self.0.ranked() {
            writeln!(f, "{}  wins: {}", profile, wins)?;
        }
        Ok(())
    }
}

#[must_use]
pub fn outcome_table(estimate: &OutcomeEstimate) -> String {
    OutcomeTable(estimate).to_string()
}

#[must_use]
pub fn marker_table(estimate: &MarkerEstimate) -> String {
    MarkerTable(estimate).to_string()
}

#[must_use]
pub fn start_table(analysis: &StartAnalysis) -> String {
    StartTable(analysis).to_string()
}

/// Everything estimated for one board, as written by `--json`.
#[derive(Clone, Debug, Serialize)]
pub struct BoardReport<'a> {
    /// The board in one-line notation.
    pub notation: String,
    pub board: &'a Board,
    pub outcomes: &'a OutcomeEstimate,
    pub markers: &'a MarkerEstimate,
}

impl<'a> BoardReport<'a> {
    #[must_use]
    pub fn new(board: &'a Board, outcomes: &'a OutcomeEstimate, markers: &'a MarkerEstimate) -> Self {
        Self {
            notation: board.to_string(),
            board,
            outcomes,
            markers,
        }
    }

    /// Single-line JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
