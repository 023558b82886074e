//! Finish-order probabilities and leg-ticket scores.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::stats::{run_trials, OutcomeTally};
use crate::core::{Board, Colour, ConfigError, SimConfig};
use crate::rollout::{Rollout, RolloutPolicy};

/// Expected value of a leg ticket.
///
/// A ticket on a camel pays `weight` if it leads, 1 if it is runner-up, and
/// costs 1 otherwise.
#[must_use]
pub fn ticket_score(weight: u32, p_leader: f64, p_runner_up: f64) -> f64 {
    f64::from(weight) * p_leader + p_runner_up - (1.0 - p_leader - p_runner_up)
}

/// Score of a ticket with a given payout.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TicketScore {
    pub weight: u32,
    pub expected: f64,
}

/// Estimated finish odds of one camel.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CompetitorOdds {
    pub colour: Colour,
    pub leader_count: u64,
    pub runner_up_count: u64,
    pub p_leader: f64,
    pub p_runner_up: f64,
    /// One entry per configured payout weight, in configuration order.
    pub scores: SmallVec<[TicketScore; 4]>,
}

impl CompetitorOdds {
    /// Expected value of the ticket paying `weight`, if it was scored.
    #[must_use]
    pub fn score(&self, weight: u32) -> Option<f64> {
        self.scores
            .iter()
            .find(|s| s.weight == weight)
            .map(|s| s.expected)
    }
}

/// Result of an outcome estimate, best camel first.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OutcomeEstimate {
    pub trials: u64,
    pub seed: u64,
    pub odds: Vec<CompetitorOdds>,
}

impl OutcomeEstimate {
    /// Build ranked odds for every camel on `board` from a tally.
    #[must_use]
    pub fn from_tally(board: &Board, tally: &OutcomeTally, weights: &[u32], seed: u64) -> Self {
        let trials = tally.trials.max(1) as f64;

        let mut odds: Vec<CompetitorOdds> = board
            .competitors()
            .map(|c| {
                let leader_count = tally.leader_count(c.colour);
                let runner_up_count = tally.runner_up_count(c.colour);
                let p_leader = leader_count as f64 / trials;
                let p_runner_up = runner_up_count as f64 / trials;
                CompetitorOdds {
                    colour: c.colour,
                    leader_count,
                    runner_up_count,
                    p_leader,
                    p_runner_up,
                    scores: weights
                        .iter()
                        .map(|&weight| TicketScore {
                            weight,
                            expected: ticket_score(weight, p_leader, p_runner_up),
                        })
                        .collect(),
                }
            })
            .collect();

        // Integer counts give the same order as the probabilities without
        // float comparisons.
        odds.sort_by(|a, b| {
            (b.leader_count, b.runner_up_count, b.colour).cmp(&(a.leader_count, a.runner_up_count, a.colour))
        });

        Self {
            trials: tally.trials,
            seed,
            odds,
        }
    }

    /// Odds of one camel.
    #[must_use]
    pub fn get(&self, colour: Colour) -> Option<&CompetitorOdds> {
        self.odds.iter().find(|o| o.colour == colour)
    }
}

/// Estimate who finishes the leg first and second, with uniform play.
///
/// Fails if `config` doesn't pass [`SimConfig::validate`].
pub fn estimate_outcomes(board: &Board, config: &SimConfig) -> Result<OutcomeEstimate, ConfigError> {
    config.validate()?;
    Ok(estimate_outcomes_with(
        board,
        &Rollout::from_config(config),
        config,
        config.resolve_seed(),
    ))
}

/// Estimate finish odds with a custom rollout and explicit seed.
#[must_use]
pub fn estimate_outcomes_with<P: RolloutPolicy>(
    board: &Board,
    rollout: &Rollout<P>,
    config: &SimConfig,
    seed: u64,
) -> OutcomeEstimate {
    let tally = run_trials::<OutcomeTally, _>(config.trials, seed, 0, config.progress_interval, |tally, rng| {
        let finished = rollout.run(board.clone(), rng);
        tally.record(finished.leader(None), finished.runner_up());
    });

    log::debug!("outcome estimate: {} trials, seed {}", tally.trials, seed);
    OutcomeEstimate::from_tally(board, &tally, &config.payout_weights, seed)
}
