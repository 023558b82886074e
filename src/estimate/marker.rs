//! Expected landings per marker placement.

use serde::{Deserialize, Serialize};

use super::stats::{run_trials, MarkerTally};
use crate::core::{Board, ConfigError, Direction, MarkerOption, SimConfig};
use crate::rollout::{Rollout, RolloutPolicy};

/// Estimated value of one placement option.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarkerOdds {
    pub option: MarkerOption,
    pub total_triggers: u64,
    /// Mean number of camels landing on the marker per leg.
    pub expected_triggers: f64,
}

/// Result of a marker estimate, best option first.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarkerEstimate {
    pub trials_per_option: u64,
    pub seed: u64,
    pub odds: Vec<MarkerOdds>,
}

impl MarkerEstimate {
    /// The best placement, if any was legal.
    #[must_use]
    pub fn best(&self) -> Option<&MarkerOdds> {
        self.odds.first()
    }

    /// Odds of one option.
    #[must_use]
    pub fn get(&self, option: MarkerOption) -> Option<&MarkerOdds> {
        self.odds.iter().find(|o| o.option == option)
    }
}

/// Every legal (cell, direction) placement on `board`.
#[must_use]
pub fn marker_options(board: &Board, max_reach: i32) -> Vec<MarkerOption> {
    board
        .legal_marker_positions(max_reach)
        .into_iter()
        .flat_map(|position| Direction::BOTH.map(|direction| MarkerOption::new(position, direction)))
        .collect()
}

/// Estimate how often each legal marker placement gets landed on.
///
/// Fails if `config` doesn't pass [`SimConfig::validate`].
pub fn estimate_markers(board: &Board, config: &SimConfig) -> Result<MarkerEstimate, ConfigError> {
    config.validate()?;
    Ok(estimate_markers_with(
        board,
        &Rollout::from_config(config),
        config,
        config.resolve_seed(),
    ))
}

/// Estimate marker placements with a custom rollout and explicit seed.
#[must_use]
pub fn estimate_markers_with<P: RolloutPolicy>(
    board: &Board,
    rollout: &Rollout<P>,
    config: &SimConfig,
    seed: u64,
) -> MarkerEstimate {
    let per_option = u64::from(config.marker_trials);

    let mut odds: Vec<MarkerOdds> = marker_options(board, config.max_reach)
        .into_iter()
        .enumerate()
        .map(|(index, option)| {
            let mut start = board.clone();
            start.add_marker(option.position, option.direction);

            let tally = run_trials::<MarkerTally, _>(
                config.marker_trials,
                seed,
                index as u64 * per_option,
                0,
                |tally, rng| {
                    let finished = rollout.run(start.clone(), rng);
                    tally.record(finished.marker(option.position).map_or(0, |m| m.triggers));
                },
            );

            log::debug!("marker {}: {:.3} landings", option, tally.mean());
            MarkerOdds {
                option,
                total_triggers: tally.triggers,
                expected_triggers: tally.mean(),
            }
        })
        .collect();

    // Every option runs the same number of trials, so totals rank like means.
    odds.sort_by(|a, b| (b.total_triggers, b.option).cmp(&(a.total_triggers, a.option)));

    MarkerEstimate {
        trials_per_option: per_option,
        seed,
        odds,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Colour;

    #[test]
    fn test_marker_options_cover_both_directions() {
        let mut board = Board::new();
        board.add_competitor(Colour::Green, 0, true);

        let options = marker_options(&board, 4);
        assert_eq!(
            options,
            vec![
                MarkerOption::new(1, Direction::Forward),
                MarkerOption::new(1, Direction::Backward),
                MarkerOption::new(2, Direction::Forward),
                MarkerOption::new(2, Direction::Backward),
                MarkerOption::new(3, Direction::Forward),
                MarkerOption::new(3, Direction::Backward),
            ]
        );
    }

    #[test]
    fn test_no_options_no_odds() {
        let config = SimConfig::default().with_marker_trials(10).with_seed(1);
        let estimate = estimate_markers(&Board::new(), &config).unwrap();
        assert!(estimate.odds.is_empty());
        assert!(estimate.best().is_none());
    }

    #[test]
    fn test_bad_marker_probability_rejected() {
        let mut board = Board::new();
        board.add_competitor(Colour::Green, 0, true);

        let mut config = SimConfig::default().with_marker_trials(10);
        config.marker_probability = -0.1;
        assert!(matches!(estimate_markers(&board, &config), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_single_camel_marker_odds() {
        // One camel at 0 rolling 1..=3 lands on each of cells 1-3 a third
        // of the time.
        let mut board = Board::new();
        board.add_competitor(Colour::Green, 0, true);

        let config = SimConfig::default()
            .with_marker_trials(3_000)
            .with_explore_markers(false)
            .with_seed(21);
        let estimate = estimate_markers(&board, &config).unwrap();

        assert_eq!(estimate.odds.len(), 6);
        for odds in &estimate.odds {
            assert!((odds.expected_triggers - 1.0 / 3.0).abs() < 0.05, "{:?}", odds);
        }
        assert!(estimate.odds.windows(2).all(|w| w[0].total_triggers >= w[1].total_triggers));
    }
}
