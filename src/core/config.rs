//! Simulation configuration.
//!
//! Every knob of the estimator lives here: trial counts, dice, marker
//! placement reach, payout weights, and the random start generator used by
//! the analysis mode. Values load from JSON with missing fields falling back
//! to the defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Simulation configuration parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Rollouts per outcome estimate.
    pub trials: u32,

    /// Rollouts per marker placement option.
    pub marker_trials: u32,

    /// Marker placement reaches this many cells past the lead camel
    /// (exclusive).
    pub max_reach: i32,

    /// Smallest die face.
    pub min_roll: i32,

    /// Largest die face.
    pub max_roll: i32,

    /// Payout for a winning ticket, one entry per ticket still available.
    pub payout_weights: Vec<u32>,

    /// Let rollouts place random markers between camel moves.
    pub explore_markers: bool,

    /// Chance of placing a marker instead of moving, when exploring.
    pub marker_probability: f64,

    /// Base seed. `None` draws one from entropy.
    pub seed: Option<u64>,

    /// Log progress every this many trials (0 = never).
    pub progress_interval: u32,

    /// Random starts place camels on `0..=max_start_position`.
    pub max_start_position: i32,

    /// Random starts place up to this many markers.
    pub max_markers: u32,

    /// Random starts mark every camel movable; otherwise a coin flip each.
    pub all_movable: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            trials: 50_000,
            marker_trials: 5_000,
            max_reach: 4,
            min_roll: 1,
            max_roll: 3,
            payout_weights: vec![5, 3, 2],
            explore_markers: true,
            marker_probability: 0.5,
            seed: None,
            progress_interval: 10_000,
            max_start_position: 0,
            max_markers: 4,
            all_movable: true,
        }
    }
}

impl SimConfig {
    /// Load from a JSON file and validate.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Parse from JSON text and validate.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check values that would make estimation meaningless.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.trials == 0 {
            return Err(ConfigError::Invalid("trials must be positive".into()));
        }
        if self.marker_trials == 0 {
            return Err(ConfigError::Invalid("marker_trials must be positive".into()));
        }
        if self.min_roll > self.max_roll {
            return Err(ConfigError::Invalid(format!(
                "empty roll range {}..={}",
                self.min_roll, self.max_roll
            )));
        }
        if !(0.0..=1.0).contains(&self.marker_probability) {
            return Err(ConfigError::Invalid(format!(
                "marker_probability {} outside [0, 1]",
                self.marker_probability
            )));
        }
        if self.payout_weights.is_empty() {
            return Err(ConfigError::Invalid("payout_weights is empty".into()));
        }
        if self.max_start_position < 0 {
            return Err(ConfigError::Invalid("max_start_position is negative".into()));
        }
        Ok(())
    }

    /// Seed to use for a run, drawing from entropy when unset.
    #[must_use]
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }

    /// Set the outcome trial count.
    #[must_use]
    pub fn with_trials(mut self, trials: u32) -> Self {
        self.trials = trials;
        self
    }

    /// Set the per-option marker trial count.
    #[must_use]
    pub fn with_marker_trials(mut self, trials: u32) -> Self {
        self.marker_trials = trials;
        self
    }

    /// Set the marker placement reach.
    #[must_use]
    pub fn with_max_reach(mut self, reach: i32) -> Self {
        self.max_reach = reach;
        self
    }

    /// Set the die faces.
    #[must_use]
    pub fn with_rolls(mut self, min: i32, max: i32) -> Self {
        self.min_roll = min;
        self.max_roll = max;
        self
    }

    /// Set the ticket payouts.
    #[must_use]
    pub fn with_payout_weights(mut self, weights: Vec<u32>) -> Self {
        self.payout_weights = weights;
        self
    }

    /// Turn marker exploration on or off.
    #[must_use]
    pub fn with_explore_markers(mut self, explore: bool) -> Self {
        self.explore_markers = explore;
        self
    }

    /// Set the base seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
