//! Trial tallies and the parallel trial loop.

use rayon::prelude::*;
use rustc_hash::FxHashMap;

use crate::core::{Colour, RaceRng};

/// Accumulator that can be split across workers and merged back.
pub trait Tally: Default + Send {
    /// Combine two partial tallies.
    fn merge(self, other: Self) -> Self;
}

/// Leader and runner-up counts over a batch of rollouts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OutcomeTally {
    /// Rollouts recorded.
    pub trials: u64,
    pub leader: FxHashMap<Colour, u64>,
    pub runner_up: FxHashMap<Colour, u64>,
}

impl OutcomeTally {
    /// Record one finished rollout.
    pub fn record(&mut self, leader: Option<Colour>, runner_up: Option<Colour>) {
        self.trials += 1;
        if let Some(colour) = leader {
            *self.leader.entry(colour).or_default() += 1;
        }
        if let Some(colour) = runner_up {
            *self.runner_up.entry(colour).or_default() += 1;
        }
    }

    /// Times `colour` finished first.
    #[must_use]
    pub fn leader_count(&self, colour: Colour) -> u64 {
        self.leader.get(&colour).copied().unwrap_or(0)
    }

    /// Times `colour` finished second.
    #[must_use]
    pub fn runner_up_count(&self, colour: Colour) -> u64 {
        self.runner_up.get(&colour).copied().unwrap_or(0)
    }
}

impl Tally for OutcomeTally {
    fn merge(mut self, other: Self) -> Self {
        self.trials += other.trials;
        for (colour, count) in other.leader {
            *self.leader.entry(colour).or_default() += count;
        }
        for (colour, count) in other.runner_up {
            *self.runner_up.entry(colour).or_default() += count;
        }
        self
    }
}

/// Summed terminal trigger counts of one marker option.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MarkerTally {
    pub trials: u64,
    pub triggers: u64,
}

impl MarkerTally {
    pub fn record(&mut self, triggers: u32) {
        self.trials += 1;
        self.triggers += u64::from(triggers);
    }

    /// Mean triggers per rollout.
    #[must_use]
    pub fn mean(&self) -> f64 {
        if self.trials == 0 {
            0.0
        } else {
            self.triggers as f64 / self.trials as f64
        }
    }
}

impl Tally for MarkerTally {
    fn merge(self, other: Self) -> Self {
        Self {
            trials: self.trials + other.trials,
            triggers: self.triggers + other.triggers,
        }
    }
}

/// Run `trials` independent trials on the rayon pool and merge their tallies.
///
/// Trial `i` draws from `RaceRng::stream(seed, first_stream + i)`, so the
/// result depends only on the seed, never on the thread count.
pub fn run_trials<T, F>(trials: u32, seed: u64, first_stream: u64, progress_interval: u32, trial: F) -> T
where
    T: Tally,
    F: Fn(&mut T, &mut RaceRng) + Sync + Send,
{
    (0..trials)
        .into_par_iter()
        .fold(T::default, |mut tally, i| {
            let mut rng = RaceRng::stream(seed, first_stream + u64::from(i));
            trial(&mut tally, &mut rng);
            if progress_interval > 0 && i > 0 && i % progress_interval == 0 {
                log::info!("Done {}", i);
            }
            tally
        })
        .reduce(T::default, T::merge)
}
