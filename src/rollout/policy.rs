//! Rollout policies: which action to take next in a simulated leg.
//!
//! Policies are trait-based so the uniform random play used for estimates
//! can be swapped for scripted or weighted play in tests and experiments.

use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};

use rand::seq::SliceRandom;
use rand::Rng;

use crate::core::{Board, Colour, Direction, MarkerOption, SimConfig};

/// One step of a rollout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RaceAction {
    /// Roll `colour`'s die and move it `roll` cells.
    Move { colour: Colour, roll: i32 },
    /// Drop a marker; doesn't use up a die.
    PlaceMarker(MarkerOption),
}

/// Policy for choosing the next rollout action.
pub trait RolloutPolicy: Send + Sync {
    /// Choose an action given the camels still waiting to move.
    ///
    /// Returns `None` only when `movable` is empty and no marker should be
    /// placed.
    fn choose<R: Rng + ?Sized>(
        &self,
        board: &Board,
        movable: &[Colour],
        rng: &mut R,
    ) -> Option<RaceAction>;
}

// =============================================================================
// Uniform Policy
// =============================================================================

/// Uniform random play.
///
/// When exploring, flips a `marker_probability` coin each step and, if it
/// comes up and a legal cell exists, places a marker with a random
/// direction. Otherwise moves a random waiting camel by a random roll.
#[derive(Clone, Debug, PartialEq)]
pub struct UniformPolicy {
    pub explore_markers: bool,
    pub marker_probability: f64,
    pub max_reach: i32,
    pub min_roll: i32,
    pub max_roll: i32,
}

impl Default for UniformPolicy {
    fn default() -> Self {
        Self::from_config(&SimConfig::default())
    }
}

impl UniformPolicy {
    #[must_use]
    pub fn from_config(config: &SimConfig) -> Self {
        Self {
            explore_markers: config.explore_markers,
            marker_probability: config.marker_probability,
            max_reach: config.max_reach,
            min_roll: config.min_roll,
            max_roll: config.max_roll,
        }
    }

    /// Same policy with marker exploration disabled.
    #[must_use]
    pub fn race_only(mut self) -> Self {
        self.explore_markers = false;
        self
    }

    fn random_marker<R: Rng + ?Sized>(&self, board: &Board, rng: &mut R) -> Option<MarkerOption> {
        let options = board.legal_marker_positions(self.max_reach);
        let position = *options.choose(rng)?;
        let direction = *Direction::BOTH.choose(rng)?;
        Some(MarkerOption::new(position, direction))
    }
}

impl RolloutPolicy for UniformPolicy {
    fn choose<R: Rng + ?Sized>(
        &self,
        board: &Board,
        movable: &[Colour],
        rng: &mut R,
    ) -> Option<RaceAction> {
        if movable.is_empty() {
            return None;
        }

        if self.explore_markers && rng.gen_bool(self.marker_probability) {
            if let Some(option) = self.random_marker(board, rng) {
                return Some(RaceAction::PlaceMarker(option));
            }
        }

        let colour = *movable.choose(rng)?;
        let roll = rng.gen_range(self.min_roll..=self.max_roll);
        Some(RaceAction::Move { colour, roll })
    }
}

// =============================================================================
// Scripted Policy
// =============================================================================

/// Plays a fixed list of actions, then stops.
///
/// Replays a known leg exactly, e.g. to reproduce a reported board or to pin
/// an estimate to a single outcome. Moves for camels that are no longer
/// waiting are skipped.
#[derive(Debug, Default)]
pub struct ScriptedPolicy {
    script: Mutex<VecDeque<RaceAction>>,
}

impl ScriptedPolicy {
    #[must_use]
    pub fn new(actions: impl IntoIterator<Item = RaceAction>) -> Self {
        Self {
            script: Mutex::new(actions.into_iter().collect()),
        }
    }

    /// Actions not yet played.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.script.lock().unwrap_or_else(PoisonError::into_inner).len()
    }
}

impl RolloutPolicy for ScriptedPolicy {
    fn choose<R: Rng + ?Sized>(
        &self,
        _board: &Board,
        movable: &[Colour],
        _rng: &mut R,
    ) -> Option<RaceAction> {
        // The queue is only ever popped, so a poisoned lock still holds a
        // valid script.
        let mut script = self.script.lock().unwrap_or_else(PoisonError::into_inner);
        while let Some(action) = script.pop_front() {
            match action {
                RaceAction::Move { colour, .. } if !movable.contains(&colour) => continue,
                _ => return Some(action),
            }
        }
        None
    }
}
