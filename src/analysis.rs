//! Random starting boards and which starting situations tend to win.
//!
//! Each trial deals a random board, notes every camel's [`StartProfile`]
//! (stack size, depth below the top, markers just ahead), plays one leg and
//! credits the winner's profile.

use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::core::{Board, Colour, ConfigError, Direction, RaceRng, SimConfig};
use crate::estimate::{run_trials, Tally};
use crate::rollout::Rollout;

/// Markers further ahead than this are ignored by profiles.
const PROFILE_LOOKAHEAD: i32 = 3;

/// Deal a random starting board.
///
/// Every colour goes on a random cell in `0..=max_start_position`, then up
/// to `max_markers` markers are dropped on random legal cells.
pub fn random_board<R: Rng + ?Sized>(config: &SimConfig, rng: &mut R) -> Board {
    let mut board = Board::new();
    for colour in Colour::ALL {
        let position = rng.gen_range(0..=config.max_start_position);
        let movable = config.all_movable || rng.gen_bool(0.5);
        board.add_competitor(colour, position, movable);
    }
    add_random_markers(&mut board, config, rng);
    board
}

/// Drop between 0 and `max_markers` markers on legal cells of `board`.
pub fn add_random_markers<R: Rng + ?Sized>(board: &mut Board, config: &SimConfig, rng: &mut R) {
    let count = rng.gen_range(0..=config.max_markers);
    for _ in 0..count {
        let options = board.legal_marker_positions(config.max_reach);
        let Some(&cell) = options.choose(rng) else {
            break;
        };
        let direction = if rng.gen_bool(0.5) {
            Direction::Forward
        } else {
            Direction::Backward
        };
        board.add_marker(cell, direction);
    }
}

/// Starting situation of one camel.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StartProfile {
    /// Camels on its cell, itself included.
    pub stack_size: usize,
    /// Camels above it.
    pub depth: usize,
    /// Markers 1 to 3 cells ahead: (distance, direction).
    pub markers_ahead: SmallVec<[(i32, Direction); 2]>,
}

impl StartProfile {
    /// Profile of `colour` on `board`, if it is there.
    #[must_use]
    pub fn of(board: &Board, colour: Colour) -> Option<Self> {
        let camel = board.competitor(colour)?;
        let stack_size = board.stack_size(camel.position);
        let markers_ahead = board
            .markers()
            .map(|m| (m.position - camel.position, m.direction))
            .filter(|(distance, _)| (1..=PROFILE_LOOKAHEAD).contains(distance))
            .collect();

        Some(Self {
            stack_size,
            depth: stack_size - camel.height as usize - 1,
            markers_ahead,
        })
    }
}

impl fmt::Display for StartProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "stack {} depth {} markers ", self.stack_size, self.depth)?;
        if self.markers_ahead.is_empty() {
            return f.write_str("none");
        }
        for (distance, direction) in &self.markers_ahead {
            write!(f, ".{}{}", distance, direction.symbol())?;
        }
        Ok(())
    }
}

/// Wins per starting profile.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StartAnalysis {
    pub trials: u64,
    pub wins: FxHashMap<StartProfile, u64>,
}

impl StartAnalysis {
    /// Profiles by win count, most first.
    #[must_use]
    pub fn ranked(&self) -> Vec<(&StartProfile, u64)> {
        let mut ranked: Vec<(&StartProfile, u64)> = self.wins.iter().map(|(p, &w)| (p, w)).collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked
    }

    /// Total wins credited (equals `trials` unless boards were empty).
    #[must_use]
    pub fn total_wins(&self) -> u64 {
        self.wins.values().sum()
    }
}

impl Tally for StartAnalysis {
    fn merge(mut self, other: Self) -> Self {
        self.trials += other.trials;
        for (profile, wins) in other.wins {
            *self.wins.entry(profile).or_default() += wins;
        }
        self
    }
}

/// Play one random leg and credit the winner's starting profile.
///
/// `config` must already be valid.
pub fn analyse_start(analysis: &mut StartAnalysis, config: &SimConfig, rng: &mut RaceRng) {
    let start = random_board(config, rng);
    let finished = Rollout::from_config(config).run(start.clone(), rng);

    analysis.trials += 1;
    if let Some(profile) = finished.leader(None).and_then(|winner| StartProfile::of(&start, winner)) {
        *analysis.wins.entry(profile).or_default() += 1;
    }
}

/// Run `config.trials` random legs and tabulate wins per starting profile.
pub fn analyse_starts(config: &SimConfig) -> Result<StartAnalysis, ConfigError> {
    config.validate()?;
    let seed = config.resolve_seed();
    let analysis = run_trials::<StartAnalysis, _>(config.trials, seed, 0, config.progress_interval, |analysis, rng| {
        analyse_start(analysis, config, rng)
    });
    log::debug!("start analysis: {} trials, {} profiles, seed {}", analysis.trials, analysis.wins.len(), seed);
    Ok(analysis)
}
