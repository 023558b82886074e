//! Single-leg playout.

use rand::Rng;
use smallvec::SmallVec;

use super::policy::{RaceAction, RolloutPolicy, UniformPolicy};
use crate::core::{Board, Colour, SimConfig};

/// Counters from one rollout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RolloutStats {
    /// Dice rolled.
    pub moves: u32,
    /// Markers dropped by the policy.
    pub markers_placed: u32,
}

/// Plays a board forward until every waiting camel has moved.
#[derive(Clone, Debug, Default)]
pub struct Rollout<P = UniformPolicy> {
    policy: P,
}

impl Rollout<UniformPolicy> {
    /// Uniform random rollout configured from `config`.
    #[must_use]
    pub fn from_config(config: &SimConfig) -> Self {
        Self::new(UniformPolicy::from_config(config))
    }
}

impl<P: RolloutPolicy> Rollout<P> {
    #[must_use]
    pub fn new(policy: P) -> Self {
        Self { policy }
    }

    /// The policy choosing actions.
    #[must_use]
    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Resolve `board` and return it.
    ///
    /// The camels that move are those flagged movable when the rollout
    /// starts; each moves exactly once.
    pub fn run<R: Rng + ?Sized>(&self, board: Board, rng: &mut R) -> Board {
        self.run_with_stats(board, rng).0
    }

    /// Resolve `board`, also returning step counters.
    pub fn run_with_stats<R: Rng + ?Sized>(
        &self,
        mut board: Board,
        rng: &mut R,
    ) -> (Board, RolloutStats) {
        let mut waiting: SmallVec<[Colour; 5]> = board.movable_colours();
        let mut stats = RolloutStats::default();

        while !waiting.is_empty() {
            let Some(action) = self.policy.choose(&board, &waiting, rng) else {
                break;
            };

            match action {
                RaceAction::PlaceMarker(option) => {
                    board.add_marker(option.position, option.direction);
                    stats.markers_placed += 1;
                }
                RaceAction::Move { colour, roll } => {
                    board.apply_move(colour, roll);
                    waiting.retain(|c| *c != colour);
                    stats.moves += 1;
                }
            }
        }

        (board, stats)
    }
}

/// Resolve `board` with uniform random play.
pub fn rollout<R: Rng + ?Sized>(board: Board, config: &SimConfig, rng: &mut R) -> Board {
    Rollout::from_config(config).run(board, rng)
}
