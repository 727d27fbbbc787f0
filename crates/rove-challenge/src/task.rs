//! A frozen snapshot paired with one generated challenge.

use crate::generate::{ChallengeGenerator, NavigationChallenge};
use crate::score::{score_attempt, RewardResult};
use rove_nav::{validate_path, PathResult};
use rove_world::WorldSnapshot;

/// An episode-ready navigation task.
///
/// Owns the snapshot and the challenge generated from it, so RL-style
/// harnesses can hold a single value per episode and score as many
/// candidate attempts against it as they like. The snapshot is immutable;
/// scoring many attempts in parallel against a shared `NavigationTask`
/// needs no locking.
#[derive(Clone, Debug)]
pub struct NavigationTask {
    world: WorldSnapshot,
    challenge: NavigationChallenge,
}

impl NavigationTask {
    /// Generate a challenge from the snapshot and bundle the two.
    ///
    /// Returns `None` when the snapshot admits no challenge (see
    /// [`ChallengeGenerator::generate`]); the caller decides whether to
    /// retry with another seed or another world.
    pub fn new(world: WorldSnapshot, seed: u64) -> Option<Self> {
        let challenge = ChallengeGenerator::new(&world).generate(seed)?;
        Some(Self { world, challenge })
    }

    /// The frozen world this task runs in.
    pub fn world(&self) -> &WorldSnapshot {
        &self.world
    }

    /// The challenge to solve.
    pub fn challenge(&self) -> &NavigationChallenge {
        &self.challenge
    }

    /// Replay an attempt against the challenge without grading it.
    pub fn validate(&self, arrows: &str) -> PathResult {
        validate_path(
            &self.world,
            self.challenge.start,
            self.challenge.target,
            arrows,
        )
    }

    /// Grade an attempt against the challenge.
    pub fn score(&self, arrows: &str) -> RewardResult {
        score_attempt(&self.world, &self.challenge, arrows)
    }
}
