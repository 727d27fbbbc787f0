//! Reward scoring for challenge attempts.

use crate::generate::NavigationChallenge;
use rove_nav::{find_path, validate_path};
use rove_world::WorldSnapshot;

/// Graded outcome of one scored attempt.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RewardResult {
    /// Whether the attempt respected every movement rule.
    pub is_valid: bool,
    /// `optimal / taken` step ratio for valid attempts, `0.0` otherwise.
    ///
    /// Inherits the replayer's uncapped semantics: treat it as a
    /// similarity score, not a percentage.
    pub efficiency: f64,
    /// Progress credit along the optimal route.
    ///
    /// `Some(1.0)` for any valid attempt. For invalid attempts, the index
    /// of the last executed position that lies on the optimal route,
    /// divided by the optimal step count: how far along the ideal route
    /// the attempt stayed before diverging. `Some(0.0)` when the attempt
    /// never progressed past the start cell of the ideal route, and `None`
    /// when no non-trivial optimal route exists to measure against.
    pub cross_score: Option<f64>,
}

/// Score an arrow-string attempt against a challenge.
///
/// Delegates replay to [`validate_path`] on the same snapshot the
/// challenge was generated from. Valid attempts earn their efficiency and
/// full cross-score credit; invalid attempts earn zero efficiency and
/// fractional cross-score credit for the portion of the optimal route they
/// tracked.
pub fn score_attempt(
    world: &WorldSnapshot,
    challenge: &NavigationChallenge,
    arrows: &str,
) -> RewardResult {
    let result = validate_path(world, challenge.start, challenge.target, arrows);

    if result.is_valid {
        return RewardResult {
            is_valid: true,
            efficiency: result.efficiency.unwrap_or(0.0),
            cross_score: Some(1.0),
        };
    }

    let cross_score = find_path(world, challenge.start, challenge.target)
        .filter(|optimal| optimal.step_count() >= 1)
        .map(|optimal| {
            let last_cross = result
                .path_taken
                .iter()
                .rposition(|&pos| optimal.index_of(pos).is_some());
            match last_cross {
                Some(taken_idx) if taken_idx > 0 => {
                    let pos = result.path_taken[taken_idx];
                    match optimal.index_of(pos) {
                        Some(optimal_idx) => optimal_idx as f64 / optimal.step_count() as f64,
                        None => 0.0,
                    }
                }
                _ => 0.0,
            }
        });

    RewardResult {
        is_valid: false,
        efficiency: 0.0,
        cross_score,
    }
}
