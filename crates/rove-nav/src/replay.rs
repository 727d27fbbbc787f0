//! Step-by-step replay of an arrow-encoded move sequence.

use crate::astar::find_path;
use crate::error::ReplayError;
use crate::policy::{is_walkable, DoorRule};
use rove_core::{CellKind, Direction, Position};
use rove_world::WorldSnapshot;

/// Outcome of replaying one move sequence against a snapshot.
///
/// `path_taken` always begins with `start` and reflects exactly the prefix
/// of moves that executed; when `is_valid` is false, replay stopped at the
/// first illegal move and `error` says why.
#[derive(Clone, Debug, PartialEq)]
pub struct PathResult {
    /// Where the attempt began.
    pub start: Position,
    /// Where the attempt was supposed to end.
    pub target: Position,
    /// Where the agent actually ended up.
    pub final_position: Position,
    /// Every cell visited, start included.
    pub path_taken: Vec<Position>,
    /// `false` once any move fails.
    pub is_valid: bool,
    /// Whether `final_position == target`.
    pub reached_target: bool,
    /// Moves successfully executed.
    pub steps_taken: usize,
    /// The failure that stopped replay, if any.
    pub error: Option<ReplayError>,
    /// `optimal_length / steps_taken` for valid attempts.
    ///
    /// Deliberately uncapped: this is a similarity score against the
    /// engine's own optimal route, not a percentage.
    pub efficiency: Option<f64>,
    /// Step count of the optimal route, when one exists.
    pub optimal_length: Option<usize>,
}

impl PathResult {
    fn pending(start: Position, target: Position) -> Self {
        Self {
            start,
            target,
            final_position: start,
            path_taken: vec![start],
            is_valid: true,
            reached_target: false,
            steps_taken: 0,
            error: None,
            efficiency: None,
            optimal_length: None,
        }
    }

    fn rejected(start: Position, target: Position, error: ReplayError) -> Self {
        Self {
            is_valid: false,
            error: Some(error),
            ..Self::pending(start, target)
        }
    }

    /// One-line human-readable appraisal of the attempt.
    ///
    /// Graded bands mirror how episode drivers report back to players:
    /// optimal, excellent (≥ 0.8), good (≥ 0.6), could-be-better (≥ 0.4),
    /// and try-a-shorter-route below that, with dedicated lines for
    /// invalid attempts and attempts that never arrived.
    pub fn appraisal(&self) -> String {
        if !self.is_valid {
            let reason = self
                .error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "unknown error".to_string());
            return format!("Invalid path: {reason}");
        }
        if !self.reached_target {
            return format!("Did not reach target. Ended at {}", self.final_position);
        }
        let Some(efficiency) = self.efficiency else {
            return "Reached target (efficiency unknown)".to_string();
        };
        let optimal = self.optimal_length.unwrap_or(0);
        if efficiency >= 1.0 {
            format!("Perfect! Optimal path in {} steps", self.steps_taken)
        } else if efficiency >= 0.8 {
            format!(
                "Excellent! {:.1}% efficiency ({} steps, optimal: {optimal})",
                efficiency * 100.0,
                self.steps_taken
            )
        } else if efficiency >= 0.6 {
            format!(
                "Good path. {:.1}% efficiency ({} steps, optimal: {optimal})",
                efficiency * 100.0,
                self.steps_taken
            )
        } else if efficiency >= 0.4 {
            format!(
                "Could be better. {:.1}% efficiency ({} steps, optimal: {optimal})",
                efficiency * 100.0,
                self.steps_taken
            )
        } else {
            format!(
                "Try a shorter route. {:.1}% efficiency ({} steps, optimal: {optimal})",
                efficiency * 100.0,
                self.steps_taken
            )
        }
    }
}

/// Replay `arrows` from `start` against the snapshot, judging it against
/// `target`.
///
/// Preconditions first: both `start` and `target` must be walkable under
/// the strict policy ([`DoorRule::Blocking`]); otherwise the result is
/// invalid before any step runs. Each recognized symbol then moves the
/// agent one cell. A destination holding a closed door is entered
/// unconditionally (replay models an implicit auto-open, with no separate
/// door action required) while every other destination must satisfy the
/// strict policy. The first unrecognized symbol or blocked move halts
/// replay; `path_taken` keeps only the executed prefix.
///
/// For valid attempts the optimal route is computed to fill
/// `optimal_length` and `efficiency` (`1.0` for a zero-step attempt that
/// was already at the target, `0.0` for a zero-step attempt that was not).
pub fn validate_path(
    world: &WorldSnapshot,
    start: Position,
    target: Position,
    arrows: &str,
) -> PathResult {
    if !is_walkable(world, start, DoorRule::Blocking) {
        return PathResult::rejected(start, target, ReplayError::StartNotWalkable {
            position: start,
        });
    }
    if !is_walkable(world, target, DoorRule::Blocking) {
        return PathResult::rejected(start, target, ReplayError::TargetNotWalkable {
            position: target,
        });
    }

    let mut result = PathResult::pending(start, target);
    let mut current = start;

    for (index, symbol) in arrows.chars().enumerate() {
        let Some(direction) = Direction::from_arrow(symbol) else {
            result.is_valid = false;
            result.error = Some(ReplayError::UnknownSymbol { symbol, index });
            break;
        };

        let next = current.step(direction);
        let auto_open = world.cell(next) == Some(CellKind::ClosedDoor);
        if !auto_open && !is_walkable(world, next, DoorRule::Blocking) {
            result.is_valid = false;
            result.error = Some(ReplayError::Blocked {
                direction,
                from: current,
                to: next,
            });
            break;
        }

        current = next;
        result.path_taken.push(current);
        result.steps_taken += 1;
    }

    result.final_position = current;
    result.reached_target = current == target;

    if result.is_valid {
        if let Some(optimal) = find_path(world, start, target) {
            result.optimal_length = Some(optimal.step_count());
            result.efficiency = Some(if result.steps_taken > 0 {
                optimal.step_count() as f64 / result.steps_taken as f64
            } else if result.reached_target {
                1.0
            } else {
                0.0
            });
        }
    }

    result
}
