//! Challenge selection and packaging.

use rand::RngExt;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rove_core::{CellKind, ObjectId, Position};
use rove_nav::{find_path, Path};
use rove_world::{WorldObject, WorldSnapshot};

/// A generated navigation task: start, target object, optimal solution.
///
/// Invariants: the optimal path is a true shortest route under the
/// door-permissive policy, and it has at least one step: the generator
/// never emits a challenge whose target is the cell the agent already
/// stands on.
#[derive(Clone, Debug, PartialEq)]
pub struct NavigationChallenge {
    /// Agent position the attempt must begin from.
    pub start: Position,
    /// Cell of the target object.
    pub target: Position,
    /// Id of the target object.
    pub target_object: ObjectId,
    /// Name of the target object.
    pub target_name: String,
    /// A shortest route from start to target.
    pub optimal_path: Path,
    /// Step count of the optimal route.
    pub optimal_steps: usize,
    /// The optimal route in arrow notation.
    pub optimal_arrows: String,
    /// Human-readable task statement.
    pub description: String,
}

/// Generates reachability-guaranteed challenges from a frozen snapshot.
///
/// Candidate targets are the snapshot's top-level objects; anything
/// listed inside a container is excluded, since a contained object has no
/// meaningful cell of its own. Each candidate is pathed to before the
/// draw, so whatever the seed picks is already known solvable.
pub struct ChallengeGenerator<'a> {
    world: &'a WorldSnapshot,
}

impl<'a> ChallengeGenerator<'a> {
    /// Create a generator over a snapshot.
    pub fn new(world: &'a WorldSnapshot) -> Self {
        Self { world }
    }

    /// Generate a challenge, reproducibly for the given seed.
    ///
    /// Returns `None` when the snapshot has no objects, no top-level
    /// objects, or no top-level object with a solvable non-trivial route
    /// from the agent position — an expected outcome in degenerate
    /// layouts, not an error. Retrying with another seed is the caller's
    /// call.
    pub fn generate(&self, seed: u64) -> Option<NavigationChallenge> {
        let start = self.world.agent_position();

        let candidates: Vec<(&WorldObject, Path)> = self
            .world
            .top_level_objects()
            .filter_map(|obj| {
                let path = find_path(self.world, start, obj.position)?;
                (path.cells().len() >= 2).then_some((obj, path))
            })
            .collect();
        if candidates.is_empty() {
            return None;
        }

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let (target_obj, optimal_path) = &candidates[rng.random_range(0..candidates.len())];

        let optimal_arrows = optimal_path.arrows();
        let description = self.describe(target_obj.name.as_str(), target_obj.position);

        Some(NavigationChallenge {
            start,
            target: target_obj.position,
            target_object: target_obj.id,
            target_name: target_obj.name.clone(),
            optimal_path: optimal_path.clone(),
            optimal_steps: optimal_path.step_count(),
            optimal_arrows,
            description,
        })
    }

    /// Task statement, room-aware when the target's room has a name.
    fn describe(&self, object_name: &str, target: Position) -> String {
        if let Some(CellKind::Room(room)) = self.world.cell(target) {
            if let Some(room_name) = self.world.room_name(room) {
                return format!("Navigate to the {object_name} in the {room_name}");
            }
        }
        format!("Navigate to the {object_name}")
    }
}
