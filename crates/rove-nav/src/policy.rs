//! The walkability policy.
//!
//! One predicate, one switch. Both the pathfinder and the replayer decide
//! cell enterability here; they are allowed to differ only in the
//! [`DoorRule`] they pass, never in cell logic of their own.

use rove_core::{CellKind, Direction, Position};
use rove_world::WorldSnapshot;
use smallvec::SmallVec;

/// How closed doors are treated by a walkability query.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DoorRule {
    /// A closed door counts as walkable; the agent could open it en
    /// route. Used by path search.
    Passable,
    /// A closed door blocks. Used for replay start/target preconditions.
    Blocking,
}

/// May an agent occupy `pos` under the given door rule?
///
/// Fails closed for any position outside the grid. Room and open-door
/// cells are always walkable; wall and outside cells never are; a closed
/// door is walkable only under [`DoorRule::Passable`].
///
/// # Examples
///
/// ```
/// use rove_core::{CellKind, Position};
/// use rove_nav::{is_walkable, DoorRule};
/// use rove_world::WorldSnapshot;
/// use indexmap::IndexMap;
///
/// let snap = WorldSnapshot::from_parts(
///     2,
///     1,
///     vec![CellKind::Room(0.into()), CellKind::ClosedDoor],
///     IndexMap::new(),
///     Vec::new(),
///     Position::new(0, 0),
/// )
/// .unwrap();
///
/// let door = Position::new(1, 0);
/// assert!(is_walkable(&snap, door, DoorRule::Passable));
/// assert!(!is_walkable(&snap, door, DoorRule::Blocking));
/// ```
pub fn is_walkable(world: &WorldSnapshot, pos: Position, doors: DoorRule) -> bool {
    match world.cell(pos) {
        Some(CellKind::Room(_)) | Some(CellKind::OpenDoor) => true,
        Some(CellKind::ClosedDoor) => matches!(doors, DoorRule::Passable),
        Some(CellKind::Wall) | Some(CellKind::Outside) | None => false,
    }
}

/// Walkable cardinal neighbours of `pos`, in [`Direction::ALL`] order.
///
/// At most four entries, so the result stays inline.
pub fn walkable_neighbours(
    world: &WorldSnapshot,
    pos: Position,
    doors: DoorRule,
) -> SmallVec<[Position; 4]> {
    Direction::ALL
        .into_iter()
        .map(|dir| pos.step(dir))
        .filter(|&next| is_walkable(world, next, doors))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rove_test_utils::SnapshotBuilder;

    #[test]
    fn rooms_and_open_doors_always_walkable() {
        let snap = SnapshotBuilder::from_ascii(".d").build();
        for rule in [DoorRule::Passable, DoorRule::Blocking] {
            assert!(is_walkable(&snap, Position::new(0, 0), rule));
            assert!(is_walkable(&snap, Position::new(1, 0), rule));
        }
    }

    #[test]
    fn walls_and_outside_never_walkable() {
        let snap = SnapshotBuilder::from_ascii("# ").build();
        for rule in [DoorRule::Passable, DoorRule::Blocking] {
            assert!(!is_walkable(&snap, Position::new(0, 0), rule));
            assert!(!is_walkable(&snap, Position::new(1, 0), rule));
        }
    }

    #[test]
    fn closed_door_walkable_only_under_passable_rule() {
        let snap = SnapshotBuilder::from_ascii(".D.").build();
        let door = Position::new(1, 0);
        assert!(is_walkable(&snap, door, DoorRule::Passable));
        assert!(!is_walkable(&snap, door, DoorRule::Blocking));
    }

    #[test]
    fn out_of_bounds_fails_closed() {
        let snap = SnapshotBuilder::open(3, 3).build();
        for pos in [
            Position::new(-1, 0),
            Position::new(0, -1),
            Position::new(3, 0),
            Position::new(0, 3),
        ] {
            assert!(!is_walkable(&snap, pos, DoorRule::Passable));
        }
    }

    #[test]
    fn neighbours_follow_expansion_order() {
        let snap = SnapshotBuilder::open(3, 3).build();
        let centre = Position::new(1, 1);
        let n = walkable_neighbours(&snap, centre, DoorRule::Blocking);
        assert_eq!(
            n.as_slice(),
            [
                Position::new(1, 0), // up
                Position::new(1, 2), // down
                Position::new(0, 1), // left
                Position::new(2, 1), // right
            ]
        );
    }

    #[test]
    fn neighbours_respect_door_rule() {
        let snap = SnapshotBuilder::from_ascii(".D.").build();
        let start = Position::new(0, 0);
        assert_eq!(
            walkable_neighbours(&snap, start, DoorRule::Passable).as_slice(),
            [Position::new(1, 0)]
        );
        assert!(walkable_neighbours(&snap, start, DoorRule::Blocking).is_empty());
    }
}
