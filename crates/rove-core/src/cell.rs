//! Per-cell classification of a grid layout.

use crate::id::RoomId;
use std::fmt;

/// What occupies a single grid cell.
///
/// Exactly one classification applies per cell, and a captured snapshot
/// never changes classification mid-query. Doors come in two states because
/// the policy layer treats them differently: an open door behaves like a
/// room cell, a closed door is passable only under the permissive rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellKind {
    /// Solid wall; never enterable.
    Wall,
    /// Space outside the layout footprint; never enterable.
    Outside,
    /// A door in its closed state.
    ClosedDoor,
    /// A door in its open state; enterable like a room cell.
    OpenDoor,
    /// Interior floor belonging to the identified room.
    Room(RoomId),
}

impl CellKind {
    /// `true` for either door state.
    pub const fn is_door(self) -> bool {
        matches!(self, CellKind::ClosedDoor | CellKind::OpenDoor)
    }

    /// `true` for interior room floor.
    pub const fn is_room(self) -> bool {
        matches!(self, CellKind::Room(_))
    }
}

impl fmt::Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellKind::Wall => write!(f, "wall"),
            CellKind::Outside => write!(f, "outside"),
            CellKind::ClosedDoor => write!(f, "closed door"),
            CellKind::OpenDoor => write!(f, "open door"),
            CellKind::Room(id) => write!(f, "room {id}"),
        }
    }
}
