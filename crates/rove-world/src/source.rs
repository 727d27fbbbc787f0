//! The read-only interface to the external simulation.

use crate::object::WorldObject;
use rove_core::{CellKind, Position, RoomId};

/// Narrow read-only view of a live grid-world simulation.
///
/// This is the only seam between the navigation engine and whatever
/// produces worlds (a procedural generator, a replayed episode, a hand-built
/// fixture). [`WorldSnapshot::capture`](crate::WorldSnapshot::capture) reads
/// the entire source exactly once at construction time; nothing in this
/// workspace calls back into it mid-query, and nothing here ever mutates
/// the simulation.
pub trait WorldSource {
    /// Grid width in cells.
    fn width(&self) -> u32;

    /// Grid height in cells.
    fn height(&self) -> u32;

    /// Classification of the cell at `(x, y)`.
    ///
    /// Called only with `x < width()` and `y < height()`.
    fn cell(&self, x: u32, y: u32) -> CellKind;

    /// Human-readable name for a room, if the simulation has one.
    fn room_name(&self, room: RoomId) -> Option<String>;

    /// Every object currently placed in the world, contained ones included.
    fn objects(&self) -> Vec<WorldObject>;

    /// Current agent position.
    fn agent_position(&self) -> Position;
}
