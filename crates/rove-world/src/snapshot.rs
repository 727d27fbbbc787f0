//! Frozen, validated view of one world state.

use crate::error::SnapshotError;
use crate::object::WorldObject;
use crate::source::WorldSource;
use indexmap::{IndexMap, IndexSet};
use rove_core::{CellKind, ObjectId, Position, RoomId};

/// An immutable snapshot of a grid world.
///
/// Captured once from a [`WorldSource`] and never mutated afterwards, so
/// any number of queries — pathfinding, replay, challenge generation,
/// scoring — may run against the same snapshot concurrently without
/// locking. Object and room iteration follow capture order, never hash
/// order, which keeps seeded challenge selection reproducible.
#[derive(Clone, Debug)]
pub struct WorldSnapshot {
    width: u32,
    height: u32,
    cells: Vec<CellKind>,
    room_names: IndexMap<RoomId, String>,
    objects: IndexMap<ObjectId, WorldObject>,
    contained: IndexSet<ObjectId>,
    agent: Position,
}

impl WorldSnapshot {
    /// Capture a snapshot from a live source.
    ///
    /// Reads dimensions, every cell, the name of every room id that appears
    /// in the grid (first-seen order in a row-major scan), the full object
    /// list, and the agent position. This is the single point where the
    /// external collaborator is consulted.
    pub fn capture(source: &impl WorldSource) -> Result<Self, SnapshotError> {
        let width = source.width();
        let height = source.height();
        let mut cells = Vec::with_capacity(width as usize * height as usize);
        let mut room_names = IndexMap::new();
        for y in 0..height {
            for x in 0..width {
                let kind = source.cell(x, y);
                if let CellKind::Room(id) = kind {
                    if !room_names.contains_key(&id) {
                        if let Some(name) = source.room_name(id) {
                            room_names.insert(id, name);
                        }
                    }
                }
                cells.push(kind);
            }
        }
        Self::from_parts(
            width,
            height,
            cells,
            room_names,
            source.objects(),
            source.agent_position(),
        )
    }

    /// Build a snapshot from already-extracted parts, validating invariants.
    ///
    /// # Errors
    ///
    /// Returns an error if the dimensions are empty, the cell buffer length
    /// does not match them, an object id repeats, an object or the agent
    /// sits out of bounds, or a container lists an id that matches no
    /// object.
    pub fn from_parts(
        width: u32,
        height: u32,
        cells: Vec<CellKind>,
        room_names: IndexMap<RoomId, String>,
        objects: Vec<WorldObject>,
        agent: Position,
    ) -> Result<Self, SnapshotError> {
        if width == 0 || height == 0 {
            return Err(SnapshotError::EmptyWorld);
        }
        let expected = width as usize * height as usize;
        if cells.len() != expected {
            return Err(SnapshotError::CellCountMismatch {
                expected,
                actual: cells.len(),
            });
        }

        let in_bounds = |pos: Position| {
            pos.x >= 0 && pos.y >= 0 && (pos.x as u32) < width && (pos.y as u32) < height
        };
        if !in_bounds(agent) {
            return Err(SnapshotError::AgentOutOfBounds { position: agent });
        }

        let mut arena: IndexMap<ObjectId, WorldObject> = IndexMap::with_capacity(objects.len());
        for obj in objects {
            if !in_bounds(obj.position) {
                return Err(SnapshotError::ObjectOutOfBounds {
                    id: obj.id,
                    position: obj.position,
                });
            }
            let id = obj.id;
            if arena.insert(id, obj).is_some() {
                return Err(SnapshotError::DuplicateObject { id });
            }
        }

        let mut contained = IndexSet::new();
        for obj in arena.values() {
            for &inner in &obj.contents {
                if !arena.contains_key(&inner) {
                    return Err(SnapshotError::UnknownContainedId {
                        container: obj.id,
                        id: inner,
                    });
                }
                contained.insert(inner);
            }
        }

        Ok(Self {
            width,
            height,
            cells,
            room_names,
            objects: arena,
            contained,
            agent,
        })
    }

    /// Grid width in cells.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grid height in cells.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `true` if `pos` lies within `[0, width) × [0, height)`.
    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as u32) < self.width && (pos.y as u32) < self.height
    }

    /// Classification of the cell at `pos`, or `None` out of bounds.
    pub fn cell(&self, pos: Position) -> Option<CellKind> {
        if !self.in_bounds(pos) {
            return None;
        }
        let idx = pos.y as usize * self.width as usize + pos.x as usize;
        Some(self.cells[idx])
    }

    /// Name of a room, if the captured source had one.
    pub fn room_name(&self, room: RoomId) -> Option<&str> {
        self.room_names.get(&room).map(String::as_str)
    }

    /// Agent position at capture time.
    pub fn agent_position(&self) -> Position {
        self.agent
    }

    /// All objects in capture order, contained ones included.
    pub fn objects(&self) -> impl Iterator<Item = &WorldObject> {
        self.objects.values()
    }

    /// Look up one object by id.
    pub fn object(&self, id: ObjectId) -> Option<&WorldObject> {
        self.objects.get(&id)
    }

    /// Objects occupying the given cell, in capture order.
    pub fn objects_at(&self, pos: Position) -> impl Iterator<Item = &WorldObject> {
        self.objects.values().filter(move |o| o.position == pos)
    }

    /// `true` if the object sits inside some container.
    pub fn is_contained(&self, id: ObjectId) -> bool {
        self.contained.contains(&id)
    }

    /// Objects that are not inside any container, in capture order.
    ///
    /// Only these are meaningful navigation targets: a contained object has
    /// no cell of its own beyond its container's.
    pub fn top_level_objects(&self) -> impl Iterator<Item = &WorldObject> {
        self.objects
            .values()
            .filter(move |o| !self.contained.contains(&o.id))
    }
}
