//! Objects placed in a world.

use rove_core::{ObjectId, Position};

/// A spatially-placed object, as reported by the external simulator.
///
/// Containment is expressed by id reference: a container's `contents` lists
/// the ids of objects stored inside it, and those objects still appear in
/// the snapshot's flat arena (sharing the container's position). This keeps
/// the object graph acyclic and the snapshot trivially shareable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorldObject {
    /// Identifier assigned by the simulator.
    pub id: ObjectId,
    /// Cell the object occupies.
    pub position: Position,
    /// Human-readable name, e.g. `"banana"`.
    pub name: String,
    /// Whether an agent could pick the object up.
    pub pickable: bool,
    /// Container capacity; `0` for non-containers.
    pub capacity: usize,
    /// Ids of objects stored inside this one.
    pub contents: Vec<ObjectId>,
}

impl WorldObject {
    /// Create a plain, non-pickable, non-container object.
    pub fn new(id: ObjectId, name: impl Into<String>, position: Position) -> Self {
        Self {
            id,
            position,
            name: name.into(),
            pickable: false,
            capacity: 0,
            contents: Vec::new(),
        }
    }

    /// Mark the object as pickable.
    pub fn pickable(mut self) -> Self {
        self.pickable = true;
        self
    }

    /// Give the object container capacity.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Set the ids stored inside this object.
    pub fn containing(mut self, contents: Vec<ObjectId>) -> Self {
        self.contents = contents;
        self
    }

    /// `true` if the object can hold other objects.
    pub fn is_container(&self) -> bool {
        self.capacity > 0
    }
}
