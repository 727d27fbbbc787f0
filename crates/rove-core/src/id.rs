//! Strongly-typed identifiers.

use std::fmt;

/// Identifies an object placed in a world.
///
/// Objects are registered by the external simulator and referenced by id
/// everywhere in this workspace. Container contents are lists of
/// `ObjectId` rather than nested ownership.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub u32);

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ObjectId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Identifies a room within a world layout.
///
/// Room cells carry the id of the room they belong to; the snapshot maps
/// ids to human-readable names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoomId(pub u32);

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for RoomId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}
