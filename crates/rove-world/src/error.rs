//! Error types for snapshot construction.

use rove_core::{ObjectId, Position};
use std::fmt;

/// Errors arising while validating a captured world snapshot.
///
/// All variants are construction-time defects in the data handed over by
/// the external simulator; a successfully built snapshot never produces
/// them again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotError {
    /// Width or height is zero.
    EmptyWorld,
    /// The cell buffer does not match `width * height`.
    CellCountMismatch {
        /// `width * height` of the declared dimensions.
        expected: usize,
        /// Length of the provided cell buffer.
        actual: usize,
    },
    /// Two objects share the same id.
    DuplicateObject {
        /// The repeated id.
        id: ObjectId,
    },
    /// An object sits outside the grid.
    ObjectOutOfBounds {
        /// The offending object.
        id: ObjectId,
        /// Its declared position.
        position: Position,
    },
    /// A container lists a contents id that matches no object.
    UnknownContainedId {
        /// The container doing the listing.
        container: ObjectId,
        /// The dangling id.
        id: ObjectId,
    },
    /// The agent sits outside the grid.
    AgentOutOfBounds {
        /// The declared agent position.
        position: Position,
    },
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyWorld => write!(f, "world must have at least one cell"),
            Self::CellCountMismatch { expected, actual } => {
                write!(f, "cell buffer has {actual} cells, dimensions require {expected}")
            }
            Self::DuplicateObject { id } => write!(f, "duplicate object id {id}"),
            Self::ObjectOutOfBounds { id, position } => {
                write!(f, "object {id} at {position} is outside the grid")
            }
            Self::UnknownContainedId { container, id } => {
                write!(f, "container {container} lists unknown object id {id}")
            }
            Self::AgentOutOfBounds { position } => {
                write!(f, "agent at {position} is outside the grid")
            }
        }
    }
}

impl std::error::Error for SnapshotError {}
