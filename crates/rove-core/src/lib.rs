//! Core types for the Rove navigation engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! fundamental vocabulary shared across the Rove workspace: grid positions,
//! cardinal directions and their arrow alphabet, cell classifications, and
//! strongly-typed identifiers.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod direction;
pub mod id;
pub mod position;

pub use cell::CellKind;
pub use direction::Direction;
pub use id::{ObjectId, RoomId};
pub use position::Position;
