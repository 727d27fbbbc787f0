//! Immutable world snapshots for the Rove navigation engine.
//!
//! The engine never talks to a live simulator mid-query. Instead, the
//! external simulation is consumed once through the narrow read-only
//! [`WorldSource`] trait and frozen into a [`WorldSnapshot`]: dimensions,
//! per-cell classification, room names, an arena of [`WorldObject`]s keyed
//! by id, and the agent position. Every navigation query in the workspace
//! runs against such a snapshot, which is `Send + Sync` and freely
//! shareable across threads.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod object;
pub mod snapshot;
pub mod source;

pub use error::SnapshotError;
pub use object::WorldObject;
pub use snapshot::WorldSnapshot;
pub use source::WorldSource;
