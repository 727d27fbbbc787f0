//! Walkability policy, A* pathfinding, and path replay.
//!
//! Three views of "may the agent stand here / move there" live in this
//! crate, and all of them funnel through the single predicate in
//! [`policy`]:
//!
//! - **Search** ([`find_path`]) treats closed doors as passable (an agent
//!   could open them en route) and returns provably shortest paths.
//! - **Replay** ([`validate_path`]) holds start and target to the strict
//!   rule, but lets a step enter a closed-door cell unconditionally,
//!   modeling an implicit push-through without a separate open action.
//! - **Scoring** (in `rove-challenge`) consumes both.
//!
//! The two rules must never diverge except by their door treatment; the
//! [`DoorRule`] parameter is the only switch.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod astar;
pub mod error;
pub mod path;
pub mod policy;
pub mod replay;

pub use astar::find_path;
pub use error::ReplayError;
pub use path::Path;
pub use policy::{is_walkable, walkable_neighbours, DoorRule};
pub use replay::{validate_path, PathResult};
