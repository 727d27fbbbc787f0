//! Rove: navigation-challenge generation and path scoring for grid-world
//! simulations.
//!
//! Rove sits on top of an externally supplied grid world — anything that
//! can answer "what is at cell (x, y)", list its objects, and report the
//! agent position. From one frozen [`prelude::WorldSnapshot`] it can:
//!
//! - compute provably shortest paths with closed doors treated as
//!   openable-in-transit ([`prelude::find_path`]),
//! - replay an arrow-encoded move sequence and report exactly where and
//!   why it failed ([`prelude::validate_path`]),
//! - synthesize solvable navigation challenges from the object inventory
//!   ([`prelude::ChallengeGenerator`]), and
//! - grade attempts, with partial credit for runs that broke a rule
//!   partway ([`prelude::score_attempt`]).
//!
//! # Quick start
//!
//! ```rust
//! use indexmap::IndexMap;
//! use rove::prelude::*;
//!
//! // A 5×1 corridor with a banana at the far end.
//! let cells = vec![CellKind::Room(RoomId(0)); 5];
//! let banana = WorldObject::new(ObjectId(0), "banana", Position::new(4, 0)).pickable();
//! let snapshot = WorldSnapshot::from_parts(
//!     5,
//!     1,
//!     cells,
//!     IndexMap::new(),
//!     vec![banana],
//!     Position::new(0, 0),
//! )
//! .unwrap();
//!
//! let challenge = ChallengeGenerator::new(&snapshot).generate(42).unwrap();
//! assert_eq!(challenge.optimal_arrows, "→→→→");
//!
//! let reward = score_attempt(&snapshot, &challenge, &challenge.optimal_arrows);
//! assert!(reward.is_valid);
//! assert_eq!(reward.efficiency, 1.0);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for items not in the
//! [`prelude`]:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `rove-core` | Positions, directions, ids, cell kinds |
//! | [`world`] | `rove-world` | `WorldSource`, `WorldSnapshot`, objects |
//! | [`nav`] | `rove-nav` | Walkability policy, A*, paths, replay |
//! | [`challenge`] | `rove-challenge` | Challenge generation and scoring |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types: positions, directions, ids, cell kinds (`rove-core`).
pub use rove_core as types;

/// World snapshots and the simulator-facing seam (`rove-world`).
pub use rove_world as world;

/// Walkability policy, pathfinding, and replay (`rove-nav`).
pub use rove_nav as nav;

/// Challenge generation and reward scoring (`rove-challenge`).
pub use rove_challenge as challenge;

/// The most commonly used items, re-exported flat.
pub mod prelude {
    pub use rove_challenge::{
        score_attempt, ChallengeGenerator, NavigationChallenge, NavigationTask, RewardResult,
    };
    pub use rove_core::{CellKind, Direction, ObjectId, Position, RoomId};
    pub use rove_nav::{
        find_path, is_walkable, validate_path, DoorRule, Path, PathResult, ReplayError,
    };
    pub use rove_world::{SnapshotError, WorldObject, WorldSnapshot, WorldSource};
}
