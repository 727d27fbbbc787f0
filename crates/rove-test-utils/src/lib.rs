//! Test fixtures for Rove development.
//!
//! Provides [`SnapshotBuilder`], an ASCII-map builder for
//! [`rove_world::WorldSnapshot`] fixtures used across the workspace's unit
//! tests, integration tests, and benchmarks.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::SnapshotBuilder;
