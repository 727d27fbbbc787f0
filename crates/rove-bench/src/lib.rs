//! Shared fixtures for Rove benchmarks.

#![forbid(unsafe_code)]
#![allow(missing_docs)]

use rove_test_utils::SnapshotBuilder;
use rove_world::WorldSnapshot;

/// A `size × size` layout with a regular lattice of wall blocks and door
/// gaps: enough obstacles that searches do real work, open enough that
/// every room cell stays connected.
pub fn lattice_world(size: u32) -> WorldSnapshot {
    lattice_builder(size).build()
}

/// [`lattice_world`] with `objects` plain objects spread along the
/// diagonal band of room cells, for challenge-generation benchmarks.
pub fn populated_lattice(size: u32, objects: u32) -> WorldSnapshot {
    let mut builder = lattice_builder(size);
    for i in 0..objects {
        // Even coordinates are always room cells in the lattice.
        let x = ((2 * (i + 1)) % size & !1) as i32;
        let y = ((4 * (i + 1)) % size & !1) as i32;
        builder = builder.object(i, "crate", x, y);
    }
    builder.build()
}

fn lattice_builder(size: u32) -> SnapshotBuilder {
    let mut rows = Vec::with_capacity(size as usize);
    for y in 0..size {
        let mut row = String::with_capacity(size as usize);
        for x in 0..size {
            // Wall blocks on odd/odd cells, a closed door every eighth.
            if x % 2 == 1 && y % 2 == 1 {
                if (x + y) % 8 == 0 {
                    row.push('D');
                } else {
                    row.push('#');
                }
            } else {
                row.push('.');
            }
        }
        rows.push(row);
    }
    SnapshotBuilder::from_ascii(&rows.join("\n"))
}
