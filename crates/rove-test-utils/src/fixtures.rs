//! ASCII-map snapshot fixtures.
//!
//! The map legend follows the simulator's layout convention:
//!
//! | Char | Cell |
//! |------|------|
//! | `#`  | wall |
//! | ` `  | outside |
//! | `D`  | closed door |
//! | `d`  | open door |
//! | `.`  | room 0 |
//! | `0`–`9` | room with that id |
//! | `@`  | agent, standing on a room-0 cell |
//!
//! Rows shorter than the widest row are padded with outside cells.

use indexmap::IndexMap;
use rove_core::{CellKind, ObjectId, Position, RoomId};
use rove_world::{WorldObject, WorldSnapshot};

/// Builder for test-world snapshots.
///
/// Collects a grid (from an ASCII map or a uniform open room), optional
/// room names, objects, and an agent position, then validates the lot
/// through [`WorldSnapshot::from_parts`]. Panics on malformed fixtures;
/// these are test inputs, and a loud failure beats a silent mis-draw.
pub struct SnapshotBuilder {
    width: u32,
    height: u32,
    cells: Vec<CellKind>,
    room_names: IndexMap<RoomId, String>,
    objects: Vec<WorldObject>,
    agent: Position,
}

impl SnapshotBuilder {
    /// Parse an ASCII map into a grid, picking up an optional `@` agent.
    pub fn from_ascii(map: &str) -> Self {
        let rows: Vec<&str> = map.lines().collect();
        assert!(!rows.is_empty(), "ascii map has no rows");
        let height = rows.len() as u32;
        let width = rows
            .iter()
            .map(|r| r.chars().count())
            .max()
            .expect("ascii map has no rows") as u32;
        assert!(width > 0, "ascii map has no columns");

        let mut cells = Vec::with_capacity((width * height) as usize);
        let mut agent = Position::new(0, 0);
        for (y, row) in rows.iter().enumerate() {
            let mut x = 0;
            for ch in row.chars() {
                let kind = match ch {
                    '#' => CellKind::Wall,
                    ' ' => CellKind::Outside,
                    'D' => CellKind::ClosedDoor,
                    'd' => CellKind::OpenDoor,
                    '.' => CellKind::Room(RoomId(0)),
                    '@' => {
                        agent = Position::new(x, y as i32);
                        CellKind::Room(RoomId(0))
                    }
                    digit @ '0'..='9' => {
                        CellKind::Room(RoomId(digit.to_digit(10).unwrap()))
                    }
                    other => panic!("unknown map character '{other}'"),
                };
                cells.push(kind);
                x += 1;
            }
            while (x as u32) < width {
                cells.push(CellKind::Outside);
                x += 1;
            }
        }

        Self {
            width,
            height,
            cells,
            room_names: IndexMap::new(),
            objects: Vec::new(),
            agent,
        }
    }

    /// A `width × height` grid made entirely of room-0 cells.
    pub fn open(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cells: vec![CellKind::Room(RoomId(0)); (width * height) as usize],
            room_names: IndexMap::new(),
            objects: Vec::new(),
            agent: Position::new(0, 0),
        }
    }

    /// Place the agent.
    pub fn agent(mut self, x: i32, y: i32) -> Self {
        self.agent = Position::new(x, y);
        self
    }

    /// Name a room id.
    pub fn room_name(mut self, id: u32, name: &str) -> Self {
        self.room_names.insert(RoomId(id), name.to_string());
        self
    }

    /// Add a plain object.
    pub fn object(mut self, id: u32, name: &str, x: i32, y: i32) -> Self {
        self.objects
            .push(WorldObject::new(ObjectId(id), name, Position::new(x, y)));
        self
    }

    /// Add a pickable object.
    pub fn pickable_object(mut self, id: u32, name: &str, x: i32, y: i32) -> Self {
        self.objects.push(
            WorldObject::new(ObjectId(id), name, Position::new(x, y)).pickable(),
        );
        self
    }

    /// Add a container holding the given object ids.
    ///
    /// The contained objects must be added separately (they live in the
    /// world's flat object list too, at the container's cell).
    pub fn container(
        mut self,
        id: u32,
        name: &str,
        x: i32,
        y: i32,
        capacity: usize,
        contents: &[u32],
    ) -> Self {
        self.objects.push(
            WorldObject::new(ObjectId(id), name, Position::new(x, y))
                .with_capacity(capacity)
                .containing(contents.iter().map(|&i| ObjectId(i)).collect()),
        );
        self
    }

    /// Validate and freeze the snapshot.
    pub fn build(self) -> WorldSnapshot {
        WorldSnapshot::from_parts(
            self.width,
            self.height,
            self.cells,
            self.room_names,
            self.objects,
            self.agent,
        )
        .expect("fixture snapshot must be valid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_legend_round_trips() {
        let snap = SnapshotBuilder::from_ascii(
            "#Dd\n\
             .@1",
        )
        .build();
        assert_eq!(snap.cell(Position::new(0, 0)), Some(CellKind::Wall));
        assert_eq!(snap.cell(Position::new(1, 0)), Some(CellKind::ClosedDoor));
        assert_eq!(snap.cell(Position::new(2, 0)), Some(CellKind::OpenDoor));
        assert_eq!(snap.cell(Position::new(0, 1)), Some(CellKind::Room(RoomId(0))));
        assert_eq!(snap.cell(Position::new(1, 1)), Some(CellKind::Room(RoomId(0))));
        assert_eq!(snap.cell(Position::new(2, 1)), Some(CellKind::Room(RoomId(1))));
        assert_eq!(snap.agent_position(), Position::new(1, 1));
    }

    #[test]
    fn short_rows_pad_with_outside() {
        let snap = SnapshotBuilder::from_ascii(
            "...\n\
             .",
        )
        .build();
        assert_eq!(snap.cell(Position::new(1, 1)), Some(CellKind::Outside));
        assert_eq!(snap.cell(Position::new(2, 1)), Some(CellKind::Outside));
    }

    #[test]
    fn objects_and_rooms_attach() {
        let snap = SnapshotBuilder::open(4, 4)
            .room_name(0, "studio")
            .container(0, "wardrobe", 1, 1, 5, &[1])
            .pickable_object(1, "banana", 1, 1)
            .object(2, "couch", 3, 3)
            .agent(0, 0)
            .build();
        assert_eq!(snap.room_name(RoomId(0)), Some("studio"));
        assert_eq!(snap.objects().count(), 3);
        assert!(snap.is_contained(ObjectId(1)));
        assert_eq!(snap.top_level_objects().count(), 2);
    }
}
