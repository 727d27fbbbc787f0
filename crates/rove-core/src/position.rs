//! Grid positions and Manhattan geometry.

use crate::direction::Direction;
use std::fmt;

/// A cell position on a 2D grid.
///
/// Coordinates are `(x, y)` with `x` growing rightward and `y` growing
/// downward, matching the layout convention of the simulators this engine
/// consumes. Values are signed so that off-grid destinations can be formed
/// and then rejected by the walkability policy; a valid world never hands
/// out negative coordinates.
///
/// Equality, hashing, and ordering are by value. The `Ord` impl
/// (lexicographic on `(x, y)`) exists so positions can serve as a
/// deterministic final tie-break in priority queues.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Column, growing rightward.
    pub x: i32,
    /// Row, growing downward.
    pub y: i32,
}

impl Position {
    /// Create a position from `x` and `y` coordinates.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Manhattan (L1) distance to `other`.
    ///
    /// This is the graph-geodesic distance on an unobstructed 4-connected
    /// grid, which makes it an admissible and consistent A* heuristic under
    /// unit step cost.
    ///
    /// # Examples
    ///
    /// ```
    /// use rove_core::Position;
    ///
    /// let a = Position::new(0, 0);
    /// let b = Position::new(3, 4);
    /// assert_eq!(a.manhattan(b), 7);
    /// assert_eq!(b.manhattan(a), 7);
    /// ```
    pub const fn manhattan(self, other: Self) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// The position one cardinal step away in `dir`.
    pub const fn step(self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn manhattan_is_symmetric_on_axes() {
        let origin = Position::new(0, 0);
        assert_eq!(origin.manhattan(Position::new(5, 0)), 5);
        assert_eq!(origin.manhattan(Position::new(0, 5)), 5);
        assert_eq!(origin.manhattan(Position::new(-2, 3)), 5);
    }

    #[test]
    fn step_moves_one_cell() {
        let p = Position::new(3, 3);
        assert_eq!(p.step(Direction::Up), Position::new(3, 2));
        assert_eq!(p.step(Direction::Down), Position::new(3, 4));
        assert_eq!(p.step(Direction::Left), Position::new(2, 3));
        assert_eq!(p.step(Direction::Right), Position::new(4, 3));
    }

    #[test]
    fn display_renders_coordinate_pair() {
        assert_eq!(Position::new(7, 2).to_string(), "(7, 2)");
    }

    proptest! {
        #[test]
        fn manhattan_is_a_metric(
            ax in -50i32..50, ay in -50i32..50,
            bx in -50i32..50, by in -50i32..50,
            cx in -50i32..50, cy in -50i32..50,
        ) {
            let a = Position::new(ax, ay);
            let b = Position::new(bx, by);
            let c = Position::new(cx, cy);

            prop_assert_eq!(a.manhattan(a), 0);
            prop_assert_eq!(a.manhattan(b), b.manhattan(a));
            prop_assert!(a.manhattan(c) <= a.manhattan(b) + b.manhattan(c));
        }

        #[test]
        fn step_changes_manhattan_by_one(
            x in -50i32..50, y in -50i32..50,
        ) {
            let p = Position::new(x, y);
            for dir in Direction::ALL {
                prop_assert_eq!(p.manhattan(p.step(dir)), 1);
            }
        }
    }
}
