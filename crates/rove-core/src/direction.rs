//! Cardinal directions and the arrow alphabet.

use crate::position::Position;
use std::fmt;

/// One of the four cardinal movement directions.
///
/// Each direction carries its unit grid vector and a single-character arrow
/// symbol; both lookups are constant-time `match` tables rather than scans.
/// The arrow alphabet is exactly `↑ ↓ ← →`; no other encoding of moves is
/// accepted anywhere in the workspace.
///
/// # Examples
///
/// ```
/// use rove_core::Direction;
///
/// assert_eq!(Direction::Up.delta(), (0, -1));
/// assert_eq!(Direction::Right.arrow(), '→');
/// assert_eq!(Direction::from_arrow('←'), Some(Direction::Left));
/// assert_eq!(Direction::from_arrow('x'), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Decreasing `y`.
    Up,
    /// Increasing `y`.
    Down,
    /// Decreasing `x`.
    Left,
    /// Increasing `x`.
    Right,
}

impl Direction {
    /// All four directions in expansion order.
    ///
    /// Neighbour enumeration across the workspace follows this order, so
    /// searches are deterministic for a fixed grid.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit grid vector `(dx, dy)` for this direction.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Arrow symbol for this direction.
    pub const fn arrow(self) -> char {
        match self {
            Direction::Up => '↑',
            Direction::Down => '↓',
            Direction::Left => '←',
            Direction::Right => '→',
        }
    }

    /// Parse an arrow symbol. Returns `None` for anything outside the
    /// four-symbol alphabet.
    pub const fn from_arrow(symbol: char) -> Option<Self> {
        match symbol {
            '↑' => Some(Direction::Up),
            '↓' => Some(Direction::Down),
            '←' => Some(Direction::Left),
            '→' => Some(Direction::Right),
            _ => None,
        }
    }

    /// The direction of the single cardinal step from `from` to `to`.
    ///
    /// Returns `None` if the two positions are not exactly one cardinal
    /// step apart.
    pub fn between(from: Position, to: Position) -> Option<Self> {
        let (dx, dy) = (to.x - from.x, to.y - from.y);
        Direction::ALL.into_iter().find(|d| d.delta() == (dx, dy))
    }

    /// The opposing direction.
    pub const fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.arrow())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrow_round_trip_covers_alphabet() {
        for dir in Direction::ALL {
            assert_eq!(Direction::from_arrow(dir.arrow()), Some(dir));
        }
    }

    #[test]
    fn unknown_symbols_rejected() {
        for symbol in ['x', 'N', '^', 'v', '<', '>', ' '] {
            assert_eq!(Direction::from_arrow(symbol), None);
        }
    }

    #[test]
    fn between_recovers_each_step() {
        let origin = Position::new(4, 4);
        for dir in Direction::ALL {
            assert_eq!(Direction::between(origin, origin.step(dir)), Some(dir));
        }
    }

    #[test]
    fn between_rejects_non_unit_moves() {
        let origin = Position::new(0, 0);
        assert_eq!(Direction::between(origin, origin), None);
        assert_eq!(Direction::between(origin, Position::new(1, 1)), None);
        assert_eq!(Direction::between(origin, Position::new(0, 2)), None);
    }

    #[test]
    fn opposite_is_involutive() {
        for dir in Direction::ALL {
            assert_eq!(dir.opposite().opposite(), dir);
        }
    }

    #[test]
    fn deltas_are_distinct_unit_vectors() {
        for a in Direction::ALL {
            let (dx, dy) = a.delta();
            assert_eq!(dx.abs() + dy.abs(), 1);
            for b in Direction::ALL {
                if a != b {
                    assert_ne!(a.delta(), b.delta());
                }
            }
        }
    }
}
