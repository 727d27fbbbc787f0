//! Paths and their arrow encoding.

use rove_core::{Direction, Position};
use std::fmt;

/// An ordered sequence of grid positions, start included.
///
/// Invariants, enforced at construction: never empty, and each consecutive
/// pair differs by exactly one cardinal step. A single-cell path is the
/// degenerate "already there" route with zero steps.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path {
    pub(crate) cells: Vec<Position>,
}

impl Path {
    /// Build a path from explicit cells, checking the invariants.
    ///
    /// Returns `None` if `cells` is empty or any consecutive pair is not a
    /// unit cardinal step.
    pub fn new(cells: Vec<Position>) -> Option<Self> {
        if cells.is_empty() {
            return None;
        }
        for pair in cells.windows(2) {
            Direction::between(pair[0], pair[1])?;
        }
        Some(Self { cells })
    }

    /// The degenerate single-cell path.
    pub fn single(pos: Position) -> Self {
        Self { cells: vec![pos] }
    }

    /// First cell of the path.
    pub fn start(&self) -> Position {
        self.cells[0]
    }

    /// Last cell of the path.
    pub fn end(&self) -> Position {
        *self.cells.last().expect("path is never empty")
    }

    /// All cells, start first.
    pub fn cells(&self) -> &[Position] {
        &self.cells
    }

    /// Number of moves (one less than the number of cells).
    pub fn step_count(&self) -> usize {
        self.cells.len() - 1
    }

    /// Index of `pos` within the path, if present.
    pub fn index_of(&self, pos: Position) -> Option<usize> {
        self.cells.iter().position(|&c| c == pos)
    }

    /// Encode the path as one arrow symbol per step.
    ///
    /// A single-cell path encodes to the empty string. Replaying the
    /// encoding from [`start`](Self::start) recovers the path exactly;
    /// the alphabet is lossless for cardinal routes.
    pub fn arrows(&self) -> String {
        self.cells
            .windows(2)
            .filter_map(|pair| Direction::between(pair[0], pair[1]))
            .map(Direction::arrow)
            .collect()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.arrows())
    }
}
