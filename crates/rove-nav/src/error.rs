//! Typed replay failures.

use rove_core::{Direction, Position};
use std::fmt;

/// Why a replayed move sequence stopped being valid.
///
/// Carried as data inside [`PathResult`](crate::PathResult) rather than
/// returned as `Err`: a failed attempt is a normal scoring input, not a
/// fault in the caller's query.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReplayError {
    /// The start cell is not walkable under the strict policy.
    StartNotWalkable {
        /// The rejected start cell.
        position: Position,
    },
    /// The target cell is not walkable under the strict policy.
    TargetNotWalkable {
        /// The rejected target cell.
        position: Position,
    },
    /// A symbol outside the four-arrow alphabet.
    UnknownSymbol {
        /// The offending character.
        symbol: char,
        /// Its character index within the move string.
        index: usize,
    },
    /// A move into a wall, outside cell, or off the grid.
    Blocked {
        /// The attempted direction.
        direction: Direction,
        /// Cell the agent stood on.
        from: Position,
        /// Cell the move would have entered.
        to: Position,
    },
}

impl fmt::Display for ReplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StartNotWalkable { position } => {
                write!(f, "start position {position} is not walkable")
            }
            Self::TargetNotWalkable { position } => {
                write!(f, "target position {position} is not walkable")
            }
            Self::UnknownSymbol { symbol, index } => {
                write!(f, "invalid direction symbol '{symbol}' at position {index}")
            }
            Self::Blocked {
                direction,
                from,
                to,
            } => {
                write!(f, "cannot move {direction} from {from} to {to} - blocked")
            }
        }
    }
}

impl std::error::Error for ReplayError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failure_site() {
        let err = ReplayError::Blocked {
            direction: Direction::Right,
            from: Position::new(2, 1),
            to: Position::new(3, 1),
        };
        assert_eq!(err.to_string(), "cannot move → from (2, 1) to (3, 1) - blocked");

        let err = ReplayError::UnknownSymbol {
            symbol: 'X',
            index: 2,
        };
        assert_eq!(err.to_string(), "invalid direction symbol 'X' at position 2");
    }
}
