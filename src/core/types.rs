use std::fmt;
use thiserror::Error;

/// One of the two players. Black moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Black,
    White,
}

impl Default for Side {
    fn default() -> Self {
        Side::Black
    }
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Black => Side::White,
            Side::White => Side::Black,
        }
    }

    /// Single-character board abbreviation.
    pub fn abbrev(self) -> char {
        match self {
            Side::Black => 'b',
            Side::White => 'w',
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Side::Black => write!(f, "Black"),
            Side::White => write!(f, "White"),
        }
    }
}

/// Result of a finished game. A game still in progress has no `Outcome`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Winner(Side),
    Tie,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Outcome::Winner(side) => write!(f, "{} wins", side),
            Outcome::Tie => write!(f, "Tie"),
        }
    }
}

/// Reportable input and configuration errors. Contract violations
/// (illegal `make_move`, empty `retract`) panic instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("malformed square designator {0:?} (want a1..h8)")]
    BadSquare(String),
    #[error("malformed move designator {0:?} (want e.g. c2-c4)")]
    BadMove(String),
    #[error("move limit {limit} too small: {made} moves already made")]
    MoveLimitTooSmall { limit: usize, made: usize },
}
