use super::square::Square;
use super::types::Error;
use std::fmt;
use std::str::FromStr;

/// An origin/destination pair. The capture flag is false as constructed;
/// the board decides at application time whether the capturing variant
/// applies, based on what occupies the destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    from: Square,
    to: Square,
    capture: bool,
}

impl Move {
    pub fn new(from: Square, to: Square) -> Move {
        Move {
            from,
            to,
            capture: false,
        }
    }

    /// This move with the capture flag forced on.
    pub fn capturing(self) -> Move {
        Move {
            capture: true,
            ..self
        }
    }

    pub fn from(self) -> Square {
        self.from
    }

    pub fn to(self) -> Square {
        self.to
    }

    pub fn is_capture(self) -> bool {
        self.capture
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}-{}", self.from, self.to)
    }
}

impl FromStr for Move {
    type Err = Error;

    /// Parse a `c2-c4` style designator: two square designators joined by
    /// a hyphen.
    fn from_str(s: &str) -> Result<Move, Error> {
        let (from, to) = s.split_once('-').ok_or_else(|| Error::BadMove(s.to_string()))?;
        let from = from
            .parse::<Square>()
            .map_err(|_| Error::BadMove(s.to_string()))?;
        let to = to
            .parse::<Square>()
            .map_err(|_| Error::BadMove(s.to_string()))?;
        Ok(Move::new(from, to))
    }
}
