use super::types::Error;
use once_cell::sync::Lazy;
use std::fmt;
use std::str::FromStr;

pub const BOARD_SIZE: u8 = 8;

/// All 64 squares in index order (`index = row * 8 + col`). Built once at
/// startup; everything else borrows from this table.
pub static ALL_SQUARES: Lazy<[Square; 64]> = Lazy::new(|| {
    std::array::from_fn(|i| Square {
        col: (i % 8) as u8,
        row: (i / 8) as u8,
    })
});

/// Pre-computed king-move neighbors of every square.
static ADJACENT: Lazy<[Vec<Square>; 64]> = Lazy::new(|| {
    std::array::from_fn(|i| {
        let sq = ALL_SQUARES[i];
        Direction::ALL
            .iter()
            .filter_map(|&dir| sq.move_dest(dir, 1))
            .collect()
    })
});

/// One of the eight ray directions on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// (column delta, row delta) of one step.
    pub fn delta(self) -> (i8, i8) {
        match self {
            Direction::North => (0, 1),
            Direction::NorthEast => (1, 1),
            Direction::East => (1, 0),
            Direction::SouthEast => (1, -1),
            Direction::South => (0, -1),
            Direction::SouthWest => (-1, -1),
            Direction::West => (-1, 0),
            Direction::NorthWest => (-1, 1),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::NorthEast => Direction::SouthWest,
            Direction::East => Direction::West,
            Direction::SouthEast => Direction::NorthWest,
            Direction::South => Direction::North,
            Direction::SouthWest => Direction::NorthEast,
            Direction::West => Direction::East,
            Direction::NorthWest => Direction::SouthEast,
        }
    }

    fn from_deltas(dc: i8, dr: i8) -> Option<Direction> {
        match (dc, dr) {
            (0, 1) => Some(Direction::North),
            (1, 1) => Some(Direction::NorthEast),
            (1, 0) => Some(Direction::East),
            (1, -1) => Some(Direction::SouthEast),
            (0, -1) => Some(Direction::South),
            (-1, -1) => Some(Direction::SouthWest),
            (-1, 0) => Some(Direction::West),
            (-1, 1) => Some(Direction::NorthWest),
            _ => None,
        }
    }
}

/// A board position. Column and row are both in `0..8`; `a1` is
/// (col 0, row 0). Only in-range squares are constructible, so a `Square`
/// is on-board by definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    col: u8,
    row: u8,
}

impl Square {
    /// The square at (COL, ROW). Panics when out of range.
    pub fn new(col: u8, row: u8) -> Square {
        assert!(
            col < BOARD_SIZE && row < BOARD_SIZE,
            "square ({}, {}) off board",
            col,
            row
        );
        ALL_SQUARES[(row * BOARD_SIZE + col) as usize]
    }

    pub fn col(self) -> u8 {
        self.col
    }

    pub fn row(self) -> u8 {
        self.row
    }

    /// Index into a 64-slot board array.
    pub fn index(self) -> usize {
        (self.row * BOARD_SIZE + self.col) as usize
    }

    /// The up-to-8 orthogonally or diagonally adjacent squares.
    pub fn adjacent(self) -> &'static [Square] {
        &ADJACENT[self.index()]
    }

    /// True iff a straight line (rank, file, or diagonal) runs from here
    /// to TO. A square is not considered in line with itself.
    pub fn in_line_with(self, to: Square) -> bool {
        self.direction_to(to).is_some()
    }

    /// The ray direction from here toward TO, if the two squares share a
    /// rank, file, or diagonal.
    pub fn direction_to(self, to: Square) -> Option<Direction> {
        let dc = to.col as i16 - self.col as i16;
        let dr = to.row as i16 - self.row as i16;
        if dc == 0 && dr == 0 {
            return None;
        }
        if dc != 0 && dr != 0 && dc.abs() != dr.abs() {
            return None;
        }
        Direction::from_deltas(dc.signum() as i8, dr.signum() as i8)
    }

    /// Chebyshev distance: the number of steps along a line to reach TO.
    pub fn distance(self, to: Square) -> usize {
        let dc = (to.col as i16 - self.col as i16).unsigned_abs() as usize;
        let dr = (to.row as i16 - self.row as i16).unsigned_abs() as usize;
        dc.max(dr)
    }

    /// The square STEPS steps away in direction DIR, or `None` when that
    /// walks off the board.
    pub fn move_dest(self, dir: Direction, steps: usize) -> Option<Square> {
        let (dc, dr) = dir.delta();
        let col = self.col as i16 + dc as i16 * steps as i16;
        let row = self.row as i16 + dr as i16 * steps as i16;
        if (0..BOARD_SIZE as i16).contains(&col) && (0..BOARD_SIZE as i16).contains(&row) {
            Some(ALL_SQUARES[(row * BOARD_SIZE as i16 + col) as usize])
        } else {
            None
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.col) as char, self.row + 1)
    }
}

impl FromStr for Square {
    type Err = Error;

    /// Parse a two-character designator: column letter 'a'..'h' then row
    /// digit '1'..'8'. Anything else is rejected.
    fn from_str(s: &str) -> Result<Square, Error> {
        match s.as_bytes() {
            &[c @ b'a'..=b'h', r @ b'1'..=b'8'] => Ok(Square::new(c - b'a', r - b'1')),
            _ => Err(Error::BadSquare(s.to_string())),
        }
    }
}
