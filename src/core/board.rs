use super::r#move::Move;
use super::setup;
use super::square::{Direction, Square, ALL_SQUARES};
use super::types::{Error, Outcome, Side};
use std::cell::{Cell, RefCell};
use std::fmt;

/// Default number of moves for each side before the game is a tie.
pub const DEFAULT_MOVE_LIMIT: usize = 30;

/// Connected-region sizes for both sides, each sorted descending.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct RegionSizes {
    black: Vec<usize>,
    white: Vec<usize>,
}

/// Full state of a game of Lines of Action.
///
/// Occupancy is a 64-slot array indexed by `Square::index()`. The move
/// history holds every applied, not-yet-retracted move, which makes
/// retraction exact. Connectivity and winner results are cached behind a
/// dirty flag (`None` in the cache cells); every mutation clears both.
#[derive(Debug)]
pub struct Board {
    cells: [Option<Side>; 64],
    /// All applied, unretracted moves, oldest first.
    moves: Vec<Move>,
    turn: Side,
    /// Total applied moves (both sides) at which the game ties.
    move_limit: usize,
    black_moves: usize,
    white_moves: usize,
    regions: RefCell<Option<RegionSizes>>,
    winner: Cell<Option<Option<Outcome>>>,
}

impl Board {
    /// A board in the standard initial position, Black to move.
    pub fn new() -> Board {
        Board::from_cells(setup::initial_cells(), Side::Black)
    }

    /// A board holding CELLS with TURN on move, as a fresh game: empty
    /// history, zeroed counters, default move limit.
    pub fn from_cells(cells: [Option<Side>; 64], turn: Side) -> Board {
        Board {
            cells,
            moves: Vec::new(),
            turn,
            move_limit: 2 * DEFAULT_MOVE_LIMIT,
            black_moves: 0,
            white_moves: 0,
            regions: RefCell::new(None),
            winner: Cell::new(None),
        }
    }

    /// A copy of this board positioned identically but started as a fresh
    /// game: the history is reset, not inherited. This is the working copy
    /// the search mutates.
    pub fn scratch_copy(&self) -> Board {
        Board::from_cells(self.cells, self.turn)
    }

    /// Reset to the standard initial position.
    pub fn clear(&mut self) {
        *self = Board::new();
    }

    /// The piece on SQ, if any.
    pub fn get(&self, sq: Square) -> Option<Side> {
        self.cells[sq.index()]
    }

    /// The side to move.
    pub fn turn(&self) -> Side {
        self.turn
    }

    /// Number of applied, unretracted moves by both sides.
    pub fn moves_made(&self) -> usize {
        self.moves.len()
    }

    /// Number of applied, unretracted moves by SIDE.
    pub fn moves_made_by(&self, side: Side) -> usize {
        match side {
            Side::Black => self.black_moves,
            Side::White => self.white_moves,
        }
    }

    /// The applied, unretracted moves, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.moves
    }

    /// Total-move tie threshold (twice the per-side limit).
    pub fn move_limit(&self) -> usize {
        self.move_limit
    }

    /// Set the per-side move limit. Rejected when `2 * limit` does not
    /// exceed the number of moves already made.
    pub fn set_move_limit(&mut self, limit: usize) -> Result<(), Error> {
        if 2 * limit <= self.moves_made() {
            return Err(Error::MoveLimitTooSmall {
                limit,
                made: self.moves_made(),
            });
        }
        self.move_limit = 2 * limit;
        self.winner.set(None);
        Ok(())
    }

    /// True iff FROM-TO is legal for the side on move: FROM holds one of
    /// the mover's pieces, a straight line joins the squares, the
    /// destination is not the mover's own piece, the distance equals the
    /// number of occupied squares anywhere on the full line of travel, and
    /// no opposing piece sits strictly between origin and destination.
    pub fn is_legal(&self, from: Square, to: Square) -> bool {
        if self.get(from) != Some(self.turn) || self.get(to) == Some(self.turn) {
            return false;
        }
        let dir = match from.direction_to(to) {
            Some(dir) => dir,
            None => return false,
        };
        let line_pieces = 1 + self.count_along(from, dir) + self.count_along(from, dir.opposite());
        from.distance(to) == line_pieces && !self.blocked(from, to, dir)
    }

    /// True iff MOVE is legal for the side on move. Its capture flag is
    /// ignored.
    pub fn is_legal_move(&self, mv: Move) -> bool {
        self.is_legal(mv.from(), mv.to())
    }

    /// Every legal move for the side on move, in ascending square-index
    /// scan order of origin, then destination.
    pub fn legal_moves(&self) -> Vec<Move> {
        let mut result = Vec::new();
        for &from in ALL_SQUARES.iter() {
            if self.get(from) != Some(self.turn) {
                continue;
            }
            for &to in ALL_SQUARES.iter() {
                if self.is_legal(from, to) {
                    result.push(Move::new(from, to));
                }
            }
        }
        result
    }

    /// Apply MOVE, which must be legal for the side on move. The capture
    /// flag is resolved here: a destination occupied by the opponent makes
    /// the recorded move a capture regardless of the flag passed in.
    pub fn make_move(&mut self, mut mv: Move) {
        assert!(self.is_legal_move(mv), "illegal move {}", mv);
        if self.get(mv.to()) == Some(self.turn.opponent()) {
            mv = mv.capturing();
        }
        self.moves.push(mv);
        self.cells[mv.to().index()] = self.cells[mv.from().index()];
        self.cells[mv.from().index()] = None;
        match self.turn {
            Side::Black => self.black_moves += 1,
            Side::White => self.white_moves += 1,
        }
        self.turn = self.turn.opponent();
        self.invalidate();
    }

    /// Retract the most recent move, restoring the state immediately
    /// before it. Requires `moves_made() > 0`.
    pub fn retract(&mut self) {
        let mv = match self.moves.pop() {
            Some(mv) => mv,
            None => panic!("no moves to retract"),
        };
        self.cells[mv.from().index()] = self.cells[mv.to().index()];
        // After the move, `turn` is the side that was captured from.
        self.cells[mv.to().index()] = if mv.is_capture() {
            Some(self.turn)
        } else {
            None
        };
        self.turn = self.turn.opponent();
        match self.turn {
            Side::Black => self.black_moves -= 1,
            Side::White => self.white_moves -= 1,
        }
        self.invalidate();
    }

    /// True iff the game is decided (winner or tie).
    pub fn game_over(&self) -> bool {
        self.winner().is_some()
    }

    /// True iff SIDE's pieces form exactly one connected region.
    pub fn pieces_contiguous(&self, side: Side) -> bool {
        self.region_count(side) == 1
    }

    /// Number of connected regions of SIDE's pieces.
    pub fn region_count(&self, side: Side) -> usize {
        self.region_sizes(side).len()
    }

    /// Sizes of SIDE's connected regions, largest first.
    pub fn region_sizes(&self, side: Side) -> Vec<usize> {
        self.ensure_regions();
        let regions = self.regions.borrow();
        let regions = regions.as_ref().unwrap();
        match side {
            Side::Black => regions.black.clone(),
            Side::White => regions.white.clone(),
        }
    }

    /// The game's result: the winning side, `Tie` at the move limit, or
    /// `None` while the game is in progress. When both sides become
    /// contiguous on the same move, the side that just moved (not on move)
    /// wins.
    pub fn winner(&self) -> Option<Outcome> {
        if let Some(known) = self.winner.get() {
            return known;
        }
        let black = self.pieces_contiguous(Side::Black);
        let white = self.pieces_contiguous(Side::White);
        let result = if black && white {
            Some(Outcome::Winner(self.turn.opponent()))
        } else if black {
            Some(Outcome::Winner(Side::Black))
        } else if white {
            Some(Outcome::Winner(Side::White))
        } else if self.moves.len() >= self.move_limit {
            Some(Outcome::Tie)
        } else {
            None
        };
        self.winner.set(Some(result));
        result
    }

    /// Clear the cached connectivity and winner results. Called by every
    /// mutator of occupancy or turn.
    fn invalidate(&mut self) {
        *self.regions.borrow_mut() = None;
        self.winner.set(None);
    }

    /// Occupied squares on the ray from FROM in direction DIR, exclusive
    /// of FROM, out to the board edge.
    fn count_along(&self, from: Square, dir: Direction) -> usize {
        let mut count = 0;
        let mut steps = 1;
        while let Some(sq) = from.move_dest(dir, steps) {
            if self.get(sq).is_some() {
                count += 1;
            }
            steps += 1;
        }
        count
    }

    /// True iff an opposing piece sits strictly between FROM and TO along
    /// DIR. An opposing piece exactly on TO is a capture, not a block; the
    /// mover's own pieces are jumped over freely.
    fn blocked(&self, from: Square, to: Square, dir: Direction) -> bool {
        let mut steps = 1;
        while let Some(sq) = from.move_dest(dir, steps) {
            if sq == to {
                return false;
            }
            if self.get(sq) == Some(self.turn.opponent()) {
                return true;
            }
            steps += 1;
        }
        false
    }

    /// Recompute both sides' region sizes in one full-board scan when the
    /// cache is dirty. Moves can merge or split regions arbitrarily, so
    /// this is always a fresh flood fill, never a delta update.
    fn ensure_regions(&self) {
        if self.regions.borrow().is_some() {
            return;
        }
        let mut sizes = RegionSizes::default();
        let mut visited = [false; 64];
        for &seed in ALL_SQUARES.iter() {
            if visited[seed.index()] {
                continue;
            }
            let side = match self.get(seed) {
                Some(side) => side,
                None => continue,
            };
            // Worklist flood fill over king-move adjacency.
            let mut size = 0;
            let mut stack = vec![seed];
            visited[seed.index()] = true;
            while let Some(sq) = stack.pop() {
                size += 1;
                for &next in sq.adjacent() {
                    if !visited[next.index()] && self.get(next) == Some(side) {
                        visited[next.index()] = true;
                        stack.push(next);
                    }
                }
            }
            match side {
                Side::Black => sizes.black.push(size),
                Side::White => sizes.white.push(size),
            }
        }
        sizes.black.sort_unstable_by(|a, b| b.cmp(a));
        sizes.white.sort_unstable_by(|a, b| b.cmp(a));
        *self.regions.borrow_mut() = Some(sizes);
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::new()
    }
}

/// Position equality: occupancy and side to move. History, counters, and
/// caches do not participate.
impl PartialEq for Board {
    fn eq(&self, other: &Board) -> bool {
        self.cells == other.cells && self.turn == other.turn
    }
}

impl Eq for Board {}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "===")?;
        for row in (0..8).rev() {
            write!(f, "    ")?;
            for col in 0..8 {
                let cell = self.get(Square::new(col, row));
                let ch = cell.map_or('-', Side::abbrev);
                write!(f, "{} ", ch)?;
            }
            writeln!(f)?;
        }
        write!(f, "Next move: {}\n===", self.turn)
    }
}
