use super::eval::{evaluate, INFTY, WINNING_VALUE};
use crate::core::{Board, Move, Outcome, Side};
use crate::player::PlayerController;

/// Search depth for the current position.
pub const DEFAULT_DEPTH: usize = 3;

/// The automated player: fixed-depth minimax with alpha-beta pruning over
/// a scratch copy of the board. Black positions are maximized (sense +1),
/// White positions minimized (sense -1).
pub struct MachinePlayer {
    side: Side,
    name: String,
    pub depth: usize,
}

impl MachinePlayer {
    pub fn new(side: Side, name: &str) -> Self {
        Self {
            side,
            name: name.to_string(),
            depth: DEFAULT_DEPTH,
        }
    }

    /// Search the game tree from BOARD and return the chosen move.
    /// Assumes the game is not over and it is this player's turn.
    fn search_for_move(&self, board: &Board) -> Option<Move> {
        debug_assert_eq!(board.turn(), self.side);
        let mut work = board.scratch_copy();
        let mut found = None;
        let sense = match self.side {
            Side::Black => 1,
            Side::White => -1,
        };
        self.find_move(&mut work, self.depth, true, sense, -INFTY, INFTY, &mut found);
        found
    }

    /// Minimax over a shared scratch board. Every branch applies a move,
    /// scores the child, and retracts before moving on, leaving BOARD
    /// exactly as it was on every return path. Positions decided by the
    /// applied move score `±(WINNING_VALUE + depth)` without recursing, so
    /// a faster win strictly beats a slower one. When SAVE_MOVE is set
    /// (the root), the best move seen so far is recorded in FOUND.
    #[allow(clippy::too_many_arguments)]
    fn find_move(
        &self,
        board: &mut Board,
        depth: usize,
        save_move: bool,
        sense: i32,
        mut alpha: i32,
        mut beta: i32,
        found: &mut Option<Move>,
    ) -> i32 {
        if depth == 0 {
            return evaluate(board);
        }
        let moves = board.legal_moves();
        if moves.is_empty() {
            return evaluate(board);
        }
        let mut best_score = if sense > 0 { -INFTY } else { INFTY };
        for mv in moves {
            board.make_move(mv);
            let score = match board.winner() {
                Some(Outcome::Winner(Side::Black)) => WINNING_VALUE + depth as i32,
                Some(Outcome::Winner(Side::White)) => -(WINNING_VALUE + depth as i32),
                Some(Outcome::Tie) => 0,
                None => self.find_move(board, depth - 1, false, -sense, alpha, beta, found),
            };
            board.retract();
            if sense > 0 {
                if score > best_score {
                    best_score = score;
                    if save_move {
                        *found = Some(mv);
                    }
                }
                alpha = alpha.max(score);
            } else {
                if score < best_score {
                    best_score = score;
                    if save_move {
                        *found = Some(mv);
                    }
                }
                beta = beta.min(score);
            }
            if alpha >= beta {
                break;
            }
        }
        best_score
    }
}

impl PlayerController for MachinePlayer {
    fn choose_move(&self, board: &Board, _legal_moves: &[Move]) -> Option<Move> {
        self.search_for_move(board)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
