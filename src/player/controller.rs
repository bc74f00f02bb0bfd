use crate::core::{Board, Move};

/// A source of moves for one side of the game. The game loop hands the
/// controller a read-only board and the legal moves for the side on move;
/// the returned move must be one of them. `None` resigns.
pub trait PlayerController {
    fn choose_move(&self, board: &Board, legal_moves: &[Move]) -> Option<Move>;
    fn name(&self) -> &str;
}
