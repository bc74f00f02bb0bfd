use crate::core::{Board, Move};
use crate::player::PlayerController;
use rand::seq::SliceRandom;

/// Picks a uniformly random legal move. Useful as a baseline opponent.
pub struct RandomPlayer {
    name: String,
}

impl RandomPlayer {
    pub fn new(name: &str) -> Self {
        RandomPlayer {
            name: name.to_string(),
        }
    }
}

impl PlayerController for RandomPlayer {
    fn choose_move(&self, _board: &Board, legal_moves: &[Move]) -> Option<Move> {
        let mut rng = rand::thread_rng();
        legal_moves.choose(&mut rng).copied()
    }

    fn name(&self) -> &str {
        &self.name
    }
}
