use crate::core::{Board, Move, Outcome, Side};
use crate::display::{render_board, DisplayState};
use crate::player::PlayerController;
use crossterm::event::{self, Event};
use std::time::Duration;

/// The turn loop around the authoritative board. Controllers produce one
/// validated move per turn; the loop applies it and invokes the per-move
/// notification hook.
pub struct Game {
    pub board: Board,
}

impl Game {
    pub fn new(board: Board) -> Self {
        Game { board }
    }

    /// Play until the game is decided or a controller resigns, returning
    /// the result. ON_MOVE is called once per completed move, after it has
    /// been applied; it observes, it does not steer.
    pub fn play<F>(
        &mut self,
        black: &dyn PlayerController,
        white: &dyn PlayerController,
        mut on_move: F,
    ) -> Outcome
    where
        F: FnMut(&Move),
    {
        loop {
            if let Some(outcome) = self.board.winner() {
                self.announce(&outcome.to_string());
                return outcome;
            }

            let controller: &dyn PlayerController = match self.board.turn() {
                Side::Black => black,
                Side::White => white,
            };

            let mut state = DisplayState::new();
            state.last_move = self.board.history().last().copied();
            state.status_msg = Some(format!(
                "{} is thinking ({})...",
                controller.name(),
                self.board.turn()
            ));
            render_board(&self.board, &state);

            let moves = self.board.legal_moves();
            if moves.is_empty() {
                // A side that cannot move loses.
                let outcome = Outcome::Winner(self.board.turn().opponent());
                self.announce(&format!("{} cannot move. {}", self.board.turn(), outcome));
                return outcome;
            }

            match controller.choose_move(&self.board, &moves) {
                Some(mv) => {
                    self.board.make_move(mv);
                    on_move(&mv);
                }
                None => {
                    let outcome = Outcome::Winner(self.board.turn().opponent());
                    self.announce(&format!("{} resigns. {}", controller.name(), outcome));
                    return outcome;
                }
            }
        }
    }

    /// Show MESSAGE over the final position and wait for a key.
    fn announce(&self, message: &str) {
        let mut state = DisplayState::new();
        state.last_move = self.board.history().last().copied();
        state.status_msg = Some(format!("{} (press any key)", message));
        render_board(&self.board, &state);
        loop {
            if let Ok(true) = event::poll(Duration::from_millis(200)) {
                if let Ok(Event::Key(_)) = event::read() {
                    break;
                }
            }
        }
    }
}
