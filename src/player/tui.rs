use crate::core::{Board, Move, Side, Square};
use crate::display::{render_board, DisplayState};
use crate::player::PlayerController;
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use std::time::Duration;

/// Human player on the terminal. Moves are entered either by steering a
/// cursor (select the origin, then a highlighted destination) or by typing
/// a two-square designator such as `c2c4`.
pub struct TuiController {
    side: Side,
    name: String,
}

impl TuiController {
    pub fn new(side: Side, name: &str) -> Self {
        Self {
            side,
            name: name.to_string(),
        }
    }

    /// Destinations of every legal move out of FROM.
    fn destinations(legal_moves: &[Move], from: Square) -> Vec<Square> {
        legal_moves
            .iter()
            .filter(|mv| mv.from() == from)
            .map(|mv| mv.to())
            .collect()
    }

    /// Parse BUFFER as two concatenated square designators and look the
    /// move up in LEGAL_MOVES. Malformed or illegal input yields an error
    /// message for the status line; the board is untouched either way.
    fn typed_move(buffer: &str, legal_moves: &[Move]) -> Result<Move, String> {
        let designator = format!("{}-{}", &buffer[..2], &buffer[2..]);
        let mv = designator
            .parse::<Move>()
            .map_err(|err| err.to_string())?;
        legal_moves
            .iter()
            .find(|legal| legal.from() == mv.from() && legal.to() == mv.to())
            .copied()
            .ok_or_else(|| format!("{} is not a legal move", mv))
    }
}

impl PlayerController for TuiController {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(&self, board: &Board, legal_moves: &[Move]) -> Option<Move> {
        let mut state = DisplayState::new();
        state.show_cursor = true;
        state.last_move = board.history().last().copied();
        // Start the cursor on one of our pieces.
        if let Some(mv) = legal_moves.first() {
            state.cursor = mv.from();
        }
        let mut buffer = String::new();

        loop {
            state.status_msg.get_or_insert_with(|| {
                if buffer.is_empty() {
                    format!("{} to move ({})", self.name, self.side)
                } else {
                    format!("{} to move ({}): {}", self.name, self.side, buffer)
                }
            });
            render_board(board, &state);
            print!("[Arrows]: move  [Enter]: select  [a1..h8]: type  [Esc]: cancel  [q]: resign\r\n");
            state.status_msg = None;

            if !event::poll(Duration::from_millis(100)).unwrap_or(false) {
                continue;
            }
            let key = match event::read() {
                Ok(Event::Key(KeyEvent { code, .. })) => code,
                _ => continue,
            };
            match key {
                KeyCode::Char('q') => return None,
                KeyCode::Esc => {
                    state.selected = None;
                    state.highlights.clear();
                    buffer.clear();
                }
                KeyCode::Up => {
                    if state.cursor.row() < 7 {
                        state.cursor = Square::new(state.cursor.col(), state.cursor.row() + 1);
                    }
                }
                KeyCode::Down => {
                    if state.cursor.row() > 0 {
                        state.cursor = Square::new(state.cursor.col(), state.cursor.row() - 1);
                    }
                }
                KeyCode::Left => {
                    if state.cursor.col() > 0 {
                        state.cursor = Square::new(state.cursor.col() - 1, state.cursor.row());
                    }
                }
                KeyCode::Right => {
                    if state.cursor.col() < 7 {
                        state.cursor = Square::new(state.cursor.col() + 1, state.cursor.row());
                    }
                }
                KeyCode::Backspace => {
                    buffer.pop();
                }
                KeyCode::Char(ch @ ('a'..='h' | '1'..='8')) => {
                    buffer.push(ch);
                    if buffer.len() == 4 {
                        match Self::typed_move(&buffer, legal_moves) {
                            Ok(mv) => return Some(mv),
                            Err(msg) => state.status_msg = Some(msg),
                        }
                        buffer.clear();
                    }
                }
                KeyCode::Enter | KeyCode::Char(' ') => match state.selected {
                    None => {
                        if board.get(state.cursor) == Some(self.side) {
                            state.selected = Some(state.cursor);
                            state.highlights = Self::destinations(legal_moves, state.cursor);
                            if state.highlights.is_empty() {
                                state.status_msg =
                                    Some(format!("{} has no legal moves", state.cursor));
                                state.selected = None;
                            }
                        } else {
                            state.status_msg = Some("select one of your pieces".to_string());
                        }
                    }
                    Some(from) => {
                        if state.cursor == from {
                            state.selected = None;
                            state.highlights.clear();
                        } else if state.highlights.contains(&state.cursor) {
                            return legal_moves
                                .iter()
                                .find(|mv| mv.from() == from && mv.to() == state.cursor)
                                .copied();
                        } else {
                            state.status_msg =
                                Some(format!("{}-{} is not legal", from, state.cursor));
                        }
                    }
                },
                _ => {}
            }
        }
    }
}
