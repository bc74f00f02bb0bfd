use crate::core::{Board, Move, Side, Square, BOARD_SIZE};
use crossterm::{cursor, execute, style::Stylize, terminal};
use std::io::stdout;

/// Per-frame UI state handed to the renderer alongside the board
/// snapshot. The renderer never mutates the board.
pub struct DisplayState {
    pub cursor: Square,
    pub selected: Option<Square>,
    pub highlights: Vec<Square>,
    pub status_msg: Option<String>,
    pub last_move: Option<Move>,
    pub show_cursor: bool,
}

impl Default for DisplayState {
    fn default() -> Self {
        Self {
            cursor: Square::new(0, 0),
            selected: None,
            highlights: Vec::new(),
            status_msg: None,
            last_move: None,
            show_cursor: false,
        }
    }
}

impl DisplayState {
    pub fn new() -> Self {
        Self::default()
    }
}

pub fn render_board(board: &Board, state: &DisplayState) {
    let mut out = stdout();

    execute!(
        out,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0)
    )
    .unwrap();

    print!("=== Lines of Action ===\r\n");
    if let Some(msg) = &state.status_msg {
        print!("{}\r\n", msg.clone().bold().yellow());
    } else {
        print!("\r\n");
    }
    print!("\r\n");

    // Column labels
    print!("    ");
    for col in 0..BOARD_SIZE {
        print!(" {} ", (b'a' + col) as char);
    }
    print!("\r\n");

    for row in (0..BOARD_SIZE).rev() {
        print!("  {} ", row + 1);
        for col in 0..BOARD_SIZE {
            let sq = Square::new(col, row);
            let mark = match board.get(sq) {
                Some(Side::Black) => 'b',
                Some(Side::White) => 'w',
                None => {
                    if state.highlights.contains(&sq) {
                        '*'
                    } else {
                        '.'
                    }
                }
            };
            let cell = format!(" {} ", mark);
            if state.show_cursor && sq == state.cursor {
                print!("{}", cell.reverse());
            } else if state.selected == Some(sq) {
                print!("{}", cell.bold().cyan());
            } else if state.highlights.contains(&sq) {
                print!("{}", cell.green());
            } else if state.last_move.map_or(false, |mv| mv.to() == sq || mv.from() == sq) {
                print!("{}", cell.yellow());
            } else {
                print!("{}", cell);
            }
        }
        print!(" {}\r\n", row + 1);
    }

    print!("    ");
    for col in 0..BOARD_SIZE {
        print!(" {} ", (b'a' + col) as char);
    }
    print!("\r\n\r\n");

    print!(
        "  Moves: {} (Black {}, White {}, tie at {})\r\n",
        board.moves_made(),
        board.moves_made_by(Side::Black),
        board.moves_made_by(Side::White),
        board.move_limit()
    );
    if let Some(mv) = &state.last_move {
        print!("  Last move: {}\r\n", mv);
    }
}
