pub mod board;
pub mod r#move;
pub mod setup;
pub mod square;
pub mod types;

pub use board::{Board, DEFAULT_MOVE_LIMIT};
pub use r#move::Move;
pub use setup::cells_from_rows;
pub use square::{Direction, Square, ALL_SQUARES, BOARD_SIZE};
pub use types::{Error, Outcome, Side};
