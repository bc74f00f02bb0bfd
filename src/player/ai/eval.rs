use crate::core::{Board, Outcome, Side};

/// A position-score magnitude indicating a win: positive for Black, the
/// maximizing side, negative for White.
pub const WINNING_VALUE: i32 = 1_000_000;

/// A magnitude strictly greater than any reachable score.
pub const INFTY: i32 = i32::MAX;

/// Static evaluation from Black's viewpoint. A decided position scores
/// `±WINNING_VALUE` (0 for a tie); otherwise fewer connected regions and
/// a larger largest region are better. The non-terminal weights are a
/// tunable, the win/loss magnitudes are not.
pub fn evaluate(board: &Board) -> i32 {
    match board.winner() {
        Some(Outcome::Winner(Side::Black)) => WINNING_VALUE,
        Some(Outcome::Winner(Side::White)) => -WINNING_VALUE,
        Some(Outcome::Tie) => 0,
        None => {
            let black = board.region_sizes(Side::Black);
            let white = board.region_sizes(Side::White);
            let largest_black = black.first().copied().unwrap_or(0) as i32;
            let largest_white = white.first().copied().unwrap_or(0) as i32;
            100 * (white.len() as i32 - black.len() as i32)
                + 10 * (largest_black - largest_white)
        }
    }
}
