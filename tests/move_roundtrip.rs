//! Apply/retract balance over arbitrary legal games.

use lines_of_action::core::Board;
use proptest::prelude::*;

proptest! {
    /// Applying any sequence of legal moves and retracting the same
    /// number restores occupancy and turn bit-exactly.
    #[test]
    fn apply_then_retract_restores_position(
        picks in prop::collection::vec(0usize..1024, 1..40),
    ) {
        let mut board = Board::new();
        let before = board.scratch_copy();
        let mut applied = 0;
        for pick in picks {
            if board.winner().is_some() {
                break;
            }
            let moves = board.legal_moves();
            if moves.is_empty() {
                break;
            }
            let side = board.turn();
            board.make_move(moves[pick % moves.len()]);
            prop_assert_eq!(board.turn(), side.opponent());
            applied += 1;
        }
        for _ in 0..applied {
            board.retract();
        }
        prop_assert_eq!(&board, &before);
        prop_assert_eq!(board.moves_made(), 0);
    }

    /// The per-side counters track the history in lockstep.
    #[test]
    fn move_counters_follow_history(
        picks in prop::collection::vec(0usize..1024, 1..30),
    ) {
        let mut board = Board::new();
        for pick in picks {
            if board.winner().is_some() {
                break;
            }
            let moves = board.legal_moves();
            if moves.is_empty() {
                break;
            }
            board.make_move(moves[pick % moves.len()]);
        }
        let black = board.moves_made_by(lines_of_action::core::Side::Black);
        let white = board.moves_made_by(lines_of_action::core::Side::White);
        prop_assert_eq!(black + white, board.moves_made());
        prop_assert!(black == white || black == white + 1);
    }
}
