use crate::core::{cells_from_rows, Board, Error, Move, Outcome, Side, Square, ALL_SQUARES};
use crate::player::ai::eval::WINNING_VALUE;
use crate::player::{MachinePlayer, PlayerController};

fn board_from(rows: &[&str; 8], turn: Side) -> Board {
    Board::from_cells(cells_from_rows(rows), turn)
}

fn sq(designator: &str) -> Square {
    designator.parse().unwrap()
}

#[test]
fn initial_position_is_in_progress() {
    let board = Board::new();
    assert_eq!(board.turn(), Side::Black);
    assert_eq!(board.winner(), None);
    assert!(!board.game_over());
    assert_eq!(board.moves_made(), 0);
    assert_eq!(board.region_sizes(Side::Black), vec![6, 6]);
    assert_eq!(board.region_sizes(Side::White), vec![6, 6]);
}

#[test]
fn legal_moves_matches_is_legal_exactly() {
    let board = Board::new();
    let moves = board.legal_moves();
    assert!(!moves.is_empty());
    let mut expected = 0;
    for &from in ALL_SQUARES.iter() {
        for &to in ALL_SQUARES.iter() {
            if board.is_legal(from, to) {
                expected += 1;
                assert!(
                    moves.iter().any(|mv| mv.from() == from && mv.to() == to),
                    "legal_moves missing {}-{}",
                    from,
                    to
                );
            }
        }
    }
    assert_eq!(moves.len(), expected);
}

#[test]
fn every_legal_move_leaves_opponent_on_move() {
    let board = Board::new();
    let mut work = board.scratch_copy();
    for mv in board.legal_moves() {
        work.make_move(mv);
        assert_eq!(work.turn(), Side::White);
        work.retract();
    }
    assert_eq!(work, board);
}

#[test]
fn move_distance_must_equal_line_count() {
    // Rank 1 holds exactly two pieces (b1, c1), so rank moves go exactly
    // two squares; own pieces on the path are jumped, not blocking.
    let board = board_from(
        &[
            ". . . . . . . b",
            ". . . . . . . .",
            ". . . . . w . .",
            ". . . . . . . .",
            "w . . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". b b . . . . .",
        ],
        Side::Black,
    );
    assert!(board.is_legal(sq("b1"), sq("d1")));
    assert!(!board.is_legal(sq("b1"), sq("a1")), "one short of the count");
    assert!(!board.is_legal(sq("b1"), sq("e1")), "one past the count");
}

#[test]
fn opposing_piece_blocks_short_of_destination() {
    // File c holds c1 and c2; the white piece on c2 blocks c1's two-step
    // move up the file.
    let board = board_from(
        &[
            ". . . . . . . w",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . w . . . . .",
            "b . b . . . . .",
        ],
        Side::Black,
    );
    assert!(!board.is_legal(sq("c1"), sq("c3")));
    // An opposing piece exactly on the destination is a capture, not a
    // block: rank 1 holds a1 and c1 only.
    let board = board_from(
        &[
            "b . . . . . . w",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            "b . w . . . . .",
        ],
        Side::Black,
    );
    assert!(board.is_legal(sq("a1"), sq("c1")));
}

#[test]
fn cannot_land_on_own_piece() {
    let board = Board::new();
    // Rank 1 has six black pieces, so b1 moves six squares along it:
    // b1-h1 (jumping its own pieces) is fine, landing on one is not.
    assert!(board.is_legal(sq("b1"), sq("h1")));
    assert!(!board.is_legal(sq("b1"), sq("g1")));
}

#[test]
fn capture_applies_and_retracts_exactly() {
    let rows = [
        ". . . . . . . w",
        ". . . . . . . .",
        ". . . w . . . .",
        ". . . . . . . .",
        ". . . b . . . .",
        ". . . . . . . .",
        ". . . . . . . .",
        "b . . . . . . w",
    ];
    let mut board = board_from(&rows, Side::Black);
    let before = board.scratch_copy();

    assert!(board.is_legal(sq("d4"), sq("d6")));
    board.make_move(Move::new(sq("d4"), sq("d6")));

    assert_eq!(board.get(sq("d6")), Some(Side::Black));
    assert_eq!(board.get(sq("d4")), None);
    assert_eq!(board.turn(), Side::White);
    assert!(board.history().last().unwrap().is_capture());
    assert_eq!(board.moves_made(), 1);
    assert_eq!(board.moves_made_by(Side::Black), 1);
    assert_eq!(board.moves_made_by(Side::White), 0);

    board.retract();
    assert_eq!(board.get(sq("d4")), Some(Side::Black));
    assert_eq!(board.get(sq("d6")), Some(Side::White));
    assert_eq!(board.turn(), Side::Black);
    assert_eq!(board.moves_made(), 0);
    assert_eq!(board.moves_made_by(Side::Black), 0);
    assert_eq!(board, before);
}

#[test]
fn region_sizes_for_blob_and_isolated_pieces() {
    let blob = board_from(
        &[
            "w . . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . b . . . . .",
            ". . b b . . . .",
            ". . . . . . . .",
            ". . . . . . . w",
        ],
        Side::Black,
    );
    assert_eq!(blob.region_sizes(Side::Black), vec![3]);
    assert!(blob.pieces_contiguous(Side::Black));
    assert_eq!(blob.region_sizes(Side::White), vec![1, 1]);
    assert_eq!(blob.region_count(Side::White), 2);
    assert!(!blob.pieces_contiguous(Side::White));
}

#[test]
fn region_cache_invalidated_by_apply_and_retract() {
    let mut board = Board::new();
    assert_eq!(board.region_sizes(Side::Black), vec![6, 6]);
    board.make_move(Move::new(sq("b1"), sq("b3")));
    assert_eq!(board.region_sizes(Side::Black), vec![6, 5, 1]);
    board.retract();
    assert_eq!(board.region_sizes(Side::Black), vec![6, 6]);
}

#[test]
fn single_contiguous_side_wins() {
    let board = board_from(
        &[
            "w . . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . b . . . . .",
            ". . b b . . . .",
            ". . . . . . . .",
            ". . . . . . . w",
        ],
        Side::White,
    );
    assert_eq!(board.winner(), Some(Outcome::Winner(Side::Black)));
    assert!(board.game_over());
}

#[test]
fn simultaneous_contiguity_favors_side_not_on_move() {
    let rows = [
        ". . . . . . . w",
        ". . . . . . . w",
        ". . . . . . . .",
        ". . . . . . . .",
        ". . . . . . . .",
        ". . . . . . . .",
        "b . . . . . . .",
        "b . . . . . . .",
    ];
    let black_to_move = board_from(&rows, Side::Black);
    assert_eq!(black_to_move.winner(), Some(Outcome::Winner(Side::White)));
    let white_to_move = board_from(&rows, Side::White);
    assert_eq!(white_to_move.winner(), Some(Outcome::Winner(Side::Black)));
}

#[test]
fn move_limit_produces_tie_distinct_from_in_progress() {
    let mut board = Board::new();
    board.set_move_limit(2).unwrap();
    assert_eq!(board.move_limit(), 4);
    for expected in 1..=4 {
        assert_eq!(board.winner(), None, "game ended early");
        let mv = board.legal_moves()[0];
        board.make_move(mv);
        assert_eq!(board.moves_made(), expected);
    }
    assert_eq!(board.winner(), Some(Outcome::Tie));
    assert!(board.game_over());
}

#[test]
fn undersized_move_limit_is_rejected() {
    let mut board = Board::new();
    board.set_move_limit(2).unwrap();
    for _ in 0..4 {
        let mv = board.legal_moves()[0];
        board.make_move(mv);
    }
    assert_eq!(
        board.set_move_limit(2),
        Err(Error::MoveLimitTooSmall { limit: 2, made: 4 })
    );
    // A larger limit reopens the game.
    board.set_move_limit(3).unwrap();
    assert_eq!(board.winner(), None);
}

#[test]
fn clear_returns_to_the_initial_position() {
    let mut board = Board::new();
    board.make_move(Move::new(sq("b1"), sq("b3")));
    board.clear();
    assert_eq!(board, Board::new());
    assert_eq!(board.moves_made(), 0);
}

#[test]
fn scratch_copy_resets_history_but_not_position() {
    let mut board = Board::new();
    board.make_move(Move::new(sq("b1"), sq("b3")));
    let copy = board.scratch_copy();
    assert_eq!(copy, board);
    assert_eq!(copy.moves_made(), 0);
    assert_eq!(copy.turn(), Side::White);
}

#[test]
#[should_panic(expected = "illegal move")]
fn applying_illegal_move_panics() {
    let mut board = Board::new();
    board.make_move(Move::new(sq("a1"), sq("a2")));
}

#[test]
#[should_panic(expected = "no moves to retract")]
fn retracting_fresh_board_panics() {
    let mut board = Board::new();
    board.retract();
}

// Exactly one legal move: every other black ray is blocked by a white
// piece short of its mandated distance, leaving only c1-e1.
fn single_move_position() -> Board {
    board_from(
        &[
            ". . . . . . . w",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            "w w w w . . . .",
            "b . b . . . . .",
        ],
        Side::Black,
    )
}

#[test]
fn position_has_exactly_one_legal_move() {
    let board = single_move_position();
    assert_eq!(board.winner(), None);
    let moves = board.legal_moves();
    assert_eq!(moves.len(), 1);
    assert_eq!(moves[0], Move::new(sq("c1"), sq("e1")));
}

#[test]
fn search_returns_the_only_legal_move() {
    let board = single_move_position();
    let legal = board.legal_moves();

    let mut depth_one = MachinePlayer::new(Side::Black, "Machine");
    depth_one.depth = 1;
    let chosen = depth_one.choose_move(&board, &legal).unwrap();
    assert_eq!(chosen, Move::new(sq("c1"), sq("e1")));

    let full_depth = MachinePlayer::new(Side::Black, "Machine");
    let chosen = full_depth.choose_move(&board, &legal).unwrap();
    assert_eq!(chosen, Move::new(sq("c1"), sq("e1")));
}

#[test]
fn search_prefers_an_immediate_win_black() {
    // Black connects with one move (for instance a1-a2 joins b3);
    // whichever winning move the search picks must actually win.
    let board = board_from(
        &[
            ". . . . . . . w",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". b . . . . . .",
            ". . . . . . . .",
            "b . . . . . . w",
        ],
        Side::Black,
    );
    assert_eq!(board.winner(), None);
    for depth in 1..=3 {
        let mut machine = MachinePlayer::new(Side::Black, "Machine");
        machine.depth = depth;
        let legal = board.legal_moves();
        let chosen = machine.choose_move(&board, &legal).unwrap();
        let mut work = board.scratch_copy();
        work.make_move(chosen);
        assert_eq!(
            work.winner(),
            Some(Outcome::Winner(Side::Black)),
            "depth {} chose non-winning {}",
            depth,
            chosen
        );
    }
}

#[test]
fn search_prefers_an_immediate_win_white() {
    // The minimizing side hunts its own wins symmetrically.
    let board = board_from(
        &[
            ". . . b . b . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". w . . . . . .",
            ". . . . . . . .",
            "w . . . . . . .",
        ],
        Side::White,
    );
    assert_eq!(board.winner(), None);
    for depth in 1..=3 {
        let mut machine = MachinePlayer::new(Side::White, "Machine");
        machine.depth = depth;
        let legal = board.legal_moves();
        let chosen = machine.choose_move(&board, &legal).unwrap();
        let mut work = board.scratch_copy();
        work.make_move(chosen);
        assert_eq!(
            work.winner(),
            Some(Outcome::Winner(Side::White)),
            "depth {} chose non-winning {}",
            depth,
            chosen
        );
    }
}

#[test]
fn winning_positions_score_above_every_ordinary_position() {
    // The magnitude contract: any decided position dominates any finite
    // heuristic score.
    let decided = board_from(
        &[
            "w . . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . b . . . . .",
            ". . b b . . . .",
            ". . . . . . . .",
            ". . . . . . . w",
        ],
        Side::White,
    );
    let ordinary = Board::new();
    let decided_score = crate::player::ai::eval::evaluate(&decided);
    let ordinary_score = crate::player::ai::eval::evaluate(&ordinary);
    assert_eq!(decided_score, WINNING_VALUE);
    assert!(ordinary_score.abs() < WINNING_VALUE);
}

#[test]
fn board_text_rendering() {
    let text = Board::new().to_string();
    assert!(text.contains("- b b b b b b -"));
    assert!(text.contains("w - - - - - - w"));
    assert!(text.contains("Next move: Black"));
}

#[test]
fn history_designator_round_trip() {
    let mut board = Board::new();
    let mv: Move = "b1-b3".parse().unwrap();
    assert!(board.is_legal_move(mv));
    board.make_move(mv);
    assert_eq!(board.history()[0].to_string(), "b1-b3");
    assert_eq!(board.get(sq("b3")), Some(Side::Black));
}
