use super::square::Square;
use super::types::Side;

/// The standard initial layout, top row (row 8) first: Black on the top
/// and bottom ranks, White on the left and right files, corners empty.
pub const INITIAL_SETUP: [&str; 8] = [
    ". b b b b b b .",
    "w . . . . . . w",
    "w . . . . . . w",
    "w . . . . . . w",
    "w . . . . . . w",
    "w . . . . . . w",
    "w . . . . . . w",
    ". b b b b b b .",
];

/// Occupancy for the standard initial position.
pub fn initial_cells() -> [Option<Side>; 64] {
    cells_from_rows(&INITIAL_SETUP)
}

/// Build an occupancy array from 8 rows of 8 whitespace-separated cell
/// marks, top row (row 8) first: `b` Black, `w` White, `.` empty.
/// Intended for fixed layouts and test positions; panics on anything
/// malformed.
pub fn cells_from_rows(rows: &[&str]) -> [Option<Side>; 64] {
    assert_eq!(rows.len(), 8, "setup must have 8 rows");
    let mut cells = [None; 64];
    for (i, row) in rows.iter().enumerate() {
        let row_index = 7 - i as u8;
        let marks: Vec<&str> = row.split_whitespace().collect();
        assert_eq!(marks.len(), 8, "setup row {:?} must have 8 cells", row);
        for (col, mark) in marks.iter().enumerate() {
            let cell = match *mark {
                "b" => Some(Side::Black),
                "w" => Some(Side::White),
                "." => None,
                other => panic!("bad setup cell {:?}", other),
            };
            cells[Square::new(col as u8, row_index).index()] = cell;
        }
    }
    cells
}
