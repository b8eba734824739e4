use super::types::{CELL_COUNT, Cell, Side};

/// Rows, then columns, then the two diagonals.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn check_win(cells: &[Cell; CELL_COUNT]) -> Option<Side> {
    check_win_with_line(cells).map(|(side, _)| side)
}

pub fn check_win_with_line(cells: &[Cell; CELL_COUNT]) -> Option<(Side, [usize; 3])> {
    for line in WINNING_LINES {
        let [a, b, c] = line;
        if let Cell::Occupied(side) = cells[a]
            && cells[b] == cells[a]
            && cells[c] == cells[a]
        {
            return Some((side, line));
        }
    }
    None
}
