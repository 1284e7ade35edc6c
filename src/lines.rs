//! The fixed table of winning lines and line queries

use std::collections::HashSet;

use crate::board::{Cell, Mark};

/// A fixed triple of cell indices forming a potential win
pub type Line = [usize; 3];

/// Winning line indices on the 3x3 board.
///
/// Table order is the tie-break for the move-selection policy: rows first,
/// then columns, then diagonals.
pub const WINNING_LINES: [Line; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Find the first line fully owned by `mark`, in table order.
///
/// The matched line is returned so hosts can highlight the winning cells.
pub fn winning_line(cells: &[Cell; 9], mark: Mark) -> Option<Line> {
    let target = mark.to_cell();
    WINNING_LINES
        .iter()
        .find(|line| line.iter().all(|&idx| cells[idx] == target))
        .copied()
}

/// Check if `mark` owns three cells in any line
pub fn has_won(cells: &[Cell; 9], mark: Mark) -> bool {
    winning_line(cells, mark).is_some()
}

/// Find the cell that would complete `line` for a set of claimed cells.
///
/// Returns the remaining cell index when exactly two of the line's cells are
/// in `claimed`. The returned cell is not necessarily empty; the caller
/// checks availability.
pub fn line_completion(line: &Line, claimed: &HashSet<usize>) -> Option<usize> {
    let mut count = 0;
    let mut remaining = None;

    for &idx in line {
        if claimed.contains(&idx) {
            count += 1;
        } else if remaining.is_some() {
            return None;
        } else {
            remaining = Some(idx);
        }
    }

    if count == 2 { remaining } else { None }
}
