//! Winning line analysis for Tic-Tac-Toe

use super::{Cell, Side};

/// Winning line indices on the 3x3 board, in evaluation order
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Utility for analyzing winning lines in Tic-Tac-Toe
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Side owning the first completed line, in `WINNING_LINES` order.
    ///
    /// A line of three empty cells is not a win.
    pub fn winner(cells: &[Cell; 9]) -> Option<Side> {
        WINNING_LINES.iter().find_map(|&[a, b, c]| {
            if cells[a] == cells[b] && cells[b] == cells[c] {
                cells[a].side()
            } else {
                None
            }
        })
    }
}
