//! Three-in-a-row detection over a single board snapshot.

use serde::Serialize;

use crate::game::{Board, Cell, Player};

/// Winning lines in the order they are checked: rows, columns, diagonals.
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

/// The side holding a complete line and the cells forming it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WinnerInfo {
    pub winner: Player,
    pub winning_cells: [usize; 3],
}

/// Returns the first complete line in [`WINNING_LINES`] order, if any.
///
/// More than one line can be complete after the last move of a game; the
/// fixed ordering makes the reported line deterministic.
pub fn detect_winner(board: &Board) -> Option<WinnerInfo> {
    WINNING_LINES.iter().find_map(|&[a, b, c]| {
        match board.cell(a) {
            Cell::Occupied(player)
                if board.cell(b) == Cell::Occupied(player)
                    && board.cell(c) == Cell::Occupied(player) =>
            {
                Some(WinnerInfo {
                    winner: player,
                    winning_cells: [a, b, c],
                })
            }
            _ => None,
        }
    })
}
