//! Full-board detection for tic-tac-toe.

use super::super::Board;

/// Checks if the board is full (all squares occupied).
pub fn is_full(board: &Board) -> bool {
    !board.has_empty_cell()
}
