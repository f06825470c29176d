//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating a board. Rules are separated from board
//! storage so the controller and the search share one definition.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{InvalidLine, LINES, Line, LineKind, check_winner, winning_line};

use super::{Board, Outcome};
use tracing::instrument;

/// Evaluates the board's terminal status.
///
/// Lines are scanned in [`LINES`] order and the first complete one wins the
/// report. Without a complete line the board is a tie once full.
#[instrument(level = "trace")]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some((line, mark)) = winning_line(board) {
        return Outcome::Win { line, mark };
    }
    if is_full(board) {
        Outcome::Tie
    } else {
        Outcome::InProgress
    }
}
