//! Exact minimax search over the full game tree.
//!
//! The search recurses over board copies and never mutates its input, so it
//! can run against a snapshot of a live session without touching it.

use crate::games::tictactoe::rules::check_winner;
use crate::games::tictactoe::{Board, Mark};
use tracing::{debug, instrument};

/// Score of a board won by the computer.
pub const WIN_SCORE: i32 = 10;

/// Starting value for the top-level search; lower than any reachable score.
const SENTINEL: i32 = -1000;

/// Static score from the computer's point of view: `+10` if it owns a
/// complete line, `-10` if the opponent does, `0` otherwise.
pub fn score(board: &Board, computer: Mark) -> i32 {
    match check_winner(board) {
        Some(mark) if mark == computer => WIN_SCORE,
        Some(_) => -WIN_SCORE,
        None => 0,
    }
}

/// Depth-aware minimax value of `board`.
///
/// Wins are worth `10 - depth` and losses `-10 + depth`, so the search
/// prefers faster wins and slower losses. `maximizing` means the computer
/// moves next.
pub fn minimax(board: &Board, computer: Mark, depth: i32, maximizing: bool) -> i32 {
    match score(board, computer) {
        WIN_SCORE => return WIN_SCORE - depth,
        s if s == -WIN_SCORE => return -WIN_SCORE + depth,
        _ => {}
    }
    if !board.has_empty_cell() {
        return 0;
    }

    let mover = if maximizing { computer } else { computer.opponent() };
    let children = board
        .empty_cells()
        .into_iter()
        .filter_map(|i| board.place(i, mover).ok())
        .map(|child| minimax(&child, computer, depth + 1, !maximizing));

    if maximizing {
        children.fold(SENTINEL, i32::max)
    } else {
        children.fold(-SENTINEL, i32::min)
    }
}

/// Optimal move for `computer`, or `None` on a full board.
///
/// Candidates are tried in ascending index order and only a strictly
/// greater value replaces the incumbent, so ties go to the lowest index.
#[instrument(level = "debug", skip(board), fields(board = %board))]
pub fn best_move(board: &Board, computer: Mark) -> Option<usize> {
    let mut best_val = SENTINEL;
    let mut best = None;

    for index in board.empty_cells() {
        let Ok(child) = board.place(index, computer) else {
            continue;
        };
        let value = minimax(&child, computer, 0, false);
        if value > best_val {
            best_val = value;
            best = Some(index);
        }
    }

    debug!(?best, best_val, "Minimax search complete");
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score() {
        let board: Board = "OOO XX. ...".parse().unwrap();
        assert_eq!(score(&board, Mark::O), 10);
        assert_eq!(score(&board, Mark::X), -10);
        assert_eq!(score(&Board::new(), Mark::X), 0);
    }

    #[test]
    fn test_minimax_terminal_values() {
        let won: Board = "XXX OO. ...".parse().unwrap();
        assert_eq!(minimax(&won, Mark::X, 3, true), 7);
        assert_eq!(minimax(&won, Mark::O, 3, true), -7);
        let tie: Board = "XOX OXX OXO".parse().unwrap();
        assert_eq!(minimax(&tie, Mark::X, 0, true), 0);
    }

    #[test]
    fn test_takes_immediate_win() {
        // O can win at 2 or block at 5; winning now is worth more.
        let board: Board = "OO. XX. X..".parse().unwrap();
        assert_eq!(best_move(&board, Mark::O), Some(2));
    }

    #[test]
    fn test_blocks_opponent() {
        let board: Board = "XX. ... ...".parse().unwrap();
        assert_eq!(best_move(&board, Mark::O), Some(2));
    }

    #[test]
    fn test_empty_board_prefers_lowest_index_on_ties() {
        // Every opening draws under perfect play, so index 0 keeps the lead.
        assert_eq!(best_move(&Board::new(), Mark::X), Some(0));
    }

    #[test]
    fn test_full_board_has_no_move() {
        let board: Board = "XOX OXX OXO".parse().unwrap();
        assert_eq!(best_move(&board, Mark::X), None);
    }

    #[test]
    fn test_search_leaves_input_untouched() {
        let board: Board = "X.. .O. ...".parse().unwrap();
        let before = board;
        let _ = best_move(&board, Mark::X);
        assert_eq!(board, before);
    }
}
