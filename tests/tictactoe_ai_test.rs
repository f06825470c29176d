//! Tests for computer move selection.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;
use strictly_noughts::{
    Board, Difficulty, MEDIUM_RANDOM_THRESHOLD, Mark, Outcome, arena, evaluate, select_move,
};
use strum::IntoEnumIterator;

/// Walks every game where `computer` plays Hard and the opponent tries every
/// reply. Returns the number of finished games checked.
fn explore(
    board: Board,
    to_move: Mark,
    computer: Mark,
    memo: &mut HashMap<Board, usize>,
    rng: &mut StdRng,
) -> usize {
    match evaluate(&board) {
        Outcome::Win { mark, .. } => {
            assert_eq!(mark, computer, "Hard lost on {board}");
            return 1;
        }
        Outcome::Tie => return 1,
        Outcome::InProgress => {}
    }

    if to_move == computer {
        let index = *memo.entry(board).or_insert_with(|| {
            select_move(&board, computer, Difficulty::Hard, rng).expect("board has room")
        });
        let next = board.place(index, computer).unwrap();
        explore(next, to_move.opponent(), computer, memo, rng)
    } else {
        board
            .empty_cells()
            .into_iter()
            .map(|i| {
                let next = board.place(i, to_move).unwrap();
                explore(next, computer, computer, memo, rng)
            })
            .sum()
    }
}

#[test]
fn test_hard_never_loses() {
    let mut rng = StdRng::seed_from_u64(0);
    for computer in [Mark::X, Mark::O] {
        let mut memo = HashMap::new();
        for starting in [Mark::X, Mark::O] {
            let games = explore(Board::new(), starting, computer, &mut memo, &mut rng);
            assert!(games > 0);
        }
    }
}

#[test]
fn test_hard_versus_hard_always_ties() {
    let mut rng = StdRng::seed_from_u64(0);
    for starting in [Mark::X, Mark::O] {
        let session = arena::play_out(Difficulty::Hard, Difficulty::Hard, starting, &mut rng);
        assert_eq!(session.outcome(), Outcome::Tie);
    }
}

#[test]
fn test_hard_blocks_two_in_a_row() {
    let mut rng = StdRng::seed_from_u64(0);
    let board: Board = "XX. ... ...".parse().unwrap();
    for _ in 0..5 {
        assert_eq!(select_move(&board, Mark::O, Difficulty::Hard, &mut rng), Some(2));
    }
}

#[test]
fn test_never_returns_occupied_square() {
    let mut rng = StdRng::seed_from_u64(8);
    for difficulty in Difficulty::iter() {
        for _ in 0..40 {
            // Random partial board with legal mark counts.
            let mut board = Board::new();
            let mut mark = Mark::X;
            let filled = rng.random_range(0..8);
            for _ in 0..filled {
                let Some(index) = select_move(&board, mark, Difficulty::Easy, &mut rng) else {
                    break;
                };
                board = board.place(index, mark).unwrap();
                mark = mark.opponent();
            }
            if let Some(index) = select_move(&board, mark, difficulty, &mut rng) {
                assert!(board.is_empty(index), "{difficulty} chose {index} on {board}");
            } else {
                assert!(!board.has_empty_cell());
            }
        }
    }
}

#[test]
fn test_medium_plays_optimally_sixty_percent() {
    // O to move; 5 completes the middle row and is the only optimal move.
    let board: Board = "XX. OO. X..".parse().unwrap();
    let empty = board.empty_cells();
    assert_eq!(empty, vec![2, 5, 7, 8]);

    let mut rng = StdRng::seed_from_u64(2024);
    let samples = 10_000;
    let mut searched = 0;
    let mut counts: HashMap<usize, u32> = HashMap::new();

    for _ in 0..samples {
        // Peek at the draw Medium is about to make.
        let r: f64 = rng.clone().random();
        let index = select_move(&board, Mark::O, Difficulty::Medium, &mut rng).unwrap();
        if r <= MEDIUM_RANDOM_THRESHOLD {
            searched += 1;
            assert_eq!(index, 5);
        }
        *counts.entry(index).or_default() += 1;
    }

    let searched_share = f64::from(searched) / f64::from(samples);
    assert!((searched_share - 0.6).abs() < 0.02, "searched {searched_share}");

    // Random play spreads 40% evenly over four squares.
    let optimal_share = f64::from(counts[&5]) / f64::from(samples);
    assert!((optimal_share - 0.7).abs() < 0.02, "optimal {optimal_share}");
    for index in [2, 7, 8] {
        let share = f64::from(counts[&index]) / f64::from(samples);
        assert!((share - 0.1).abs() < 0.015, "square {index} at {share}");
    }
}

#[test]
fn test_easy_is_uniform() {
    let board: Board = "X.. .O. ...".parse().unwrap();
    let mut rng = StdRng::seed_from_u64(31);
    let mut counts = [0u32; 9];
    let samples = 7_000;
    for _ in 0..samples {
        let index = select_move(&board, Mark::X, Difficulty::Easy, &mut rng).unwrap();
        counts[index] += 1;
    }
    assert_eq!(counts[0], 0);
    assert_eq!(counts[4], 0);
    for index in board.empty_cells() {
        let share = f64::from(counts[index]) / f64::from(samples);
        assert!((share - 1.0 / 7.0).abs() < 0.02, "square {index} at {share}");
    }
}

#[test]
fn test_no_legal_move_on_full_board() {
    let mut rng = StdRng::seed_from_u64(1);
    let board: Board = "OXO OXX XOX".parse().unwrap();
    for difficulty in Difficulty::iter() {
        assert_eq!(select_move(&board, Mark::X, difficulty, &mut rng), None);
    }
}
