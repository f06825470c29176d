//! Computer move selection with three difficulty tiers.
//!
//! Randomness is an injected [`rand::Rng`] so callers (and tests) choose
//! between entropy and a seeded generator.

mod minimax;
mod random;

pub use minimax::{WIN_SCORE, best_move, minimax, score};
pub use random::random_move;

use super::{Board, Mark};
use derive_more::Display;
use rand::Rng;
use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString};
use tracing::{debug, instrument};

/// Above this draw, Medium plays a random square instead of searching.
///
/// `r > 0.6` happens 40% of the time, so Medium searches on 60% of turns.
pub const MEDIUM_RANDOM_THRESHOLD: f64 = 0.6;

/// Strength of the computer opponent, fixed for a game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum Difficulty {
    /// Uniform random squares.
    Easy,
    /// Optimal 60% of the time, random otherwise.
    Medium,
    /// Exact minimax; never loses.
    #[default]
    Hard,
}

/// Chooses a square for `computer`.
///
/// Returns `None` only when the board has no empty square. Easy and the
/// random branch of Medium choose uniformly among empty squares. Medium
/// draws exactly one `r` in `[0, 1)` per call before branching.
#[instrument(level = "debug", skip(board, rng), fields(board = %board))]
pub fn select_move<R: Rng + ?Sized>(
    board: &Board,
    computer: Mark,
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<usize> {
    let choice = match difficulty {
        Difficulty::Easy => random_move(board, rng),
        Difficulty::Medium => {
            let r: f64 = rng.random();
            if r > MEDIUM_RANDOM_THRESHOLD {
                debug!(r, "Medium falling back to random play");
                random_move(board, rng)
            } else {
                best_move(board, computer)
            }
        }
        Difficulty::Hard => best_move(board, computer),
    };
    debug!(?choice, "Computer move selected");
    choice
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use strum::IntoEnumIterator;

    #[test]
    fn test_never_picks_occupied_square() {
        let mut rng = StdRng::seed_from_u64(11);
        let boards = ["XX. ... ...", "XO. OX. ..O", "XOX OXO ..."];
        for difficulty in Difficulty::iter() {
            for notation in boards {
                let board: Board = notation.parse().unwrap();
                for _ in 0..50 {
                    let index = select_move(&board, Mark::O, difficulty, &mut rng).unwrap();
                    assert!(board.is_empty(index), "{difficulty} picked {index}");
                }
            }
        }
    }

    #[test]
    fn test_full_board_returns_none() {
        let mut rng = StdRng::seed_from_u64(11);
        let board: Board = "XOX OXX OXO".parse().unwrap();
        for difficulty in Difficulty::iter() {
            assert_eq!(select_move(&board, Mark::X, difficulty, &mut rng), None);
        }
    }

    #[test]
    fn test_difficulty_parsing() {
        assert_eq!("medium".parse::<Difficulty>().unwrap(), Difficulty::Medium);
        assert_eq!("HARD".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert!("brutal".parse::<Difficulty>().is_err());
        assert_eq!(Difficulty::default(), Difficulty::Hard);
    }
}
