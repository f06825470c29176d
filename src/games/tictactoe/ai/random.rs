//! Uniform random play.

use crate::games::tictactoe::Board;
use rand::Rng;
use rand::seq::IndexedRandom;

/// Picks an empty square uniformly at random; `None` on a full board.
pub fn random_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<usize> {
    board.empty_cells().choose(rng).copied()
}
