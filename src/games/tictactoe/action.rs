//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. They record who placed
//! which mark where, and can be validated independently of execution.

use super::Mark;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString};

/// Which side is authorized to submit the next move.
///
/// Only meaningful against the computer; in two-player games every move is
/// a human move.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum TurnOwner {
    /// A person at the presentation layer.
    Human,
    /// The move selector.
    Computer,
}

impl TurnOwner {
    /// Returns the other side.
    pub fn other(self) -> Self {
        match self {
            TurnOwner::Human => TurnOwner::Computer,
            TurnOwner::Computer => TurnOwner::Human,
        }
    }
}

/// An accepted move: `mark` placed at `index` by `by`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[display("{} -> {} ({})", mark, index, by)]
pub struct Move {
    /// The mark placed.
    pub mark: Mark,
    /// Board index (0-8).
    pub index: usize,
    /// Who submitted it.
    pub by: TurnOwner,
}

impl Move {
    /// Creates a new move.
    pub fn new(mark: Mark, index: usize, by: TurnOwner) -> Self {
        Self { mark, index, by }
    }
}

/// Reasons a move is refused.
///
/// The session surface recovers all of these as no-ops; they are exposed
/// for callers that want to know why.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum MoveError {
    /// Index outside 0-8.
    #[display("Position {} is out of bounds (must be 0-8)", _0)]
    OutOfRange(usize),

    /// The square already holds a mark.
    #[display("Square {} is already occupied", _0)]
    Occupied(usize),

    /// The game has already ended.
    #[display("Game is already over")]
    GameOver,

    /// The submitting side does not own the turn.
    #[display("It's not the {}'s turn", _0)]
    NotYourTurn(TurnOwner),
}

impl std::error::Error for MoveError {}
