//! Tic-tac-toe: board, rules and computer opponent.

pub mod ai;
mod action;
mod outcome;
mod position;
pub mod rules;
mod types;

pub use action::{Move, MoveError, TurnOwner};
pub use ai::{Difficulty, select_move};
pub use outcome::Outcome;
pub use position::Position;
pub use rules::{Line, LineKind, evaluate};
pub use types::{BOARD_SIZE, Board, Mark, ParseBoardError, Square};
