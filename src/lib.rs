//! Strictly Noughts - tic-tac-toe engine with a computer opponent.
//!
//! The engine covers the board, win/tie detection, turn sequencing and
//! move selection. Rendering is left to the caller, which drives the engine
//! through a handful of functions or the event-driven [`GameController`].
//!
//! # Architecture
//!
//! - **Board**: 9 squares, pure placement
//! - **Rules**: [`evaluate`] a board to an [`Outcome`]
//! - **AI**: [`select_move`] with Easy, Medium and Hard tiers
//! - **Session**: [`start_game`] / [`submit_move`] over [`GameSession`] values
//! - **Controller**: one live game, delayed and cancellable computer turns
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use strictly_noughts::{Board, Difficulty, Mark, select_move};
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let board: Board = "XX. ... ...".parse().unwrap();
//! assert_eq!(select_move(&board, Mark::O, Difficulty::Hard, &mut rng), Some(2));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod controller;
mod games;
mod session;

pub mod arena;

// Crate-level exports - Configuration
pub use config::{ConfigError, EngineConfig};

// Crate-level exports - Controller
pub use controller::{ControllerState, GameController, GameEvent};

// Crate-level exports - Sessions
pub use session::{GameMode, GameSession, start_game, submit_move};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::ai::{self, MEDIUM_RANDOM_THRESHOLD};
pub use games::tictactoe::rules::{self, InvalidLine, LINES, winning_line};
pub use games::tictactoe::{
    BOARD_SIZE, Board, Difficulty, Line, LineKind, Mark, Move, MoveError, Outcome,
    ParseBoardError, Position, Square, TurnOwner, evaluate, select_move,
};
