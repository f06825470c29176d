//! Game sessions: turn order, mark alternation and terminal tracking.
//!
//! A [`GameSession`] is a value. Every accepted move produces a new session;
//! refused moves hand the old one back unchanged.

use crate::games::tictactoe::{
    Board, Difficulty, Mark, Move, MoveError, Outcome, TurnOwner, evaluate, select_move,
};
use derive_more::Display;
use rand::Rng;
use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString};
use tracing::{debug, info, instrument};

/// Who plays the game.
///
/// Parses from the kebab-case names (`two-player`, `vs-computer`) and from
/// its display text.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum GameMode {
    /// Two people share the board.
    #[display("2 Players")]
    #[strum(serialize = "two-player", serialize = "2 Players")]
    TwoPlayer,
    /// A person plays the computer.
    #[display("Vs AI")]
    #[strum(serialize = "vs-computer", serialize = "Vs AI")]
    VsComputer,
}

/// One game from first move to terminal outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    mode: GameMode,
    difficulty: Difficulty,
    board: Board,
    current_mark: Mark,
    turn_owner: TurnOwner,
    outcome: Outcome,
    history: Vec<Move>,
}

impl GameSession {
    /// Creates a session with a known starting mark and turn owner.
    ///
    /// Two-player games ignore `first_turn`: every move there is a human move.
    #[instrument]
    pub fn new(
        mode: GameMode,
        difficulty: Difficulty,
        starting_mark: Mark,
        first_turn: TurnOwner,
    ) -> Self {
        let turn_owner = match mode {
            GameMode::TwoPlayer => TurnOwner::Human,
            GameMode::VsComputer => first_turn,
        };
        info!(%mode, %difficulty, %starting_mark, %turn_owner, "Creating new game session");
        Self {
            mode,
            difficulty,
            board: Board::new(),
            current_mark: starting_mark,
            turn_owner,
            outcome: Outcome::InProgress,
            history: Vec::new(),
        }
    }

    /// Game mode in effect.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Difficulty in effect (only consulted against the computer).
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mark that moves next. After the game ends, the mark that moved last.
    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    /// Side that owns the next move.
    pub fn turn_owner(&self) -> TurnOwner {
        self.turn_owner
    }

    /// Current outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Accepted moves, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns true once the outcome is terminal.
    pub fn is_over(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// Returns true when the computer owns a live turn.
    pub fn awaiting_computer(&self) -> bool {
        self.mode == GameMode::VsComputer
            && self.turn_owner == TurnOwner::Computer
            && !self.is_over()
    }

    /// Status text for the presentation layer.
    pub fn status_line(&self) -> String {
        match self.outcome {
            Outcome::InProgress => format!("Current Player: {}", self.current_mark),
            terminal => terminal.to_string(),
        }
    }

    /// Applies a move submitted by `by`, returning the next session.
    ///
    /// # Errors
    ///
    /// [`MoveError::GameOver`] on a terminal session,
    /// [`MoveError::NotYourTurn`] when `by` does not own the turn, and the
    /// board errors from [`Board::place`].
    #[instrument(skip(self), fields(mark = %self.current_mark))]
    pub fn try_move(&self, index: usize, by: TurnOwner) -> Result<Self, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        if by != self.turn_owner {
            return Err(MoveError::NotYourTurn(by));
        }

        let board = self.board.place(index, self.current_mark)?;
        let outcome = evaluate(&board);

        let mut next = self.clone();
        next.board = board;
        next.outcome = outcome;
        next.history.push(Move::new(self.current_mark, index, by));

        if outcome.is_terminal() {
            info!(%outcome, "Game over");
        } else {
            next.current_mark = self.current_mark.opponent();
            if self.mode == GameMode::VsComputer {
                next.turn_owner = self.turn_owner.other();
            }
        }

        debug!(board = %next.board, "Move applied");
        Ok(next)
    }

    /// Lets the computer take its turn with the session's difficulty.
    ///
    /// Returns `None` unless [`GameSession::awaiting_computer`] holds.
    #[instrument(skip(self, rng), fields(difficulty = %self.difficulty))]
    pub fn computer_move<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Self> {
        if !self.awaiting_computer() {
            debug!("Computer does not own the turn");
            return None;
        }
        let index = select_move(&self.board, self.current_mark, self.difficulty, rng)?;
        self.try_move(index, TurnOwner::Computer).ok()
    }
}

/// Starts a fresh game.
///
/// The starting mark is random, and against the computer so is the side
/// that moves first. A missing difficulty means [`Difficulty::default`].
#[instrument(skip(rng))]
pub fn start_game<R: Rng + ?Sized>(
    mode: GameMode,
    difficulty: Option<Difficulty>,
    rng: &mut R,
) -> GameSession {
    let starting_mark = if rng.random::<bool>() { Mark::X } else { Mark::O };
    let first_turn = if rng.random::<bool>() {
        TurnOwner::Computer
    } else {
        TurnOwner::Human
    };
    GameSession::new(mode, difficulty.unwrap_or_default(), starting_mark, first_turn)
}

/// Submits a human move.
///
/// Illegal moves (terminal game, occupied or out-of-range square, or the
/// computer's turn) return the session unchanged.
#[instrument(skip(session))]
pub fn submit_move(session: GameSession, index: usize) -> GameSession {
    match session.try_move(index, TurnOwner::Human) {
        Ok(next) => next,
        Err(e) => {
            debug!(error = %e, "Move rejected");
            session
        }
    }
}
