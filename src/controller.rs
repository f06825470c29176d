//! Event-driven game controller.
//!
//! The controller owns the live [`GameSession`] and is its only writer.
//! Human moves apply immediately. A computer turn is scheduled as a timer
//! task that posts back after the configured delay; [`GameController::tick`]
//! picks that up and plays the move. Starting a new game or resetting aborts
//! the timer, and every schedule carries a ticket so a fire that slipped
//! through is dropped instead of landing on a newer board.

use crate::config::EngineConfig;
use crate::games::tictactoe::{Difficulty, Mark, Move, Outcome, TurnOwner};
use crate::session::{self, GameMode, GameSession};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument, warn};

/// Where the controller is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ControllerState {
    /// No game yet, or the last one was abandoned.
    AwaitingStart,
    /// A game is accepting moves.
    InProgress,
    /// The game has a winner or is tied.
    Terminal,
}

/// Notifications for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A new game began.
    Started {
        /// Game mode.
        mode: GameMode,
        /// Difficulty in effect.
        difficulty: Difficulty,
        /// Mark that moves first.
        starting_mark: Mark,
        /// Side that moves first.
        first_turn: TurnOwner,
    },
    /// The computer's delay started.
    ComputerThinking,
    /// A move was accepted.
    MoveMade {
        /// Mark placed.
        mark: Mark,
        /// Board index.
        index: usize,
        /// Who played it.
        by: TurnOwner,
    },
    /// The game ended.
    GameOver(Outcome),
    /// The controller went back to [`ControllerState::AwaitingStart`].
    Reset,
}

#[derive(Debug)]
struct PendingComputerMove {
    ticket: u64,
    handle: JoinHandle<()>,
}

/// Drives one game at a time.
///
/// Methods that may schedule a computer turn spawn a Tokio task and must be
/// called from within a Tokio runtime.
#[derive(Debug)]
pub struct GameController {
    session: Option<GameSession>,
    rng: StdRng,
    delay: Duration,
    default_difficulty: Difficulty,
    next_ticket: u64,
    pending: Option<PendingComputerMove>,
    timer_tx: mpsc::UnboundedSender<u64>,
    timer_rx: mpsc::UnboundedReceiver<u64>,
    events: mpsc::UnboundedSender<GameEvent>,
}

impl GameController {
    /// Creates a controller in [`ControllerState::AwaitingStart`].
    ///
    /// Uses the configured seed when present, otherwise a random one.
    #[instrument(skip(config, events))]
    pub fn new(config: &EngineConfig, events: mpsc::UnboundedSender<GameEvent>) -> Self {
        let seed = (*config.seed()).unwrap_or_else(rand::random::<u64>);
        debug!(seed, "Seeding controller RNG");
        Self::with_rng(config, StdRng::seed_from_u64(seed), events)
    }

    /// Creates a controller with an explicit RNG.
    pub fn with_rng(
        config: &EngineConfig,
        rng: StdRng,
        events: mpsc::UnboundedSender<GameEvent>,
    ) -> Self {
        let (timer_tx, timer_rx) = mpsc::unbounded_channel();
        Self {
            session: None,
            rng,
            delay: config.computer_delay(),
            default_difficulty: *config.default_difficulty(),
            next_ticket: 0,
            pending: None,
            timer_tx,
            timer_rx,
            events,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> ControllerState {
        match &self.session {
            None => ControllerState::AwaitingStart,
            Some(s) if s.is_over() => ControllerState::Terminal,
            Some(_) => ControllerState::InProgress,
        }
    }

    /// The live session, if a game has started.
    pub fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    /// Returns true while a computer move is scheduled.
    pub fn computer_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Starts a fresh game with a random starting mark and first turn.
    ///
    /// Any pending computer move from the previous game is discarded.
    #[instrument(skip(self))]
    pub fn start_game(&mut self, mode: GameMode, difficulty: Option<Difficulty>) {
        let difficulty = difficulty.unwrap_or(self.default_difficulty);
        let session = session::start_game(mode, Some(difficulty), &mut self.rng);
        self.begin(session);
    }

    /// Replaces the live game with `session`.
    #[instrument(skip(self, session))]
    pub fn begin(&mut self, session: GameSession) {
        self.cancel_pending();
        info!(
            mode = %session.mode(),
            difficulty = %session.difficulty(),
            "Starting game"
        );
        self.emit(GameEvent::Started {
            mode: session.mode(),
            difficulty: session.difficulty(),
            starting_mark: session.current_mark(),
            first_turn: session.turn_owner(),
        });
        let awaiting_computer = session.awaiting_computer();
        self.session = Some(session);
        if awaiting_computer {
            self.schedule_computer_turn();
        }
    }

    /// Abandons the current game.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.cancel_pending();
        if self.session.take().is_some() {
            info!("Game abandoned");
        }
        self.emit(GameEvent::Reset);
    }

    /// Submits a human move. Returns whether it was accepted.
    ///
    /// Refused moves leave everything unchanged and emit nothing.
    #[instrument(skip(self))]
    pub fn submit_move(&mut self, index: usize) -> bool {
        let Some(current) = &self.session else {
            debug!("No game in progress");
            return false;
        };
        match current.try_move(index, TurnOwner::Human) {
            Ok(next) => {
                self.advance(next);
                true
            }
            Err(e) => {
                debug!(error = %e, "Move rejected");
                false
            }
        }
    }

    /// Waits for the scheduled computer move and plays it.
    ///
    /// Stale timer fires are skipped. With nothing scheduled this waits
    /// until something is, so call it from a `select!` alongside input.
    /// Cancel safe.
    pub async fn tick(&mut self) -> Option<Move> {
        loop {
            let ticket = self.timer_rx.recv().await?;
            if self.pending.as_ref().is_some_and(|p| p.ticket == ticket) {
                self.pending = None;
                return self.play_computer_turn();
            }
            debug!(ticket, "Discarding stale computer move");
        }
    }

    fn play_computer_turn(&mut self) -> Option<Move> {
        let next = self.session.as_ref()?.computer_move(&mut self.rng);
        match next {
            Some(next) => {
                let played = next.history().last().copied();
                self.advance(next);
                played
            }
            None => {
                warn!("Computer turn fired without a legal move");
                None
            }
        }
    }

    fn advance(&mut self, next: GameSession) {
        if let Some(played) = next.history().last() {
            self.emit(GameEvent::MoveMade {
                mark: played.mark,
                index: played.index,
                by: played.by,
            });
        }
        if next.is_over() {
            self.emit(GameEvent::GameOver(next.outcome()));
        }
        let awaiting_computer = next.awaiting_computer();
        self.session = Some(next);
        if awaiting_computer {
            self.schedule_computer_turn();
        }
    }

    fn schedule_computer_turn(&mut self) {
        self.cancel_pending();
        self.next_ticket += 1;
        let ticket = self.next_ticket;
        let tx = self.timer_tx.clone();
        let delay = self.delay;
        debug!(ticket, delay_ms = delay.as_millis() as u64, "Scheduling computer move");

        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if tx.send(ticket).is_err() {
                debug!(ticket, "Controller gone before computer move fired");
            }
        });
        self.pending = Some(PendingComputerMove { ticket, handle });
        self.emit(GameEvent::ComputerThinking);
    }

    fn cancel_pending(&mut self) {
        if let Some(pending) = self.pending.take() {
            debug!(ticket = pending.ticket, "Cancelling pending computer move");
            pending.handle.abort();
        }
    }

    fn emit(&self, event: GameEvent) {
        if self.events.send(event).is_err() {
            debug!("Event receiver dropped");
        }
    }
}

impl Drop for GameController {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}
