//! Computer-versus-computer play.

use crate::games::tictactoe::{Difficulty, Mark, Outcome, TurnOwner, select_move};
use crate::session::{GameMode, GameSession};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Win/tie counts from a run of games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    /// Games won by X.
    pub x_wins: u32,
    /// Games won by O.
    pub o_wins: u32,
    /// Tied games.
    pub ties: u32,
}

impl Tally {
    /// Adds one finished game.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome.winner() {
            Some(Mark::X) => self.x_wins += 1,
            Some(Mark::O) => self.o_wins += 1,
            None if outcome.is_tie() => self.ties += 1,
            None => {}
        }
    }

    /// Total games recorded.
    pub fn games(&self) -> u32 {
        self.x_wins + self.o_wins + self.ties
    }
}

/// Plays one game between two computer players until it ends.
///
/// `x` and `o` are the tiers for each mark; `starting` moves first. Both
/// sides submit through a two-player session, so the usual move checks
/// apply.
#[instrument(skip(rng))]
pub fn play_out<R: Rng + ?Sized>(
    x: Difficulty,
    o: Difficulty,
    starting: Mark,
    rng: &mut R,
) -> GameSession {
    let mut session =
        GameSession::new(GameMode::TwoPlayer, Difficulty::Hard, starting, TurnOwner::Human);

    while !session.is_over() {
        let mark = session.current_mark();
        let tier = match mark {
            Mark::X => x,
            Mark::O => o,
        };
        let Some(index) = select_move(session.board(), mark, tier, rng) else {
            break;
        };
        match session.try_move(index, TurnOwner::Human) {
            Ok(next) => session = next,
            Err(e) => {
                debug!(error = %e, index, "Selector produced an illegal move");
                break;
            }
        }
    }

    debug!(outcome = %session.outcome(), board = %session.board(), "Game finished");
    session
}

/// Plays `games` games, alternating which mark moves first.
#[instrument(skip(rng))]
pub fn tournament<R: Rng + ?Sized>(x: Difficulty, o: Difficulty, games: u32, rng: &mut R) -> Tally {
    let mut tally = Tally::default();
    for game in 0..games {
        let starting = if game % 2 == 0 { Mark::X } else { Mark::O };
        tally.record(play_out(x, o, starting, rng).outcome());
    }
    info!(?tally, "Tournament complete");
    tally
}
