//! Tests for the board, the outcome evaluator and game sessions.

use rand::SeedableRng;
use rand::rngs::StdRng;
use strictly_noughts::{
    Board, Difficulty, GameMode, GameSession, LINES, Mark, Outcome, TurnOwner, evaluate,
    start_game, submit_move,
};

#[test]
fn test_completing_top_row_wins() {
    let board: Board = "XX. ... ...".parse().unwrap();
    let board = board.place(2, Mark::X).unwrap();
    let outcome = evaluate(&board);
    assert_eq!(
        outcome,
        Outcome::Win {
            line: LINES[0],
            mark: Mark::X
        }
    );
    if let Outcome::Win { line, .. } = outcome {
        assert_eq!(line.indices(), [0, 1, 2]);
    }
}

#[test]
fn test_full_board_without_line_is_tie() {
    let board: Board = "OXO OXX XOX".parse().unwrap();
    assert_eq!(evaluate(&board), Outcome::Tie);
}

#[test]
fn test_evaluate_is_deterministic() {
    for notation in ["XX. ... ...", "OXO OXX XOX", "XO. .X. O.X", "........."] {
        let board: Board = notation.parse().unwrap();
        assert_eq!(evaluate(&board), evaluate(&board));
    }
}

#[test]
fn test_session_win_through_submit_move() {
    let mut session =
        GameSession::new(GameMode::TwoPlayer, Difficulty::Easy, Mark::O, TurnOwner::Human);
    for index in [0, 4, 1, 8, 2] {
        session = submit_move(session, index);
    }
    assert_eq!(session.outcome().winner(), Some(Mark::O));
    assert_eq!(session.status_line(), "Player O Wins!");
}

#[test]
fn test_terminal_state_is_idempotent() {
    let mut session =
        GameSession::new(GameMode::TwoPlayer, Difficulty::Easy, Mark::X, TurnOwner::Human);
    // X O X / X O O / O X X
    for index in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
        session = submit_move(session, index);
    }
    assert_eq!(session.outcome(), Outcome::Tie);
    assert_eq!(session.status_line(), "It's a Tie!");

    let frozen = session.clone();
    for index in 0..12 {
        session = submit_move(session, index);
        assert_eq!(session.board(), frozen.board());
        assert_eq!(session.outcome(), frozen.outcome());
    }
}

#[test]
fn test_new_game_resets_after_terminal() {
    let mut rng = StdRng::seed_from_u64(17);
    let mut session = start_game(GameMode::TwoPlayer, None, &mut rng);
    for index in [0, 3, 1, 4, 2] {
        session = submit_move(session, index);
    }
    assert!(session.is_over());

    let session = start_game(GameMode::TwoPlayer, None, &mut rng);
    assert_eq!(*session.board(), Board::new());
    assert_eq!(session.outcome(), Outcome::InProgress);
    assert!(session.history().is_empty());
}

#[test]
fn test_history_records_moves() {
    let session =
        GameSession::new(GameMode::TwoPlayer, Difficulty::Easy, Mark::X, TurnOwner::Human);
    let session = submit_move(submit_move(session, 4), 0);
    let history = session.history();
    assert_eq!(history.len(), 2);
    assert_eq!((history[0].mark, history[0].index), (Mark::X, 4));
    assert_eq!((history[1].mark, history[1].index), (Mark::O, 0));
}
