//! Strictly Noughts - Unified CLI
//!
//! Drives the engine from a shell: play a game, ask for a move, evaluate a
//! board, or run computer-versus-computer matches.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde_json::json;
use strictly_noughts::{
    Board, ControllerState, Difficulty, EngineConfig, GameController, GameEvent, GameMode, Mark,
    Outcome, Position, arena, evaluate, select_move,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = EngineConfig::load_or_default(cli.config.as_deref())
        .context("Failed to load engine config")?;
    let config = match cli.seed {
        Some(seed) => config.with_seed(Some(seed)),
        None => config,
    };

    init_tracing(&config);

    match cli.command {
        Command::Play { mode, difficulty } => run_play(config, mode, difficulty).await,
        Command::Suggest {
            board,
            mark,
            difficulty,
        } => run_suggest(&config, board, mark, difficulty),
        Command::Evaluate { board } => run_evaluate(board),
        Command::Simulate { x, o, games } => run_simulate(&config, x, o, games),
    }
}

/// Logs go to stderr so stdout stays machine-readable.
fn init_tracing(config: &EngineConfig) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_level())),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn rng_for(config: &EngineConfig) -> StdRng {
    let seed = (*config.seed()).unwrap_or_else(rand::random::<u64>);
    debug!(seed, "Seeding RNG");
    StdRng::seed_from_u64(seed)
}

/// Play on the terminal until `quit` or end of input.
#[instrument(skip(config))]
async fn run_play(
    config: EngineConfig,
    mode: GameMode,
    difficulty: Option<Difficulty>,
) -> Result<()> {
    info!("Starting terminal game");

    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let mut controller = GameController::new(&config, event_tx);
    controller.start_game(mode, difficulty);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    render(&controller, &mut event_rx);

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("Failed to read stdin")? else {
                    debug!("End of input");
                    break;
                };
                match line.trim().to_lowercase().as_str() {
                    "quit" | "q" => break,
                    "new" | "n" => controller.start_game(mode, difficulty),
                    "back" | "b" => controller.reset(),
                    input => handle_move(&mut controller, input),
                }
            }
            Some(played) = controller.tick() => {
                debug!(%played, "Computer moved");
            }
        }
        render(&controller, &mut event_rx);
    }

    info!("Leaving terminal game");
    Ok(())
}

fn handle_move(controller: &mut GameController, input: &str) {
    if controller.state() == ControllerState::AwaitingStart {
        println!("No game running. Type `new` to start one or `quit` to leave.");
        return;
    }
    match Position::from_label_or_number(input) {
        Some(pos) => {
            if !controller.submit_move(pos.to_index()) {
                println!("{} isn't available right now.", pos);
            }
        }
        None => println!("Enter a square 0-8 or a name like `top left`; `new`, `back` or `quit`."),
    }
}

fn render(controller: &GameController, events: &mut mpsc::UnboundedReceiver<GameEvent>) {
    let mut changed = false;
    while let Ok(event) = events.try_recv() {
        changed = true;
        match event {
            GameEvent::Started {
                mode,
                difficulty,
                first_turn,
                ..
            } => match mode {
                GameMode::TwoPlayer => println!("\n{} mode", mode),
                GameMode::VsComputer => {
                    println!("\n{} mode ({}), {} moves first", mode, difficulty, first_turn)
                }
            },
            GameEvent::ComputerThinking => println!("Computer is thinking..."),
            GameEvent::MoveMade { mark, index, by } => println!("{} ({}) took {}", mark, by, index),
            GameEvent::GameOver(Outcome::Win { line, .. }) => {
                println!("Winning line: {}", line.label())
            }
            GameEvent::GameOver(_) => {}
            GameEvent::Reset => println!("Back at the start. Type `new` to play again."),
        }
    }
    if !changed {
        return;
    }
    if let Some(session) = controller.session() {
        println!("{}\n{}", session.board().display(), session.status_line());
    }
}

#[instrument(skip(config))]
fn run_suggest(
    config: &EngineConfig,
    board: Board,
    mark: Mark,
    difficulty: Difficulty,
) -> Result<()> {
    let mut rng = rng_for(config);
    match select_move(&board, mark, difficulty, &mut rng) {
        Some(index) => println!("{}", index),
        None => println!("none"),
    }
    Ok(())
}

#[instrument]
fn run_evaluate(board: Board) -> Result<()> {
    let outcome = evaluate(&board);
    let report = json!({
        "board": board.to_string(),
        "outcome": outcome,
        "line_label": match outcome {
            Outcome::Win { line, .. } => Some(line.label()),
            _ => None,
        },
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

#[instrument(skip(config))]
fn run_simulate(config: &EngineConfig, x: Difficulty, o: Difficulty, games: u32) -> Result<()> {
    let mut rng = rng_for(config);
    let tally = arena::tournament(x, o, games, &mut rng);
    println!("{}", serde_json::to_string_pretty(&tally)?);
    Ok(())
}
