//! Command-line interface for strictly_noughts.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use strictly_noughts::{Board, Difficulty, GameMode, Mark};

/// Strictly Noughts - tic-tac-toe with a computer opponent
#[derive(Parser, Debug)]
#[command(name = "strictly_noughts")]
#[command(about = "Tic-tac-toe engine with tiered computer opponents", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// RNG seed (overrides the config file)
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game on the terminal
    Play {
        /// two-player or vs-computer
        #[arg(short, long, default_value = "vs-computer")]
        mode: GameMode,

        /// easy, medium or hard (defaults to the config file's choice)
        #[arg(short, long)]
        difficulty: Option<Difficulty>,
    },

    /// Print the square the computer would choose
    Suggest {
        /// Board in 9-character notation, e.g. "XX.O....."
        #[arg(short, long)]
        board: Board,

        /// Mark the computer plays
        #[arg(long)]
        mark: Mark,

        /// easy, medium or hard
        #[arg(short, long, default_value = "hard")]
        difficulty: Difficulty,
    },

    /// Print a board's outcome as JSON
    Evaluate {
        /// Board in 9-character notation
        #[arg(short, long)]
        board: Board,
    },

    /// Pit two computer tiers against each other and print the tally as JSON
    Simulate {
        /// Tier playing X
        #[arg(short, long, default_value = "hard")]
        x: Difficulty,

        /// Tier playing O
        #[arg(short, long, default_value = "hard")]
        o: Difficulty,

        /// Number of games
        #[arg(short, long, default_value = "100")]
        games: u32,
    },
}
