//! Command-line interface for noughts.

use clap::{Parser, Subcommand};
use noughts_engine::Board;

/// Noughts - tic-tac-toe against a minimax opponent
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Play tic-tac-toe against the computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game in the terminal
    Play {
        /// Path to game config
        #[arg(short, long, default_value = "noughts.toml")]
        config: std::path::PathBuf,

        /// Override the computer's thinking delay
        #[arg(long)]
        delay_ms: Option<u64>,
    },

    /// Print the computer's move for a board, e.g. "XX.O....."
    BestMove {
        /// Nine squares: X, O, and '.' for empty
        board: Board,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print the minimax score of every candidate move
    Analyze {
        /// Nine squares: X, O, and '.' for empty
        board: Board,
    },

    /// Play every human line against the computer and tally the results
    Audit,
}
