//! Command-line interface for perfect_tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Perfect-play tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "perfect_tictactoe")]
#[command(about = "Play tic-tac-toe against an opponent that never loses", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game
    Play,

    /// Print the engine's move for a position
    BestMove {
        /// Nine row-major cells: O, X, or . for empty (`/` and spaces ignored)
        #[arg(short, long)]
        board: String,

        /// Mark to move (defaults to whoever is on turn)
        #[arg(short, long)]
        mark: Option<String>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,

        /// Search every position instead of using the opening book
        #[arg(long)]
        no_book: bool,
    },

    /// Let the engine play both sides
    SelfPlay {
        /// Search every position instead of using the opening book
        #[arg(long)]
        no_book: bool,
    },
}
