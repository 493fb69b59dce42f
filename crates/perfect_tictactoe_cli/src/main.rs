//! perfect_tictactoe - terminal front end.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use perfect_tictactoe::{Board, GameState, Mark};
use perfect_tictactoe_cli::{Cli, Command, PlayConfig, analyze, run};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = PlayConfig::load(cli.config.as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Play => {
            info!("Starting interactive game");
            let stdin = std::io::stdin();
            run(&config, stdin.lock(), std::io::stdout())?;
            Ok(())
        }
        Command::BestMove {
            board,
            mark,
            json,
            no_book,
        } => best_move(config, &board, mark.as_deref(), json, no_book),
        Command::SelfPlay { no_book } => self_play(config, no_book),
    }
}

/// Print the engine's choice for one position.
fn best_move(config: PlayConfig, board: &str, mark: Option<&str>, json: bool, no_book: bool) -> Result<()> {
    let board: Board = board.parse().context("Invalid --board")?;
    let mark = match mark {
        Some(mark) => mark.parse::<Mark>().context("Invalid --mark")?,
        None => board.side_to_move(),
    };
    let config = if no_book { config.with_opening_book(false) } else { config };

    let analysis = analyze(&config.engine(), &board, mark)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        println!("{}", board.display());
        print!("{}", analysis.to_text());
    }
    Ok(())
}

/// Play the engine against itself from the empty board.
fn self_play(config: PlayConfig, no_book: bool) -> Result<()> {
    let config = if no_book { config.with_opening_book(false) } else { config };
    let mut state = GameState::new();
    state.choose_side(Mark::X)?;

    let moves = config.engine().play_out(&mut state)?;
    for (ply, mov) in moves.iter().enumerate() {
        println!("{:>2}. {}", ply + 1, mov);
    }
    println!("{}", state.board().display());
    println!("Result: {}", state.outcome());
    Ok(())
}
