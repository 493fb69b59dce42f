//! Interactive terminal game.
//!
//! Reads one command per line and feeds it to a [`Session`]. The loop is
//! generic over its reader and writer so tests can script a whole game.

use crate::config::PlayConfig;
use crate::render::TextSink;
use perfect_tictactoe::{Mark, Session};
use std::io::{BufRead, Write};
use tracing::{debug, instrument};

const HELP: &str = "\
Commands:
  o | x      computer plays that mark
  1-9        place a mark (cells are numbered row by row)
  board      show the board
  reset      start over
  help       show this text
  quit       leave";

/// One line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Computer plays this mark.
    Side(Mark),
    /// Activate a cell by its 1-based id.
    Cell(usize),
    /// Print the board.
    Board,
    /// Start over.
    Reset,
    /// Print the command list.
    Help,
    /// Leave the game.
    Quit,
}

impl Input {
    /// Parses a trimmed, case-insensitive command.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim().to_ascii_lowercase();
        match line.as_str() {
            "o" => Some(Input::Side(Mark::O)),
            "x" => Some(Input::Side(Mark::X)),
            "board" | "b" => Some(Input::Board),
            "reset" | "r" | "new" => Some(Input::Reset),
            "help" | "h" | "?" => Some(Input::Help),
            "quit" | "q" | "exit" => Some(Input::Quit),
            other => other.parse::<usize>().ok().map(Input::Cell),
        }
    }
}

/// Runs the game until `quit` or end of input.
#[instrument(skip_all)]
pub fn run<R: BufRead, W: Write>(config: &PlayConfig, input: R, mut out: W) -> std::io::Result<()> {
    let mut session = Session::new(config.engine());
    let mut sink = TextSink::new();

    writeln!(out, "Perfect-play tic-tac-toe. Type `help` for commands.")?;
    session.start(&mut sink);
    flush(&mut sink, &mut out)?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let Some(command) = Input::parse(&line) else {
            writeln!(out, "Unknown command {:?}. Type `help`.", line.trim())?;
            continue;
        };
        debug!(?command, "Command");

        match command {
            Input::Side(mark) => {
                // Errors are already rendered as warnings
                let _ = session.choose_side(mark, &mut sink);
            }
            Input::Cell(id) => {
                let _ = session.activate_cell(id, &mut sink);
            }
            Input::Board => writeln!(out, "{}", session.state().board().display())?,
            Input::Reset => session.reset(&mut sink),
            Input::Help => writeln!(out, "{}", HELP)?,
            Input::Quit => break,
        }
        flush(&mut sink, &mut out)?;

        if *config.show_hints() {
            write_hints(&session, &mut out)?;
        }
    }

    Ok(())
}

fn flush<W: Write>(sink: &mut TextSink, out: &mut W) -> std::io::Result<()> {
    for line in sink.drain() {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

fn write_hints<W: Write>(session: &Session, out: &mut W) -> std::io::Result<()> {
    let state = session.state();
    if state.engine_mark().is_none() || state.is_terminal() {
        return Ok(());
    }
    let mark = state.current_turn();
    if let Ok(scores) = session.engine().score_moves(state.board(), mark) {
        let hints: Vec<String> = scores
            .iter()
            .map(|m| format!("{}:{}", m.position.cell_id(), m.score))
            .collect();
        writeln!(out, "  hints for {}: {}", mark, hints.join(" "))?;
    }
    Ok(())
}
