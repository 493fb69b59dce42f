//! Perfect-play move search.
//!
//! The engine runs plain minimax over the whole remaining game tree.
//! Tic-tac-toe has at most nine plies, so no pruning or depth limit is
//! needed. Scores favour quick wins and slow losses:
//!
//! - win for the engine: `100 - depth`
//! - loss for the engine: `depth - 100`
//! - draw: `0`
//!
//! `depth` counts plies below the candidate move, so a move that wins on
//! the spot scores 100.
//!
//! Children are visited in [`Position::PREFERENCE`] order (center,
//! corners, edges), and among the top-level moves that share the best
//! score the earliest in that order wins.

mod opening;

pub use opening::book_move;

use crate::action::Move;
use crate::error::{GameError, MoveError, SearchError};
use crate::outcome::Outcome;
use crate::position::Position;
use crate::rules;
use crate::state::GameState;
use crate::types::{Board, Mark};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Score of an immediate win.
pub const WIN_SCORE: i32 = 100;

/// A legal move paired with its minimax score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredMove {
    /// Where the mark would go.
    pub position: Position,
    /// Minimax score from the moving side's point of view.
    pub score: i32,
}

/// Perfect-play opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Engine {
    opening_book: bool,
}

impl Engine {
    /// Creates an engine with the opening book enabled.
    pub fn new() -> Self {
        Self { opening_book: true }
    }

    /// Enables or disables the opening book.
    pub fn with_opening_book(mut self, enabled: bool) -> Self {
        self.opening_book = enabled;
        self
    }

    /// Whether the opening book is consulted before searching.
    pub fn opening_book(&self) -> bool {
        self.opening_book
    }

    /// Returns the optimal cell for `mark` to play on `board`.
    ///
    /// # Errors
    ///
    /// `SearchError::InvalidInvocation` if the board is already won or full.
    #[instrument(skip(self, board), fields(board = %board))]
    pub fn best_move(&self, board: &Board, mark: Mark) -> Result<Position, SearchError> {
        ensure_searchable(board)?;

        if self.opening_book {
            if let Some(pos) = book_move(board, mark) {
                debug!(position = ?pos, "Book move");
                return Ok(pos);
            }
        }

        let scored = self.score_moves(board, mark)?;
        let best = scored
            .iter()
            .map(|m| m.score)
            .max()
            .ok_or(SearchError::InvalidInvocation {
                reason: "no empty cells",
            })?;
        // First in preference order among the best
        let choice = scored
            .iter()
            .find(|m| m.score == best)
            .map(|m| m.position)
            .ok_or(SearchError::InvalidInvocation {
                reason: "no empty cells",
            })?;

        debug!(position = ?choice, score = best, "Search move");
        Ok(choice)
    }

    /// Scores every legal move for `mark`, in preference order.
    ///
    /// # Errors
    ///
    /// `SearchError::InvalidInvocation` if the board is already won or full.
    pub fn score_moves(&self, board: &Board, mark: Mark) -> Result<Vec<ScoredMove>, SearchError> {
        ensure_searchable(board)?;

        Ok(Position::PREFERENCE
            .iter()
            .copied()
            .filter(|pos| board.is_empty(*pos))
            .map(|pos| ScoredMove {
                position: pos,
                score: minimax(&board.with(pos, mark), 0, false, mark),
            })
            .collect())
    }

    /// Plays the engine against itself until the game ends.
    ///
    /// Both sides move through [`GameState::apply_move`], so the opening
    /// rule does not apply here: the engine picks every move.
    ///
    /// # Errors
    ///
    /// `MoveError::SideNotChosen` if `state` has no side chosen yet.
    #[instrument(skip(self, state))]
    pub fn play_out(&self, state: &mut GameState) -> Result<Vec<Move>, GameError> {
        if state.engine_mark().is_none() {
            return Err(MoveError::SideNotChosen.into());
        }

        let mut moves = Vec::new();
        while !state.is_terminal() {
            let pos = self.best_move(state.board(), state.current_turn())?;
            moves.push(state.apply_move(pos)?.applied);
        }

        debug!(plies = moves.len(), outcome = %state.outcome(), "Play-out finished");
        Ok(moves)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

/// Rejects boards that have no move left to search.
fn ensure_searchable(board: &Board) -> Result<(), SearchError> {
    match rules::evaluate(board) {
        Outcome::InProgress => Ok(()),
        Outcome::Won(_) => Err(SearchError::InvalidInvocation {
            reason: "the board already has a winner",
        }),
        Outcome::Draw => Err(SearchError::InvalidInvocation {
            reason: "the board is full",
        }),
    }
}

/// Minimax value of `board` for `engine`.
///
/// `maximizing` is true when `engine` is the side about to move.
fn minimax(board: &Board, depth: i32, maximizing: bool, engine: Mark) -> i32 {
    match rules::evaluate(board) {
        Outcome::Won(winner) if winner == engine => return WIN_SCORE - depth,
        Outcome::Won(_) => return depth - WIN_SCORE,
        Outcome::Draw => return 0,
        Outcome::InProgress => {}
    }

    let mover = if maximizing { engine } else { engine.opponent() };
    let scores = Position::PREFERENCE
        .iter()
        .copied()
        .filter(|pos| board.is_empty(*pos))
        .map(|pos| minimax(&board.with(pos, mover), depth + 1, !maximizing, engine));

    let best = if maximizing { scores.max() } else { scores.min() };
    // An in-progress board always has an empty cell
    best.unwrap_or(0)
}
