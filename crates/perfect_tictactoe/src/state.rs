//! Game state and the move-application path.
//!
//! `GameState` owns the board, the turn, the engine's side and the
//! outcome. Every mutation goes through [`GameState::choose_side`],
//! [`GameState::apply_move`] or [`GameState::reset`], and a failing call
//! leaves the state untouched.

use crate::action::{Move, Placement};
use crate::error::{MoveError, SideError};
use crate::invariants::{GameInvariants, InvariantSet};
use crate::outcome::Outcome;
use crate::position::Position;
use crate::rules;
use crate::types::{Board, Cell, Mark};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Complete state of one game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) board: Board,
    current_turn: Mark,
    engine_mark: Option<Mark>,
    opening_move_consumed: bool,
    outcome: Outcome,
    history: Vec<Move>,
}

impl GameState {
    /// Creates a game with an empty board, O to move and no side chosen.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_turn: Mark::O,
            engine_mark: None,
            opening_move_consumed: false,
            outcome: Outcome::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark that moves next.
    pub fn current_turn(&self) -> Mark {
        self.current_turn
    }

    /// Returns the mark the engine plays, once chosen.
    pub fn engine_mark(&self) -> Option<Mark> {
        self.engine_mark
    }

    /// Returns the mark the human plays, once chosen.
    pub fn human_mark(&self) -> Option<Mark> {
        self.engine_mark.map(Mark::opponent)
    }

    /// Returns the outcome recorded by the last terminal check.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns true once the game has been won or drawn.
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// Returns the winner, if any.
    pub fn winner(&self) -> Option<Mark> {
        self.outcome.winner()
    }

    /// Moves applied since the last reset.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Whether the engine's opening O move has been placed.
    pub fn opening_move_consumed(&self) -> bool {
        self.opening_move_consumed
    }

    /// True while the human must place the engine's opening O.
    ///
    /// When the engine plays O the human places O's first mark by hand,
    /// and the engine is not invoked after it.
    pub fn awaits_opening_move(&self) -> bool {
        self.engine_mark == Some(Mark::O)
            && !self.opening_move_consumed
            && self.current_turn == Mark::O
    }

    /// True when the engine should be asked for the next move.
    pub fn engine_to_move(&self) -> bool {
        !self.is_terminal()
            && self.engine_mark == Some(self.current_turn)
            && !self.awaits_opening_move()
    }

    /// Sets the engine's mark.
    ///
    /// # Errors
    ///
    /// - `SideError::AlreadyChosen` if a side was already chosen.
    /// - `SideError::GameStarted` if marks are on the board.
    #[instrument(skip(self))]
    pub fn choose_side(&mut self, mark: Mark) -> Result<(), SideError> {
        if let Some(chosen) = self.engine_mark {
            return Err(SideError::AlreadyChosen(chosen));
        }
        if self.board.occupied() > 0 {
            return Err(SideError::GameStarted);
        }

        self.engine_mark = Some(mark);
        self.opening_move_consumed = false;
        info!(engine = %mark, "Side chosen");
        Ok(())
    }

    /// Places the current turn's mark at `(row, col)`.
    ///
    /// # Errors
    ///
    /// `MoveError::InvalidCell` if either coordinate is outside 0-2, plus
    /// everything [`GameState::apply_move`] can return.
    pub fn apply_move_at(&mut self, row: usize, col: usize) -> Result<Placement, MoveError> {
        let pos = Position::from_row_col(row, col).ok_or(MoveError::InvalidCell { row, col })?;
        self.apply_move(pos)
    }

    /// Places the current turn's mark at `pos`.
    ///
    /// On success the terminal condition is re-evaluated and, if the game
    /// continues, the turn passes to the other mark.
    ///
    /// # Errors
    ///
    /// - `MoveError::SideNotChosen` before [`GameState::choose_side`].
    /// - `MoveError::GameOver` after a win or draw.
    /// - `MoveError::CellOccupied` if the cell holds a mark.
    #[instrument(skip(self), fields(position = ?pos, mark = %self.current_turn))]
    pub fn apply_move(&mut self, pos: Position) -> Result<Placement, MoveError> {
        if self.engine_mark.is_none() {
            return Err(MoveError::SideNotChosen);
        }
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }
        if !self.board.is_empty(pos) {
            return Err(MoveError::CellOccupied(pos));
        }

        let mark = self.current_turn;
        if self.awaits_opening_move() {
            debug!("Opening O move placed for the engine");
            self.opening_move_consumed = true;
        }
        self.board.set(pos, Cell::Occupied(mark));
        self.history.push(Move::new(mark, pos));

        let outcome = self.evaluate_terminal();
        if !outcome.is_terminal() {
            self.current_turn = mark.opponent();
        }

        debug_assert!(
            GameInvariants::check_all(self).is_ok(),
            "Game invariants violated: {:?}",
            GameInvariants::check_all(self)
        );

        Ok(Placement {
            applied: Move::new(mark, pos),
            board: self.board,
            outcome,
        })
    }

    /// Checks the eight lines and the fill level, recording the result.
    ///
    /// A finished game stays finished; only [`GameState::reset`] clears it.
    pub fn evaluate_terminal(&mut self) -> Outcome {
        if self.is_terminal() {
            return self.outcome;
        }

        let outcome = rules::evaluate(&self.board);
        if outcome.is_terminal() {
            info!(%outcome, "Game over");
            self.outcome = outcome;
        }
        self.outcome
    }

    /// Restores the initial state.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
