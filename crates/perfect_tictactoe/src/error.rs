//! Error types for game operations.
//!
//! Every error here is recoverable: the operation that returned it left
//! the game state exactly as it was.

use crate::position::Position;
use crate::types::Mark;

/// Error that can occur when applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// No side has been chosen for the engine yet.
    #[display("Choose to play as X or O first")]
    SideNotChosen,

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// The target cell already holds a mark.
    #[display("{} is already occupied", _0)]
    CellOccupied(Position),

    /// `(row, col)` lies outside the 3x3 board.
    #[display("Cell ({}, {}) is off the board", row, col)]
    InvalidCell {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// A cell id outside 1-9.
    #[display("Cell id {} is not between 1 and 9", _0)]
    InvalidCellId(usize),
}

impl std::error::Error for MoveError {}

/// Error that can occur when choosing the engine's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SideError {
    /// A side was already chosen for this game.
    #[display("The computer already plays {}", _0)]
    AlreadyChosen(Mark),

    /// Marks are already on the board.
    #[display("Cannot change sides once the game has started")]
    GameStarted,
}

impl std::error::Error for SideError {}

/// Error raised when the search is asked to move on a finished board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SearchError {
    /// The board is already won or full.
    #[display("Cannot search a finished board: {}", reason)]
    InvalidInvocation {
        /// Why the board has no move to search.
        reason: &'static str,
    },
}

impl std::error::Error for SearchError {}

/// Any error a game session can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::From)]
pub enum GameError {
    /// A rejected move.
    #[display("{}", _0)]
    Move(MoveError),

    /// A rejected side selection.
    #[display("{}", _0)]
    Side(SideError),

    /// A failed engine search.
    #[display("{}", _0)]
    Search(SearchError),
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Move(e) => Some(e),
            GameError::Side(e) => Some(e),
            GameError::Search(e) => Some(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_problem() {
        assert_eq!(
            MoveError::CellOccupied(Position::Center).to_string(),
            "Center is already occupied"
        );
        assert_eq!(
            MoveError::InvalidCell { row: 3, col: 1 }.to_string(),
            "Cell (3, 1) is off the board"
        );
        assert_eq!(
            SideError::AlreadyChosen(Mark::X).to_string(),
            "The computer already plays X"
        );
    }

    #[test]
    fn test_game_error_wraps_sources() {
        let err: GameError = MoveError::GameOver.into();
        assert_eq!(err, GameError::Move(MoveError::GameOver));
        assert_eq!(err.to_string(), "Game is already over");
        assert!(std::error::Error::source(&err).is_some());
    }
}
