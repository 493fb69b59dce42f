//! Perfect-play tic-tac-toe.
//!
//! A human picks which mark the computer plays and the computer answers
//! with game-theoretically optimal moves.
//!
//! # Architecture
//!
//! - **GameState**: board, turn, chosen side, outcome; the only path that
//!   mutates a game.
//! - **Engine**: exhaustive minimax with depth-sensitive scores and a
//!   center, corners, edges tie-break.
//! - **Session**: sequences human input and engine replies and reports
//!   everything through an [`EventSink`].
//!
//! # Example
//!
//! ```
//! use perfect_tictactoe::{GameEvent, Mark, Session};
//!
//! let mut session = Session::default();
//! let mut events: Vec<GameEvent> = Vec::new();
//!
//! // Computer plays X, so the human opens with O
//! session.choose_side(Mark::X, &mut events)?;
//! session.activate_cell(1, &mut events)?;
//!
//! assert_eq!(session.state().board().occupied(), 2);
//! # Ok::<(), perfect_tictactoe::GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod error;
mod invariants;
mod outcome;
mod position;
pub mod rules;
mod search;
mod session;
mod state;
mod types;

// Crate-level exports - Domain types
pub use action::{Move, Placement};
pub use outcome::Outcome;
pub use position::Position;
pub use types::{Board, BoardParseError, Cell, Mark};

// Crate-level exports - Errors
pub use error::{GameError, MoveError, SearchError, SideError};

// Crate-level exports - Game state
pub use invariants::{
    GameInvariants, HistoryConsistentInvariant, Invariant, InvariantSet, InvariantViolation,
    MarkBalanceInvariant, TurnOrderInvariant,
};
pub use state::GameState;

// Crate-level exports - Search
pub use search::{Engine, ScoredMove, WIN_SCORE, book_move};

// Crate-level exports - Session
pub use session::{Actor, EventSink, GameEvent, Session, StatusMessage};
