//! First-class move records.
//!
//! Moves are domain events, not side effects. The game state keeps the
//! sequence it applied, and the engine's self-play returns one.

use crate::outcome::Outcome;
use crate::position::Position;
use crate::types::{Board, Mark};
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a mark placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The mark placed.
    pub mark: Mark,
    /// Where it was placed.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(mark: Mark, position: Position) -> Self {
        Self { mark, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position.label())
    }
}

/// What a successful move application produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    /// The move that was applied.
    pub applied: Move,
    /// Board after the move.
    pub board: Board,
    /// Outcome after the move.
    pub outcome: Outcome,
}

impl Placement {
    /// Returns true if this move ended the game.
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_terminal()
    }
}
