//! First-class invariants for the game state.
//!
//! Invariants are logical properties that must hold after every move.
//! `GameState` checks them in debug builds; tests check them directly.

use crate::state::GameState;
use crate::types::{Board, Cell, Mark};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }
        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: O opens, so O leads X by zero or one mark.
pub struct MarkBalanceInvariant;

impl Invariant<GameState> for MarkBalanceInvariant {
    fn holds(state: &GameState) -> bool {
        let board = state.board();
        let o = board.count(Mark::O);
        let x = board.count(Mark::X);
        o == x || o == x + 1
    }

    fn description() -> &'static str {
        "O count equals X count or exceeds it by one"
    }
}

/// Invariant: while the game runs, the side to move matches the counts.
pub struct TurnOrderInvariant;

impl Invariant<GameState> for TurnOrderInvariant {
    fn holds(state: &GameState) -> bool {
        state.is_terminal() || state.current_turn() == state.board().side_to_move()
    }

    fn description() -> &'static str {
        "Current turn agrees with the marks on the board"
    }
}

/// Invariant: replaying the move history reproduces the board.
///
/// Moves alternate starting with O and never land on an occupied cell.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        let mut replayed = Board::new();
        let mut expected = Mark::O;

        for mov in state.history() {
            if mov.mark != expected || replayed.get(mov.position) != Cell::Empty {
                return false;
            }
            replayed.set(mov.position, Cell::Occupied(mov.mark));
            expected = expected.opponent();
        }

        replayed == *state.board()
    }

    fn description() -> &'static str {
        "Move history replays to the current board"
    }
}

/// All game-state invariants as a composable set.
pub type GameInvariants = (
    MarkBalanceInvariant,
    TurnOrderInvariant,
    HistoryConsistentInvariant,
);
