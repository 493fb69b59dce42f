//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. They carry no turn or session state,
//! so the search engine calls them directly on every node it visits.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, check_winner};

use crate::outcome::Outcome;
use crate::types::Board;

/// Classifies a board as won, drawn or still in progress.
///
/// A completed line takes precedence over a full board.
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(winner) = check_winner(board) {
        Outcome::Won(winner)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Mark;

    #[test]
    fn test_evaluate_each_outcome() {
        let won: Board = "XXX/OO./...".parse().unwrap();
        let drawn: Board = "OXO/OXX/XOO".parse().unwrap();
        let open: Board = "O../.X./...".parse().unwrap();
        assert_eq!(evaluate(&won), Outcome::Won(Mark::X));
        assert_eq!(evaluate(&drawn), Outcome::Draw);
        assert_eq!(evaluate(&open), Outcome::InProgress);
    }

    #[test]
    fn test_win_on_last_cell_is_not_a_draw() {
        let board: Board = "OXO/XOX/XOO".parse().unwrap();
        assert!(is_full(&board));
        assert_eq!(evaluate(&board), Outcome::Won(Mark::O));
    }
}
