//! Opening book.

use crate::position::Position;
use crate::types::{Board, Cell, Mark};

/// Book reply for O holding the center against a lone X corner.
///
/// Returns the corner diagonally opposite X's when the engine plays O,
/// O owns the center, X owns exactly one corner and nothing else is on
/// the board. Any other position has no book move.
pub fn book_move(board: &Board, engine: Mark) -> Option<Position> {
    if engine != Mark::O
        || board.get(Position::Center) != Cell::Occupied(Mark::O)
        || board.occupied() != 2
    {
        return None;
    }

    Position::CORNERS
        .iter()
        .find(|corner| board.get(**corner) == Cell::Occupied(Mark::X))
        .map(|corner| corner.opposite())
        .filter(|reply| board.is_empty(*reply))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replies_with_opposite_corner() {
        for corner in Position::CORNERS {
            let board = Board::new()
                .with(Position::Center, Mark::O)
                .with(corner, Mark::X);
            assert_eq!(book_move(&board, Mark::O), Some(corner.opposite()));
        }
    }

    #[test]
    fn test_no_book_for_edges_or_x_engine() {
        let edge = Board::new()
            .with(Position::Center, Mark::O)
            .with(Position::TopCenter, Mark::X);
        assert_eq!(book_move(&edge, Mark::O), None);

        let corner = Board::new()
            .with(Position::Center, Mark::O)
            .with(Position::TopLeft, Mark::X);
        assert_eq!(book_move(&corner, Mark::X), None);
    }

    #[test]
    fn test_no_book_once_more_is_placed() {
        let board: Board = "X.O/.O./...".parse().unwrap();
        assert_eq!(book_move(&board, Mark::O), None);
    }
}
