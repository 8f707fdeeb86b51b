//! Draw detection logic.

use crate::board::{Board, Cell};

/// Checks if the board is full (all cells occupied).
///
/// A full board with no winner is a tie.
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|&c| c != Cell::Empty)
}

#[cfg(test)]
mod tests {
    use super::super::check_winner;
    use super::*;

    const E: Cell = Cell::Empty;
    const X: Cell = Cell::Player;
    const O: Cell = Cell::Opponent;

    fn is_tie(board: &Board) -> bool {
        is_full(board) && check_winner(board).is_none()
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let board = Board::from_rows([[X, O, X], [O, X, X], [O, X, E]]);
        assert!(!is_full(&board));
    }

    #[test]
    fn test_tie_detection() {
        // X O X / O X X / O X O
        let board = Board::from_rows([[X, O, X], [O, X, X], [O, X, O]]);
        assert!(is_tie(&board));
    }

    #[test]
    fn test_not_tie_if_winner() {
        let board = Board::from_rows([[X, X, X], [O, O, X], [X, O, O]]);
        assert!(is_full(&board));
        assert!(!is_tie(&board));
    }
}
