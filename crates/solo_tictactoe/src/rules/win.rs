//! Win detection logic.

use crate::board::{Board, Cell, Position, Side};
use tracing::instrument;

/// The eight lines that win the game.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(side)` if that side owns all three cells of a line.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Side> {
    LINES.iter().find_map(|&[a, b, c]| {
        let cell = board.get(a);
        if cell == board.get(b) && cell == board.get(c) {
            cell.side()
        } else {
            None
        }
    })
}

/// Finds the empty cell that would complete a line for `side`.
///
/// A line qualifies when it holds two of `side`'s marks and one empty
/// cell. Lines are scanned in [`LINES`] order.
#[instrument(skip(board))]
pub fn winning_move(board: &Board, side: Side) -> Option<Position> {
    let mark = Cell::from(side);
    LINES.iter().find_map(|line| {
        let owned = line.iter().filter(|&&pos| board.get(pos) == mark).count();
        let empty: Vec<Position> = line
            .iter()
            .copied()
            .filter(|&pos| board.is_empty(pos))
            .collect();
        match (owned, empty.as_slice()) {
            (2, [pos]) => Some(*pos),
            _ => None,
        }
    })
}
