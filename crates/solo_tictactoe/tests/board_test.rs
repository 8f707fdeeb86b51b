//! Board and position tests.

use solo_tictactoe::{Board, Cell, Position, Side};
use strum::IntoEnumIterator;

const E: Cell = Cell::Empty;
const X: Cell = Cell::Player;
const O: Cell = Cell::Opponent;

#[test]
fn test_position_coordinates_round_trip() {
    for (index, pos) in Position::iter().enumerate() {
        assert_eq!(pos.to_index(), index);
        assert_eq!(Position::from_index(index), Some(pos));
        assert_eq!(Position::from_coords(pos.row(), pos.col()), Some(pos));
    }
    assert_eq!(Position::ALL.len(), 9);
}

#[test]
fn test_position_out_of_range() {
    assert_eq!(Position::from_index(9), None);
    assert_eq!(Position::from_coords(3, 0), None);
    assert_eq!(Position::from_coords(0, 3), None);
}

#[test]
fn test_position_display() {
    assert_eq!(Position::Center.to_string(), "Center");
    assert_eq!(Position::BottomRight.to_string(), "Bottom-right");
}

#[test]
fn test_new_board_is_empty() {
    let board = Board::new();
    assert_eq!(board, Board::default());
    assert_eq!(board.count(Cell::Empty), 9);
    assert_eq!(board.empty_positions().len(), 9);
    assert_eq!(board.first_empty(), Some(Position::TopLeft));
    assert_eq!(board.side_to_move(), Side::Player);
    assert!(!board.is_full());
}

#[test]
fn test_cell_lookup() {
    let board = Board::from_rows([[X, E, E], [E, O, E], [E, E, E]]);
    assert_eq!(board.get(Position::TopLeft), Cell::Player);
    assert_eq!(board.cell(1, 1), Some(Cell::Opponent));
    assert_eq!(board.cell(2, 2), Some(Cell::Empty));
    assert_eq!(board.cell(3, 1), None);
    assert_eq!(board.rows()[1], [E, O, E]);
    assert_eq!(board.first_empty(), Some(Position::TopCenter));
}

#[test]
fn test_side_to_move_and_balance() {
    let board = Board::from_rows([[X, E, E], [E, E, E], [E, E, E]]);
    assert_eq!(board.side_to_move(), Side::Opponent);
    assert!(board.counts_balanced());

    let lopsided = Board::from_rows([[X, X, E], [E, E, E], [E, E, E]]);
    assert!(!lopsided.counts_balanced());
}

#[test]
fn test_cell_and_side_conversions() {
    assert_eq!(Cell::from(Side::Player), Cell::Player);
    assert_eq!(Cell::Opponent.side(), Some(Side::Opponent));
    assert_eq!(Cell::Empty.side(), None);
    assert_eq!(Side::Player.other(), Side::Opponent);
    assert_eq!(Cell::Player.glyph(), 'X');
    assert_eq!(Cell::Opponent.glyph(), 'O');
}

#[test]
fn test_display_numbers_empty_cells() {
    let board = Board::from_rows([[X, E, E], [E, O, E], [E, E, E]]);
    assert_eq!(board.to_string(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
}

#[test]
fn test_board_serde_round_trip() {
    let board = Board::from_rows([[X, O, E], [E, X, E], [E, E, O]]);
    let json = serde_json::to_string(&board).expect("Serialize failed");
    let back: Board = serde_json::from_str(&json).expect("Deserialize failed");
    assert_eq!(back, board);
}
