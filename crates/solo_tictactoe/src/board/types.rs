//! Core domain types for the board.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

use super::Position;

/// Owner of a mark on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The human player (always moves first).
    Player,
    /// The automated opponent.
    Opponent,
}

impl Side {
    /// Returns the other side.
    pub fn other(self) -> Self {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Marked by the human player.
    Player,
    /// Marked by the automated opponent.
    Opponent,
}

impl Cell {
    /// Returns the side owning this cell, if any.
    pub fn side(self) -> Option<Side> {
        match self {
            Cell::Empty => None,
            Cell::Player => Some(Side::Player),
            Cell::Opponent => Some(Side::Opponent),
        }
    }

    /// Character drawn for this cell.
    pub fn glyph(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Player => 'X',
            Cell::Opponent => 'O',
        }
    }
}

impl From<Side> for Cell {
    fn from(side: Side) -> Self {
        match side {
            Side::Player => Cell::Player,
            Side::Opponent => Cell::Opponent,
        }
    }
}

/// 3x3 board.
///
/// The board is a plain value: consumers only ever receive copies, and
/// only the engine holds a mutable one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Gets the cell at `(row, col)`, or `None` when out of range.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        Position::from_coords(row, col).map(|pos| self.get(pos))
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Returns the grid as three rows.
    pub fn rows(&self) -> [[Cell; 3]; 3] {
        let c = &self.cells;
        [[c[0], c[1], c[2]], [c[3], c[4], c[5]], [c[6], c[7], c[8]]]
    }

    /// Counts cells holding the given value.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Lists the empty positions in row-major order.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::iter().filter(|&pos| self.is_empty(pos)).collect()
    }

    /// Returns the first empty position in row-major order.
    pub fn first_empty(&self) -> Option<Position> {
        Position::iter().find(|&pos| self.is_empty(pos))
    }

    /// Checks whether every cell is occupied.
    pub fn is_full(&self) -> bool {
        crate::rules::is_full(self)
    }

    /// Side whose turn it would be, reconstructed from the mark counts.
    ///
    /// The player moves first, so equal counts mean the player is up.
    #[instrument(skip(self))]
    pub fn side_to_move(&self) -> Side {
        if self.count(Cell::Player) > self.count(Cell::Opponent) {
            Side::Opponent
        } else {
            Side::Player
        }
    }

    /// Checks the mark-count invariant: the player is never behind and
    /// never more than one mark ahead.
    pub fn counts_balanced(&self) -> bool {
        let player = self.count(Cell::Player);
        let opponent = self.count(Cell::Opponent);
        player == opponent || player == opponent + 1
    }

    pub(crate) fn place(&mut self, pos: Position, side: Side) {
        self.cells[pos.to_index()] = Cell::from(side);
    }

    pub(crate) fn clear(&mut self) {
        self.cells = [Cell::Empty; 9];
    }

    /// Builds a board from rows. Intended for tests and tooling.
    pub fn from_rows(rows: [[Cell; 3]; 3]) -> Self {
        let mut cells = [Cell::Empty; 9];
        for (r, row) in rows.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                cells[r * 3 + c] = *cell;
            }
        }
        Self { cells }
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (r, row) in self.rows().iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                match cell {
                    Cell::Empty => write!(f, "{}", r * 3 + c + 1)?,
                    other => write!(f, "{}", other.glyph())?,
                }
                if c < 2 {
                    f.write_str("|")?;
                }
            }
            if r < 2 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}
