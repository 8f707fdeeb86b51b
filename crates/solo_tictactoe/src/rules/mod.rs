//! Game rules.
//!
//! Pure functions over a [`Board`]. The engine recomputes the [`Outcome`]
//! with [`evaluate`] after every half-move instead of storing it apart from
//! the board it describes.

mod draw;
mod win;

pub use draw::is_full;
pub use win::{LINES, check_winner, winning_move};

use crate::board::{Board, Side};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Classification of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, derive_more::Display)]
pub enum Outcome {
    /// No line is complete and empty cells remain.
    #[default]
    #[display("In progress")]
    InProgress,
    /// The human player completed a line.
    #[display("You win!")]
    PlayerWin,
    /// The automated opponent completed a line.
    #[display("You lose!")]
    OpponentWin,
    /// The board is full with no complete line.
    #[display("It's a tie!")]
    Tie,
}

impl Outcome {
    /// Returns true for every outcome except [`Outcome::InProgress`].
    pub fn is_terminal(self) -> bool {
        self != Outcome::InProgress
    }

    /// Outcome for a game won by `side`.
    pub fn won_by(side: Side) -> Self {
        match side {
            Side::Player => Outcome::PlayerWin,
            Side::Opponent => Outcome::OpponentWin,
        }
    }
}

/// Computes the outcome of a board.
///
/// A complete line wins even on a full board; otherwise a full board is a
/// tie.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(side) = check_winner(board) {
        Outcome::won_by(side)
    } else if is_full(board) {
        Outcome::Tie
    } else {
        Outcome::InProgress
    }
}
