//! Gameplay error types.

use crate::board::Position;
use crate::rules::Outcome;
use derive_more::{Display, Error};

/// A move the engine refused. The board is left unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum IllegalMove {
    /// Row or column outside `0..=2`.
    #[display("Cell ({row}, {col}) is off the board")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The target cell already holds a mark.
    #[display("{_0} is already occupied")]
    Occupied(#[error(not(source))] Position),

    /// The game has ended; only a reset accepts new moves.
    #[display("Game is already over: {_0}")]
    GameOver(#[error(not(source))] Outcome),
}

/// Attempt to record a game that has not finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Cannot record non-terminal outcome {outcome:?}")]
pub struct InvalidOutcome {
    /// The rejected outcome.
    pub outcome: Outcome,
}
