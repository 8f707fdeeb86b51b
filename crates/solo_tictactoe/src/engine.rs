//! Board engine: move legality, turn arbitration and outcome tracking.

use crate::board::{Board, Position, Side};
use crate::error::IllegalMove;
use crate::opponent::{HeuristicOpponent, Opponent};
use crate::rules::{Outcome, evaluate};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument, warn};

/// Immutable copy of the engine state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BoardSnapshot {
    /// The grid.
    pub board: Board,
    /// The outcome of `board`.
    pub outcome: Outcome,
}

/// Owns the board and plays the opponent's half-move.
///
/// Each accepted player move is followed immediately by the opponent's
/// reply, so callers only ever observe the player's turn or a finished game.
#[derive(Debug)]
pub struct BoardEngine {
    board: Board,
    outcome: Outcome,
    opponent: Box<dyn Opponent>,
}

impl BoardEngine {
    /// Creates an engine with an empty board and the given opponent.
    #[instrument(skip(opponent))]
    pub fn new(opponent: Box<dyn Opponent>) -> Self {
        Self {
            board: Board::new(),
            outcome: Outcome::InProgress,
            opponent,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the cached outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns an immutable copy of board and outcome.
    pub fn current_snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            board: self.board,
            outcome: self.outcome,
        }
    }

    /// Plays the human's mark at `(row, col)`, then the opponent's reply.
    ///
    /// # Errors
    ///
    /// Returns [`IllegalMove`] when the coordinates are off the board, the
    /// cell is occupied, or the game is over. The board is not modified.
    #[instrument(skip(self), fields(outcome = ?self.outcome))]
    pub fn submit_player_move(&mut self, row: usize, col: usize) -> Result<Outcome, IllegalMove> {
        let pos = Position::from_coords(row, col).ok_or_else(|| {
            warn!(row, col, "Move off the board");
            IllegalMove::OutOfBounds { row, col }
        })?;

        if self.outcome.is_terminal() {
            warn!(position = %pos, "Move after game over");
            return Err(IllegalMove::GameOver(self.outcome));
        }

        if !self.board.is_empty(pos) {
            warn!(position = %pos, "Move on occupied cell");
            return Err(IllegalMove::Occupied(pos));
        }

        debug_assert_eq!(self.board.side_to_move(), Side::Player);

        self.board.place(pos, Side::Player);
        self.outcome = evaluate(&self.board);
        debug!(position = %pos, outcome = ?self.outcome, "Player moved");

        if !self.outcome.is_terminal() {
            self.play_opponent();
        }

        debug_assert!(self.outcome.is_terminal() || self.board.counts_balanced());

        if self.outcome.is_terminal() {
            info!(outcome = ?self.outcome, "Game over");
        }

        Ok(self.outcome)
    }

    /// Clears the board and starts a new game.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board.clear();
        self.outcome = Outcome::InProgress;
        info!("Board reset");
    }

    fn play_opponent(&mut self) {
        let pos = match self.opponent.choose(&self.board) {
            Some(pos) if self.board.is_empty(pos) => Some(pos),
            other => {
                warn!(choice = ?other, "Opponent chose an unavailable cell, using first empty");
                self.board.first_empty()
            }
        };

        let Some(pos) = pos else {
            // An in-progress board always has an empty cell.
            error!(board = %self.board, "No empty cell for opponent");
            return;
        };

        self.board.place(pos, Side::Opponent);
        self.outcome = evaluate(&self.board);
        debug!(position = %pos, outcome = ?self.outcome, "Opponent moved");
    }
}

impl Default for BoardEngine {
    fn default() -> Self {
        Self::new(Box::new(HeuristicOpponent::new()))
    }
}
