//! Automated opponent move selection.

use crate::board::{Board, Position, Side};
use crate::rules::winning_move;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

/// Chooses the opponent's reply.
///
/// The engine only asks when at least one cell is empty, and replaces any
/// answer that is `None` or occupied with the first empty cell.
pub trait Opponent: std::fmt::Debug + Send {
    /// Picks an empty cell for the opponent's mark.
    fn choose(&mut self, board: &Board) -> Option<Position>;
}

/// Center first, then win, then block, then a random empty cell.
#[derive(Debug, Clone)]
pub struct HeuristicOpponent {
    rng: SmallRng,
}

impl HeuristicOpponent {
    /// Creates an opponent seeded from the operating system.
    #[instrument]
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_os_rng(),
        }
    }

    /// Creates an opponent with a reproducible random source.
    #[instrument]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Creates a seeded opponent when a seed is given, otherwise an OS-seeded one.
    pub fn with_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::new, Self::seeded)
    }
}

impl Default for HeuristicOpponent {
    fn default() -> Self {
        Self::new()
    }
}

impl Opponent for HeuristicOpponent {
    #[instrument(skip(self, board))]
    fn choose(&mut self, board: &Board) -> Option<Position> {
        if board.is_empty(Position::Center) {
            debug!("Taking center");
            return Some(Position::Center);
        }

        if let Some(pos) = winning_move(board, Side::Opponent) {
            debug!(position = %pos, "Completing line");
            return Some(pos);
        }

        if let Some(pos) = winning_move(board, Side::Player) {
            debug!(position = %pos, "Blocking line");
            return Some(pos);
        }

        let empty = board.empty_positions();
        if empty.is_empty() {
            return None;
        }
        let pos = empty[self.rng.random_range(0..empty.len())];
        debug!(position = %pos, candidates = empty.len(), "Random move");
        Some(pos)
    }
}
