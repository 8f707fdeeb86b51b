//! Statistics counters and their on-disk record.

use chrono::{DateTime, Utc};
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Win/loss/tie counters from the human player's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Getters, new)]
pub struct Statistics {
    /// Games the player won.
    wins: u32,
    /// Games the opponent won.
    losses: u32,
    /// Games that filled the board with no line.
    ties: u32,
}

impl Statistics {
    /// Number of completed games.
    pub fn total_games(&self) -> u64 {
        u64::from(self.wins) + u64::from(self.losses) + u64::from(self.ties)
    }

    /// Calculates win rate as a percentage (0.0–100.0).
    #[instrument(skip(self))]
    pub fn win_rate(&self) -> f64 {
        let total = self.total_games();
        if total == 0 {
            0.0
        } else {
            (f64::from(self.wins) / total as f64) * 100.0
        }
    }

    pub(crate) fn add_win(&mut self) {
        self.wins = self.wins.saturating_add(1);
    }

    pub(crate) fn add_loss(&mut self) {
        self.losses = self.losses.saturating_add(1);
    }

    pub(crate) fn add_tie(&mut self) {
        self.ties = self.ties.saturating_add(1);
    }
}

impl std::fmt::Display for Statistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Wins: {}  Losses: {}  Ties: {}",
            self.wins, self.losses, self.ties
        )
    }
}

/// Version tag written into every statistics file.
pub const RECORD_FORMAT: u32 = 1;

/// Statistics file contents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct StatsRecord {
    /// Layout version, always [`RECORD_FORMAT`] when written.
    format: u32,
    /// The counters.
    #[serde(flatten)]
    statistics: Statistics,
    /// When the record was written.
    saved_at: Option<DateTime<Utc>>,
}

impl StatsRecord {
    /// Wraps counters for writing, stamped with the current time.
    #[instrument]
    pub fn stamped(statistics: Statistics) -> Self {
        Self {
            format: RECORD_FORMAT,
            statistics,
            saved_at: Some(Utc::now()),
        }
    }
}
