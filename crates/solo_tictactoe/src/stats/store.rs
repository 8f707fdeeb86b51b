//! In-memory counters backed by a [`StatsStorage`].

use tracing::{debug, error, info, instrument, warn};

use crate::error::InvalidOutcome;
use crate::rules::Outcome;
use crate::stats::{PersistenceError, Statistics, StatsStorage};

/// Owns the running counters and writes them at explicit checkpoints.
#[derive(Debug)]
pub struct StatisticsStore {
    stats: Statistics,
    storage: Box<dyn StatsStorage>,
}

impl StatisticsStore {
    /// Loads counters from `storage`.
    ///
    /// Missing or unreadable records start from zero.
    #[instrument(skip(storage))]
    pub fn load(storage: Box<dyn StatsStorage>) -> Self {
        let stats = match storage.load() {
            Ok(Some(stats)) => {
                info!(%stats, "Statistics loaded");
                stats
            }
            Ok(None) => {
                info!("No stored statistics, starting from zero");
                Statistics::default()
            }
            Err(e) => {
                warn!(error = %e, "Stored statistics unreadable, starting from zero");
                Statistics::default()
            }
        };
        Self { stats, storage }
    }

    /// Counts a finished game. Does not persist.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidOutcome`] for [`Outcome::InProgress`]; the counters
    /// are left untouched.
    #[instrument(skip(self))]
    pub fn record(&mut self, outcome: Outcome) -> Result<Statistics, InvalidOutcome> {
        match outcome {
            Outcome::PlayerWin => self.stats.add_win(),
            Outcome::OpponentWin => self.stats.add_loss(),
            Outcome::Tie => self.stats.add_tie(),
            Outcome::InProgress => {
                error!("Attempted to record an unfinished game");
                return Err(InvalidOutcome { outcome });
            }
        }
        debug!(stats = %self.stats, "Outcome recorded");
        Ok(self.stats)
    }

    /// Zeroes the counters and persists them.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError`] if the write fails. The in-memory
    /// counters are zeroed regardless.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> Result<(), PersistenceError> {
        self.stats = Statistics::default();
        info!("Statistics reset");
        self.save()
    }

    /// Writes the current counters.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError`] if the storage is not writable.
    #[instrument(skip(self))]
    pub fn save(&self) -> Result<(), PersistenceError> {
        self.storage.save(&self.stats)
    }

    /// Returns a copy of the counters.
    pub fn snapshot(&self) -> Statistics {
        self.stats
    }
}
