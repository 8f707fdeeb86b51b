//! Game session: one engine, one statistics store, one observer channel.

use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tracing::{error, info, instrument, warn};

use crate::board::Board;
use crate::config::SoloConfig;
use crate::engine::BoardEngine;
use crate::error::IllegalMove;
use crate::opponent::HeuristicOpponent;
use crate::rules::Outcome;
use crate::stats::{JsonFileStorage, PersistenceError, Statistics, StatisticsStore};

/// Everything a front-end needs to draw the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// The grid.
    pub board: Board,
    /// Outcome of the current game.
    pub outcome: Outcome,
    /// Running counters.
    pub statistics: Statistics,
}

/// Composes the board engine and the statistics store.
///
/// A finished game is counted once, on the move that ends it; the flag is
/// cleared by [`GameSession::new_game`].
#[derive(Debug)]
pub struct GameSession {
    engine: BoardEngine,
    stats: StatisticsStore,
    recorded: bool,
    view: watch::Sender<SessionSnapshot>,
}

impl GameSession {
    /// Creates a session from an engine and a loaded store.
    #[instrument(skip_all)]
    pub fn new(engine: BoardEngine, stats: StatisticsStore) -> Self {
        let recorded = engine.outcome().is_terminal();
        let initial = SessionSnapshot {
            board: *engine.board(),
            outcome: engine.outcome(),
            statistics: stats.snapshot(),
        };
        let (view, _) = watch::channel(initial);
        info!(statistics = %initial.statistics, "Game session created");
        Self {
            engine,
            stats,
            recorded,
            view,
        }
    }

    /// Creates a session using the configured statistics file and seed.
    #[instrument(skip(config), fields(stats_path = %config.stats_path().display()))]
    pub fn from_config(config: &SoloConfig) -> Self {
        let opponent = HeuristicOpponent::with_seed(*config.opponent_seed());
        let engine = BoardEngine::new(Box::new(opponent));
        let stats = StatisticsStore::load(Box::new(JsonFileStorage::new(config.stats_path())));
        Self::new(engine, stats)
    }

    /// Plays the human's move and the opponent's reply.
    ///
    /// # Errors
    ///
    /// Returns [`IllegalMove`] if the move is rejected; nothing changes.
    #[instrument(skip(self))]
    pub fn play(&mut self, row: usize, col: usize) -> Result<SessionSnapshot, IllegalMove> {
        let outcome = self.engine.submit_player_move(row, col)?;

        if outcome.is_terminal() && !self.recorded {
            self.recorded = true;
            match self.stats.record(outcome) {
                Ok(stats) => info!(?outcome, %stats, "Game recorded"),
                Err(e) => {
                    error!(error = %e, "Failed to record outcome");
                    debug_assert!(false, "terminal outcome rejected: {e}");
                }
            }
        }

        Ok(self.publish())
    }

    /// Clears the board. Statistics are untouched.
    #[instrument(skip(self))]
    pub fn new_game(&mut self) -> SessionSnapshot {
        self.engine.reset();
        self.recorded = false;
        self.publish()
    }

    /// Zeroes the statistics and persists them.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError`] if the write fails. The counters are
    /// zeroed in memory either way and play can continue.
    #[instrument(skip(self))]
    pub fn reset_statistics(&mut self) -> Result<(), PersistenceError> {
        let result = self.stats.reset();
        if let Err(e) = &result {
            warn!(error = %e, "Statistics reset but not persisted");
        }
        self.publish();
        result
    }

    /// Flushes the statistics to storage. Call once at shutdown.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError`] if the write fails.
    #[instrument(skip(self))]
    pub fn save(&self) -> Result<(), PersistenceError> {
        self.stats.save().inspect_err(|e| {
            warn!(error = %e, "Failed to save statistics");
        })
    }

    /// Returns the current snapshot.
    pub fn snapshot(&self) -> SessionSnapshot {
        *self.view.borrow()
    }

    /// Subscribes to snapshot replacements.
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.view.subscribe()
    }

    fn publish(&self) -> SessionSnapshot {
        let board = self.engine.current_snapshot();
        let snapshot = SessionSnapshot {
            board: board.board,
            outcome: board.outcome,
            statistics: self.stats.snapshot(),
        };
        self.view.send_replace(snapshot);
        snapshot
    }
}
