//! Solo tic-tac-toe - a human against an automated opponent
//!
//! This library holds the game state; front-ends only read snapshots and
//! forward moves.
//!
//! # Architecture
//!
//! - **Board**: the 3x3 grid and its cell values
//! - **Rules**: pure win/tie detection
//! - **Engine**: move legality and the opponent's reply
//! - **Stats**: win/loss/tie counters and their JSON file
//! - **Session**: composes engine and statistics, publishes snapshots
//!
//! # Example
//!
//! ```
//! use solo_tictactoe::{BoardEngine, GameSession, MemoryStorage, StatisticsStore};
//!
//! let engine = BoardEngine::default();
//! let stats = StatisticsStore::load(Box::new(MemoryStorage::new()));
//! let mut session = GameSession::new(engine, stats);
//!
//! let snapshot = session.play(1, 1).unwrap();
//! assert!(!snapshot.outcome.is_terminal());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod board;
mod config;
mod engine;
mod error;
mod opponent;
mod rules;
mod session;
mod stats;

// Crate-level exports - Board
pub use board::{Board, Cell, Position, Side};

// Crate-level exports - Rules
pub use rules::{LINES, Outcome, check_winner, evaluate, is_full, winning_move};

// Crate-level exports - Engine
pub use engine::{BoardEngine, BoardSnapshot};
pub use opponent::{HeuristicOpponent, Opponent};

// Crate-level exports - Errors
pub use error::{IllegalMove, InvalidOutcome};

// Crate-level exports - Statistics
pub use stats::{
    JsonFileStorage, MemoryStorage, PersistenceError, RECORD_FORMAT, Statistics, StatisticsStore,
    StatsRecord, StatsStorage,
};

// Crate-level exports - Session
pub use session::{GameSession, SessionSnapshot};

// Crate-level exports - Configuration
pub use config::{ConfigError, SoloConfig};
