//! Win/loss/tie statistics and their persistence.

mod error;
mod models;
mod storage;
mod store;

pub use error::PersistenceError;
pub use models::{RECORD_FORMAT, Statistics, StatsRecord};
pub use storage::{JsonFileStorage, MemoryStorage, StatsStorage};
pub use store::StatisticsStore;
