//! Durable storage backends for statistics.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use tempfile::NamedTempFile;
use tracing::{debug, info, instrument};

use crate::stats::{PersistenceError, RECORD_FORMAT, Statistics, StatsRecord};

/// Where statistics live between sessions.
///
/// Every save replaces the whole record.
pub trait StatsStorage: std::fmt::Debug + Send {
    /// Reads the stored counters. `Ok(None)` means nothing was stored yet.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError`] if the record exists but cannot be read
    /// or decoded.
    fn load(&self) -> Result<Option<Statistics>, PersistenceError>;

    /// Replaces the stored counters.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError`] if the storage is not writable.
    fn save(&self, stats: &Statistics) -> Result<(), PersistenceError>;
}

/// Statistics kept in a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    /// Creates storage backed by the file at `path`. Nothing is touched
    /// until the first load or save.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Returns the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StatsStorage for JsonFileStorage {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn load(&self) -> Result<Option<Statistics>, PersistenceError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No statistics file");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let record: StatsRecord = serde_json::from_str(&content)?;
        if *record.format() != RECORD_FORMAT {
            return Err(PersistenceError::new(format!(
                "Unsupported statistics format {} in '{}'",
                record.format(),
                self.path.display()
            )));
        }

        debug!(saved_at = ?record.saved_at(), "Statistics file read");
        Ok(Some(*record.statistics()))
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn save(&self, stats: &Statistics) -> Result<(), PersistenceError> {
        let dir = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."));
        fs::create_dir_all(dir)?;

        // Write beside the target and rename over it so readers never see a
        // partial record.
        let mut tmp = NamedTempFile::new_in(dir)?;
        serde_json::to_writer_pretty(&mut tmp, &StatsRecord::stamped(*stats))?;
        tmp.write_all(b"\n")?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| {
            PersistenceError::new(format!(
                "Failed to replace '{}': {}",
                self.path.display(),
                e.error
            ))
        })?;

        info!(%stats, "Statistics saved");
        Ok(())
    }
}

/// In-process storage. Clones share the same record.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    record: Arc<Mutex<Option<Statistics>>>,
    unwritable: Arc<AtomicBool>,
}

impl MemoryStorage {
    /// Creates empty storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates storage already holding `stats`.
    pub fn with_record(stats: Statistics) -> Self {
        Self {
            record: Arc::new(Mutex::new(Some(stats))),
            unwritable: Arc::default(),
        }
    }

    /// Makes subsequent saves fail, as a full disk or read-only file would.
    pub fn set_unwritable(&self, unwritable: bool) {
        self.unwritable.store(unwritable, Ordering::SeqCst);
    }

    /// Returns the last saved counters.
    pub fn stored(&self) -> Option<Statistics> {
        self.record.lock().ok().and_then(|record| *record)
    }
}

impl StatsStorage for MemoryStorage {
    fn load(&self) -> Result<Option<Statistics>, PersistenceError> {
        let record = self
            .record
            .lock()
            .map_err(|_| PersistenceError::new("Statistics record lock poisoned"))?;
        Ok(*record)
    }

    fn save(&self, stats: &Statistics) -> Result<(), PersistenceError> {
        if self.unwritable.load(Ordering::SeqCst) {
            return Err(PersistenceError::new("Storage is not writable"));
        }
        let mut record = self
            .record
            .lock()
            .map_err(|_| PersistenceError::new("Statistics record lock poisoned"))?;
        *record = Some(*stats);
        Ok(())
    }
}
