//! Snapshot stores.
//!
//! A store keeps exactly one snapshot under the fixed key
//! [`STORAGE_KEY`]. Every save overwrites it in full.
//!
//! - [`MemoryStore`]: encoded bytes held in memory (tests, embedding)
//! - [`FileStore`]: one file per store directory, written atomically
//!
//! # Durability
//!
//! `FileStore` uses a write-rename pattern:
//! 1. Write the encoded snapshot to a temporary file
//! 2. Sync the file to disk (`fsync`)
//! 3. Rename over the final path (atomic on POSIX)
//!
//! A crash mid-write leaves the previous snapshot intact.

use rustc_hash::FxHashMap;
use std::io::Write as IoWrite;
use std::path::{Path, PathBuf};
use tracing::warn;

use super::error::SnapshotError;
use super::snapshot::{GameSnapshot, SnapshotFormat};
use crate::core::ScoringConfig;
use crate::engine::ScoreEngine;

/// Logical key the snapshot is stored under.
pub const STORAGE_KEY: &str = "game-scores-storage";

/// Durable home for a game snapshot.
pub trait SnapshotStore {
    /// Load the stored snapshot. `Ok(None)` if nothing has been saved.
    fn load(&self) -> Result<Option<GameSnapshot>, SnapshotError>;

    /// Overwrite the stored snapshot.
    fn save(&mut self, snapshot: &GameSnapshot) -> Result<(), SnapshotError>;

    /// Remove the stored snapshot, if any.
    fn clear(&mut self) -> Result<(), SnapshotError>;
}

/// In-memory store.
///
/// Snapshots are kept encoded so a load exercises the same decode path
/// as a file.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    format: SnapshotFormat,
    entries: FxHashMap<String, Vec<u8>>,
}

impl MemoryStore {
    /// Create an empty store using JSON encoding.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store with the given encoding.
    #[must_use]
    pub fn with_format(format: SnapshotFormat) -> Self {
        Self {
            format,
            entries: FxHashMap::default(),
        }
    }

    /// Raw stored bytes.
    #[must_use]
    pub fn raw(&self) -> Option<&[u8]> {
        self.entries.get(STORAGE_KEY).map(Vec::as_slice)
    }

    /// Replace the stored bytes directly, bypassing encoding.
    pub fn put_raw(&mut self, bytes: Vec<u8>) {
        self.entries.insert(STORAGE_KEY.to_string(), bytes);
    }
}

impl SnapshotStore for MemoryStore {
    fn load(&self) -> Result<Option<GameSnapshot>, SnapshotError> {
        self.raw().map(|bytes| self.format.decode(bytes)).transpose()
    }

    fn save(&mut self, snapshot: &GameSnapshot) -> Result<(), SnapshotError> {
        let bytes = self.format.encode(snapshot)?;
        self.put_raw(bytes);
        Ok(())
    }

    fn clear(&mut self) -> Result<(), SnapshotError> {
        self.entries.remove(STORAGE_KEY);
        Ok(())
    }
}

/// File-backed store.
///
/// Stores `<dir>/game-scores-storage.<ext>`, where the extension follows
/// the format.
#[derive(Clone, Debug)]
pub struct FileStore {
    dir: PathBuf,
    format: SnapshotFormat,
}

impl FileStore {
    /// Create a store rooted at `dir`. The directory is created on first save.
    pub fn new(dir: impl Into<PathBuf>, format: SnapshotFormat) -> Self {
        Self {
            dir: dir.into(),
            format,
        }
    }

    /// Path of the snapshot file.
    #[must_use]
    pub fn path(&self) -> PathBuf {
        self.dir
            .join(format!("{STORAGE_KEY}.{}", self.format.extension()))
    }

    /// Atomically write data to a file using write-rename.
    fn atomic_write(&self, path: &Path, data: &[u8]) -> Result<(), SnapshotError> {
        std::fs::create_dir_all(&self.dir)?;
        let temp_path = path.with_extension("tmp");

        {
            let mut file = std::fs::File::create(&temp_path)?;
            file.write_all(data)?;
            file.sync_all()?;
        }

        std::fs::rename(&temp_path, path)?;
        Ok(())
    }
}

impl SnapshotStore for FileStore {
    fn load(&self) -> Result<Option<GameSnapshot>, SnapshotError> {
        let path = self.path();
        if !path.exists() {
            return Ok(None);
        }
        let bytes = std::fs::read(&path)?;
        self.format.decode(&bytes).map(Some)
    }

    fn save(&mut self, snapshot: &GameSnapshot) -> Result<(), SnapshotError> {
        let bytes = self.format.encode(snapshot)?;
        self.atomic_write(&self.path(), &bytes)
    }

    fn clear(&mut self) -> Result<(), SnapshotError> {
        match std::fs::remove_file(self.path()) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

/// Build an engine from whatever a store holds.
///
/// Fails open: a missing, unreadable or corrupt snapshot yields a fresh
/// game, the same state `reset_game` produces.
pub fn load_engine(store: &impl SnapshotStore, config: ScoringConfig) -> ScoreEngine {
    let mut engine = ScoreEngine::new(config);
    match store.load() {
        Ok(Some(snapshot)) => {
            if let Err(err) = engine.apply_snapshot(&snapshot) {
                warn!("Discarding stored game: {err}");
            }
        }
        Ok(None) => {}
        Err(err) => warn!("Stored game unreadable, starting fresh: {err}"),
    }
    engine
}
