//! Snapshot stores: where the knowledge base lives between processes.
//!
//! The session only talks to the [`SnapshotStore`] trait, so the storage
//! medium is the embedder's choice. Two stores ship with the crate: a JSON
//! file on disk and an in-memory slot for tests and embedding.

use dyad_core::error::{DyadError, Result};
use dyad_core::snapshot::Snapshot;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Load-at-startup, save-after-mutation persistence.
pub trait SnapshotStore {
    /// Read the stored snapshot. `Ok(None)` means nothing has been saved.
    fn load(&self) -> Result<Option<Snapshot>>;

    /// Replace the stored snapshot.
    fn save(&mut self, snapshot: &Snapshot) -> Result<()>;

    /// Remove the stored snapshot. Clearing an empty store is not an error.
    fn clear(&mut self) -> Result<()>;
}

impl<S: SnapshotStore + ?Sized> SnapshotStore for Box<S> {
    fn load(&self) -> Result<Option<Snapshot>> {
        (**self).load()
    }

    fn save(&mut self, snapshot: &Snapshot) -> Result<()> {
        (**self).save(snapshot)
    }

    fn clear(&mut self) -> Result<()> {
        (**self).clear()
    }
}

/// Write a snapshot to a JSON file, creating parent directories.
pub fn save_snapshot(path: &Path, snapshot: &Snapshot) -> Result<()> {
    let json = snapshot.to_json_pretty()?;

    // Create parent directory if needed
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    std::fs::write(path, json)?;
    debug!(path = %path.display(), "saved snapshot");
    Ok(())
}

/// Read a snapshot from a JSON file. Decode errors name the file.
pub fn load_snapshot(path: &Path) -> Result<Snapshot> {
    let json = std::fs::read_to_string(path)?;
    serde_json::from_str(&json)
        .map_err(|e| DyadError::snapshot(format!("{}: {}", path.display(), e)))
}

/// Snapshot kept as pretty-printed JSON at a fixed path.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStore for JsonFileStore {
    fn load(&self) -> Result<Option<Snapshot>> {
        if !self.path.exists() {
            return Ok(None);
        }
        load_snapshot(&self.path).map(Some)
    }

    fn save(&mut self, snapshot: &Snapshot) -> Result<()> {
        save_snapshot(&self.path, snapshot)
    }

    fn clear(&mut self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Snapshot held in memory. Counts saves so callers can observe
/// save-after-mutation.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    snapshot: Option<Snapshot>,
    saves: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `snapshot`.
    pub fn with_snapshot(snapshot: Snapshot) -> Self {
        Self {
            snapshot: Some(snapshot),
            saves: 0,
        }
    }

    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.snapshot.as_ref()
    }

    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl SnapshotStore for MemoryStore {
    fn load(&self) -> Result<Option<Snapshot>> {
        Ok(self.snapshot.clone())
    }

    fn save(&mut self, snapshot: &Snapshot) -> Result<()> {
        self.snapshot = Some(snapshot.clone());
        self.saves += 1;
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.snapshot = None;
        Ok(())
    }
}
