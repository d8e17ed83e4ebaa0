use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::changelog::entry::ChangeEntry;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("change log at {path} is not valid JSON: {source}")]
    Corrupt {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to serialize change log: {0}")]
    Serialize(serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Durable, append-only change history backed by a single JSON document.
///
/// The store owns its file exclusively; one writer per process is assumed
/// and no cross-process locking is provided.
pub struct ChangeLogStore {
    path: PathBuf,
}

impl ChangeLogStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the full log in persisted order. A missing file is a first
    /// run and yields an empty log.
    pub fn load(&self) -> Result<Vec<ChangeEntry>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path)?;
        serde_json::from_str(&content).map_err(|source| StoreError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    /// Appends one entry via read-modify-write of the whole document.
    pub fn append(&self, entry: ChangeEntry) -> Result<(), StoreError> {
        let mut entries = self.load()?;
        entries.push(entry);
        self.write_all(&entries)
    }

    /// Replaces whatever is on disk with an empty log. Recovery path for
    /// a corrupt document; the history is advisory, not a source of truth.
    pub fn reinitialize(&self) -> Result<(), StoreError> {
        self.write_all(&[])
    }

    /// Rewrites the document atomically: serialize to `<path>.tmp`, then
    /// rename onto the target. An interrupt mid-write leaves the previous
    /// document intact, never a truncated one.
    fn write_all(&self, entries: &[ChangeEntry]) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(entries).map_err(StoreError::Serialize)?;
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                fs::create_dir_all(dir)?;
            }
        }
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        tracing::debug!(path = %self.path.display(), entries = entries.len(), "change log written");
        Ok(())
    }
}
