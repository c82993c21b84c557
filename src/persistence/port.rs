use super::error::StorageError;
use super::files::{atomic_write, read_optional, slot_path};
use std::fs;
use std::path::PathBuf;

/// Default per-slot size limit, matching common browser local-storage quotas
pub const DEFAULT_QUOTA_BYTES: usize = 5 * 1024 * 1024;

/// Durable key-value storage shared between sessions
pub trait StoragePort {
    /// Current value of `key`, `None` if the slot has never been written
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value of `key`
    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Storage backed by one JSON file per key inside a data directory
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
    quota_bytes: usize,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            quota_bytes: DEFAULT_QUOTA_BYTES,
        }
    }

    pub fn with_quota(mut self, quota_bytes: usize) -> Self {
        self.quota_bytes = quota_bytes;
        self
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        slot_path(&self.dir, key)
    }
}

impl StoragePort for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key);
        read_optional(&path).map_err(|source| StorageError::Read { path, source })
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if value.len() > self.quota_bytes {
            return Err(StorageError::QuotaExceeded {
                key: key.to_string(),
                size: value.len(),
                limit: self.quota_bytes,
            });
        }

        let path = self.path_for(key);
        if let Err(source) = fs::create_dir_all(&self.dir) {
            return Err(StorageError::Write { path, source });
        }
        atomic_write(&path, value).map_err(|source| StorageError::Write { path, source })?;
        tracing::debug!(key, bytes = value.len(), "wrote storage slot");
        Ok(())
    }
}
