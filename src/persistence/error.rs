use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures of the durable storage port
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to read storage slot {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write storage slot {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to serialize state: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Storage quota exceeded for slot '{key}': {size} bytes > {limit} bytes")]
    QuotaExceeded { key: String, size: usize, limit: usize },
}
