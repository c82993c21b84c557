pub mod codec;
pub mod error;
pub mod files;
#[cfg(test)]
pub mod memory;
pub mod port;
pub mod watcher;

pub use codec::{encode_state, load_persisted, persist_state, TASKS_KEY};
pub use error::StorageError;
pub use files::{ensure_dir, init_local_dir, resolve_data_dir, slot_path};
#[cfg(test)]
pub use memory::MemoryStorage;
pub use port::{FileStorage, StoragePort, DEFAULT_QUOTA_BYTES};
pub use watcher::StorageWatcher;
