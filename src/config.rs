use crate::persistence::{resolve_data_dir, slot_path, TASKS_KEY};
use crate::sync::SyncPolicy;
use anyhow::{Context, Result};
use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default event-loop tick in milliseconds
pub const DEFAULT_TICK_MS: u64 = 250;

/// Name of the log file written in TUI mode
pub const LOG_FILE_NAME: &str = "todo.log";

/// Resolved runtime settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub data_dir: PathBuf,
    pub sync_policy: SyncPolicy,
    pub tick_rate: Duration,
    pub quota_bytes: usize,
}

impl Settings {
    pub fn resolve(
        dir: Option<PathBuf>,
        sync_policy: SyncPolicy,
        tick_ms: u64,
        quota_bytes: usize,
    ) -> Result<Self> {
        let current_dir = std::env::current_dir().context("Could not determine current directory")?;
        let data_dir = resolve_data_dir(dir, &current_dir)?;

        Ok(Self {
            data_dir,
            sync_policy,
            // A zero tick would spin the event loop
            tick_rate: Duration::from_millis(tick_ms.max(1)),
            quota_bytes,
        })
    }

    pub fn tasks_path(&self) -> PathBuf {
        slot_path(&self.data_dir, TASKS_KEY)
    }

    pub fn log_path(&self) -> PathBuf {
        self.data_dir.join(LOG_FILE_NAME)
    }
}

/// Open the log file for appending, creating it if needed
pub fn open_log_file(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::DEFAULT_QUOTA_BYTES;

    #[test]
    fn test_resolve_explicit_dir() {
        let temp_dir = tempfile::tempdir().unwrap();
        let settings = Settings::resolve(
            Some(temp_dir.path().to_path_buf()),
            SyncPolicy::Content,
            100,
            1024,
        )
        .unwrap();

        assert_eq!(settings.data_dir, temp_dir.path());
        assert_eq!(settings.sync_policy, SyncPolicy::Content);
        assert_eq!(settings.tick_rate, Duration::from_millis(100));
        assert_eq!(settings.tasks_path(), temp_dir.path().join("tasks.json"));
        assert_eq!(settings.log_path(), temp_dir.path().join("todo.log"));
    }

    #[test]
    fn test_zero_tick_is_clamped() {
        let temp_dir = tempfile::tempdir().unwrap();
        let settings =
            Settings::resolve(Some(temp_dir.path().to_path_buf()), SyncPolicy::Count, 0, 1).unwrap();
        assert_eq!(settings.tick_rate, Duration::from_millis(1));
    }

    #[test]
    fn test_resolve_with_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        let settings = Settings::resolve(
            Some(temp_dir.path().to_path_buf()),
            SyncPolicy::default(),
            DEFAULT_TICK_MS,
            DEFAULT_QUOTA_BYTES,
        )
        .unwrap();

        assert_eq!(settings.tick_rate, Duration::from_millis(250));
        assert_eq!(settings.quota_bytes, 5 * 1024 * 1024);
        assert_eq!(settings.sync_policy, SyncPolicy::Count);
    }

    #[test]
    fn test_open_log_file_appends() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join(LOG_FILE_NAME);

        std::fs::write(&path, "first\n").unwrap();
        let mut file = open_log_file(&path).unwrap();
        std::io::Write::write_all(&mut file, b"second\n").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "first\nsecond\n");
    }

    #[test]
    fn test_open_log_file_in_missing_dir_fails() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("missing").join(LOG_FILE_NAME);
        assert!(open_log_file(&path).is_err());
    }
}
