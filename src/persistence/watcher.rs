use anyhow::{Context, Result};
use notify::event::EventKind;
use notify::{Event, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, TryRecvError};

/// Subscription to changes of one storage slot file.
///
/// Watches the slot's directory (writes land via rename, which replaces the
/// file) and keeps only events touching the slot. Dropping the watcher
/// unsubscribes.
pub struct StorageWatcher {
    slot: PathBuf,
    events: Receiver<notify::Result<Event>>,
    _watcher: RecommendedWatcher,
}

impl StorageWatcher {
    pub fn subscribe(slot: &Path) -> Result<Self> {
        let dir = slot
            .parent()
            .context("Storage slot path has no parent directory")?
            .to_path_buf();

        let (event_tx, events) = mpsc::channel();
        let mut watcher = notify::recommended_watcher(move |res| {
            let _ = event_tx.send(res);
        })
        .context("Failed to create file watcher")?;

        watcher
            .watch(&dir, RecursiveMode::NonRecursive)
            .with_context(|| format!("Failed to watch {}", dir.display()))?;
        tracing::info!(dir = %dir.display(), "subscribed to storage changes");

        Ok(Self {
            slot: slot.to_path_buf(),
            events,
            _watcher: watcher,
        })
    }

    /// Drain pending events; true when at least one touched the slot.
    ///
    /// Several events between two calls collapse into a single notification.
    pub fn poll_changed(&self) -> bool {
        let mut changed = false;
        loop {
            match self.events.try_recv() {
                Ok(Ok(event)) => changed |= is_slot_event(&event, &self.slot),
                Ok(Err(err)) => tracing::warn!(error = %err, "storage watcher error"),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        changed
    }
}

/// Whether `event` is a modification of `slot`
pub fn is_slot_event(event: &Event, slot: &Path) -> bool {
    let relevant_kind = matches!(
        event.kind,
        EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_)
    );
    relevant_kind
        && event
            .paths
            .iter()
            .any(|path| path.file_name().is_some() && path.file_name() == slot.file_name())
}
