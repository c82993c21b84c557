use crate::domain::{AppState, IdSource, Intent, Task, TaskId};
use crate::persistence::{load_persisted, persist_state, StorageError, StoragePort};

/// Result of applying one intent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: AppState,
    /// Whether the new state must be written to storage
    pub persist: bool,
}

/// Pure transition function.
///
/// Never mutates `state`; the returned state is always a fresh container.
pub fn apply(state: &AppState, intent: Intent, ids: &mut dyn IdSource) -> Transition {
    match intent {
        Intent::Add { payload } => {
            // The store is the only writer of ids; zero counts as unset
            if payload.id.is_some_and(|id| id != 0) {
                return Transition {
                    state: state.clone(),
                    persist: true,
                };
            }
            let accepted = payload.with_id(ids.next_id());
            let mut tasks = Vec::with_capacity(state.tasks.len() + 1);
            tasks.extend(state.tasks.iter().cloned());
            tasks.push(accepted);
            Transition {
                state: AppState::new(tasks),
                persist: true,
            }
        }
        Intent::Delete { payload } => {
            let tasks = state
                .tasks
                .iter()
                .filter(|task| task.id != payload.id)
                .cloned()
                .collect();
            Transition {
                state: AppState::new(tasks),
                persist: true,
            }
        }
        Intent::Reload { state: incoming } => Transition {
            state: incoming,
            persist: false,
        },
        Intent::Unrecognized => Transition {
            state: state.clone(),
            persist: false,
        },
    }
}

/// Owner of the in-memory task list and its persistence side effect
pub struct Store<P: StoragePort> {
    state: AppState,
    port: P,
    ids: Box<dyn IdSource>,
}

impl<P: StoragePort> Store<P> {
    /// Empty store. Does not read storage.
    pub fn new(port: P, ids: Box<dyn IdSource>) -> Self {
        Self {
            state: AppState::default(),
            port,
            ids,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Apply an intent and persist the result when the transition asks for it.
    ///
    /// In-memory state is replaced before the write; a write failure is
    /// returned to the caller as is.
    pub fn dispatch(&mut self, intent: Intent) -> Result<(), StorageError> {
        let kind = intent.kind();
        let Transition { state, persist } = apply(&self.state, intent, self.ids.as_mut());
        tracing::debug!(intent = kind, tasks = state.len(), persist, "applied intent");
        self.state = state;

        if persist {
            persist_state(&mut self.port, &self.state)?;
        }
        Ok(())
    }

    /// Delete every task with `id`, persisting even when none matches.
    ///
    /// Returns whether anything was removed.
    pub fn delete_by_id(&mut self, id: TaskId) -> Result<bool, StorageError> {
        let before = self.state.len();
        let task = self.state.find(id).cloned().unwrap_or_else(|| Task {
            description: String::new(),
            date: String::new(),
            id: Some(id),
        });
        self.dispatch(Intent::delete(task))?;
        Ok(self.state.len() != before)
    }

    /// Whatever is currently in durable storage.
    ///
    /// `Ok(None)` when nothing usable is stored; read failures propagate.
    pub fn read_persisted(&self) -> Result<Option<AppState>, StorageError> {
        load_persisted(&self.port)
    }
}
