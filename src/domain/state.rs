use super::task::{Task, TaskId};
use serde::{Deserialize, Serialize};

/// The whole persisted application state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    pub tasks: Vec<Task>,
}

impl AppState {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// First task carrying `id`, if any
    pub fn find(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == Some(id))
    }
}

/// A named request to change state.
///
/// Serialized form is tagged by `type`, e.g.
/// `{"type":"add","payload":{"description":"Walk","date":"..."}}`.
/// Unknown tags parse to `Unrecognized`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Intent {
    Add { payload: Task },
    Delete { payload: Task },
    Reload { state: AppState },
    #[serde(other)]
    Unrecognized,
}

impl Intent {
    pub fn add(task: Task) -> Self {
        Self::Add { payload: task }
    }

    pub fn delete(task: Task) -> Self {
        Self::Delete { payload: task }
    }

    pub fn reload(state: AppState) -> Self {
        Self::Reload { state }
    }

    /// Short name for logging
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Add { .. } => "add",
            Self::Delete { .. } => "delete",
            Self::Reload { .. } => "reload",
            Self::Unrecognized => "unrecognized",
        }
    }
}
