use crate::domain::AppState;
use clap::ValueEnum;

/// How a session decides that another session changed the persisted list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum SyncPolicy {
    /// Reload only when the task counts differ. Misses same-count edits.
    #[default]
    Count,
    /// Reload whenever the persisted list differs in any way
    Content,
}

impl SyncPolicy {
    pub fn needs_reload(self, current: &AppState, persisted: &AppState) -> bool {
        match self {
            Self::Count => current.len() != persisted.len(),
            Self::Content => current != persisted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Task;

    fn state(ids: &[u64]) -> AppState {
        AppState::new(
            ids.iter()
                .map(|id| Task {
                    description: format!("Task {}", id),
                    date: "2024-05-01T09:30:00.000Z".to_string(),
                    id: Some(*id),
                })
                .collect(),
        )
    }

    #[test]
    fn test_count_policy() {
        assert!(SyncPolicy::Count.needs_reload(&state(&[]), &state(&[1])));
        assert!(SyncPolicy::Count.needs_reload(&state(&[1, 2]), &state(&[1])));
        assert!(!SyncPolicy::Count.needs_reload(&state(&[1]), &state(&[1])));
    }

    #[test]
    fn test_count_policy_misses_same_count_edit() {
        // Another session deleted 1 and added 3
        assert!(!SyncPolicy::Count.needs_reload(&state(&[1, 2]), &state(&[2, 3])));
    }

    #[test]
    fn test_content_policy_catches_same_count_edit() {
        assert!(SyncPolicy::Content.needs_reload(&state(&[1, 2]), &state(&[2, 3])));
        assert!(!SyncPolicy::Content.needs_reload(&state(&[1, 2]), &state(&[1, 2])));
    }

    #[test]
    fn test_default_is_count() {
        assert_eq!(SyncPolicy::default(), SyncPolicy::Count);
    }
}
