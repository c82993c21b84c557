use super::error::StorageError;
use super::port::StoragePort;
use crate::domain::AppState;

/// Key of the slot holding the task list
pub const TASKS_KEY: &str = "tasks";

/// Serialize state into the slot format: `{"tasks":[...]}`
pub fn encode_state(state: &AppState) -> Result<String, StorageError> {
    Ok(serde_json::to_string(state)?)
}

/// Parse slot content. Malformed content is treated as absent.
pub fn decode_state(raw: &str) -> Option<AppState> {
    match serde_json::from_str(raw) {
        Ok(state) => Some(state),
        Err(e) => {
            tracing::debug!(error = %e, "ignoring malformed persisted state");
            None
        }
    }
}

/// Write the full state to the tasks slot
pub fn persist_state<P: StoragePort + ?Sized>(port: &mut P, state: &AppState) -> Result<(), StorageError> {
    let encoded = encode_state(state)?;
    port.write(TASKS_KEY, &encoded)
}

/// Read the persisted state.
///
/// A missing slot or unparsable content is `Ok(None)`; failing to read the
/// slot at all is an error.
pub fn load_persisted<P: StoragePort + ?Sized>(port: &P) -> Result<Option<AppState>, StorageError> {
    Ok(port.read(TASKS_KEY)?.and_then(|raw| decode_state(&raw)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Task;
    use crate::persistence::MemoryStorage;
    use pretty_assertions::assert_eq;

    fn sample_state() -> AppState {
        AppState::new(vec![
            Task {
                description: "Go for walk".to_string(),
                date: "2024-05-01T09:30:00.000Z".to_string(),
                id: Some(1234567),
            },
            Task {
                description: "Buy milk".to_string(),
                date: "2024-05-01T10:00:00.000Z".to_string(),
                id: Some(42),
            },
        ])
    }

    #[test]
    fn test_encoded_layout() {
        let encoded = encode_state(&sample_state()).unwrap();
        assert_eq!(
            encoded,
            r#"{"tasks":[{"description":"Go for walk","date":"2024-05-01T09:30:00.000Z","id":1234567},{"description":"Buy milk","date":"2024-05-01T10:00:00.000Z","id":42}]}"#
        );
    }

    #[test]
    fn test_persist_then_load() {
        let mut storage = MemoryStorage::new();
        persist_state(&mut storage, &sample_state()).unwrap();
        assert_eq!(load_persisted(&storage).unwrap(), Some(sample_state()));
    }

    #[test]
    fn test_missing_slot_is_none() {
        let storage = MemoryStorage::new();
        assert_eq!(load_persisted(&storage).unwrap(), None);
    }

    #[test]
    fn test_malformed_slot_is_none() {
        let storage = MemoryStorage::new();
        storage.put(TASKS_KEY, "{not json");
        assert_eq!(load_persisted(&storage).unwrap(), None);

        storage.put(TASKS_KEY, "undefined");
        assert_eq!(load_persisted(&storage).unwrap(), None);

        storage.put(TASKS_KEY, r#"{"items":[]}"#);
        assert_eq!(load_persisted(&storage).unwrap(), None);
    }

    #[test]
    fn test_unreadable_slot_is_error() {
        let storage = MemoryStorage::new();
        persist_state(&mut storage.clone(), &sample_state()).unwrap();
        storage.fail_reads(true);

        let err = load_persisted(&storage).unwrap_err();
        assert!(matches!(err, StorageError::Read { .. }));
    }

    #[test]
    fn test_decode_accepts_any_date_text() {
        let state = decode_state(r#"{"tasks":[{"description":"A","date":"yesterday","id":1}]}"#).unwrap();
        assert_eq!(state.tasks[0].date, "yesterday");
    }
}
