use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identifier assigned by the store when a task is accepted
pub type TaskId = u64;

/// User-facing validation failures raised by the input form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Need a description")]
    MissingDescription,
}

/// A single to-do item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub description: String,
    /// Creation time. Opaque text once read back from storage.
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<TaskId>,
}

impl Task {
    /// Build an unaccepted task (no id) created at `created`
    pub fn new(description: String, created: DateTime<Utc>) -> Self {
        Self {
            description,
            date: format_date(created),
            id: None,
        }
    }

    /// Build a task from raw form input.
    ///
    /// The text is not trimmed; only its first character is uppercased.
    /// Empty input is rejected.
    pub fn draft(raw: &str, created: DateTime<Utc>) -> Result<Self, ValidationError> {
        let description = capitalize_first(raw);
        if description.is_empty() {
            return Err(ValidationError::MissingDescription);
        }
        Ok(Self::new(description, created))
    }

    /// Copy of this task carrying the given id
    pub fn with_id(&self, id: TaskId) -> Self {
        Self {
            id: Some(id),
            ..self.clone()
        }
    }

    /// Serialize the task as a row snapshot for a delete control
    pub fn snapshot(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Parse a row snapshot back into a task
    pub fn from_snapshot(snapshot: &str) -> Option<Self> {
        serde_json::from_str(snapshot).ok()
    }
}

/// Uppercase the first character, leaving the rest untouched
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Timestamp format used for `Task::date` (e.g. "2024-05-01T09:30:00.000Z")
pub fn format_date(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at_nine() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap()
    }

    #[test]
    fn test_capitalize_first() {
        assert_eq!(capitalize_first("go for walk"), "Go for walk");
        assert_eq!(capitalize_first("Already"), "Already");
        assert_eq!(capitalize_first(""), "");
        assert_eq!(capitalize_first("éclair"), "Éclair");
    }

    #[test]
    fn test_capitalize_keeps_whitespace() {
        assert_eq!(capitalize_first("  padded "), "  padded ");
    }

    #[test]
    fn test_draft_rejects_empty() {
        let err = Task::draft("", at_nine()).unwrap_err();
        assert_eq!(err, ValidationError::MissingDescription);
        assert_eq!(err.to_string(), "Need a description");
    }

    #[test]
    fn test_draft_has_no_id() {
        let task = Task::draft("buy milk", at_nine()).unwrap();
        assert_eq!(task.description, "Buy milk");
        assert_eq!(task.date, "2024-05-01T09:30:00.000Z");
        assert!(task.id.is_none());
    }

    #[test]
    fn test_unaccepted_task_omits_id_field() {
        let task = Task::new("Walk".to_string(), at_nine());
        let json = serde_json::to_string(&task).unwrap();
        assert!(!json.contains("\"id\""));
    }

    #[test]
    fn test_snapshot_parses_back() {
        let task = Task::new("Walk".to_string(), at_nine()).with_id(42);
        let parsed = Task::from_snapshot(&task.snapshot()).unwrap();
        assert_eq!(parsed, task);
    }

    #[test]
    fn test_bad_snapshot() {
        assert!(Task::from_snapshot("not json").is_none());
        assert!(Task::from_snapshot("").is_none());
    }
}
