// Persisted snapshot format: a bare JSON array of tasks

use crate::error::{Error, Result};
use crate::task::Task;
use std::collections::HashSet;

/// Encode the full task sequence, newest first
///
/// The array carries no envelope, version tag, or checksum; array order is
/// in-memory order.
pub fn encode(tasks: &[Task]) -> Result<String> {
    serde_json::to_string(tasks).map_err(|e| Error::SnapshotWrite(std::io::Error::other(e)))
}

/// Decode a previously written snapshot
///
/// Anything that does not decode as a task list is reported as corrupt. That
/// includes structurally valid JSON whose content would break the store's
/// invariants (empty text, duplicate ids).
pub fn decode(raw: &str) -> Result<Vec<Task>> {
    let tasks: Vec<Task> =
        serde_json::from_str(raw).map_err(|e| Error::CorruptSnapshot(e.to_string()))?;

    let mut seen = HashSet::new();
    for task in &tasks {
        if task.text.trim().is_empty() {
            return Err(Error::CorruptSnapshot(format!("task {} has empty text", task.id)));
        }
        if !seen.insert(task.id) {
            return Err(Error::CorruptSnapshot(format!("duplicate task id {}", task.id)));
        }
    }

    Ok(tasks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_tasks() -> Vec<Task> {
        vec![
            Task {
                id: 2000,
                text: "Walk dog".to_string(),
                completed: false,
                created_at: Utc::now(),
            },
            Task {
                id: 1000,
                text: "Buy milk".to_string(),
                completed: true,
                created_at: Utc::now(),
            },
        ]
    }

    #[test]
    fn test_round_trip_preserves_tasks_and_order() {
        let tasks = sample_tasks();

        let encoded = encode(&tasks).unwrap();
        let decoded = decode(&encoded).unwrap();
        assert_eq!(decoded, tasks);
    }

    #[test]
    fn test_decode_empty_array() {
        assert_eq!(decode("[]").unwrap(), Vec::<Task>::new());
    }

    #[test]
    fn test_decode_rejects_non_json() {
        let err = decode("definitely not json").unwrap_err();
        assert!(matches!(err, Error::CorruptSnapshot(_)));
    }

    #[test]
    fn test_decode_rejects_wrong_shape() {
        // Valid JSON, but not an array of tasks
        let err = decode(r#"{"tasks":[]}"#).unwrap_err();
        assert!(matches!(err, Error::CorruptSnapshot(_)));
    }

    #[test]
    fn test_decode_rejects_empty_text() {
        let raw = r#"[{"id":1,"text":"   ","completed":false,"createdAt":"2025-01-06T12:00:00Z"}]"#;
        let err = decode(raw).unwrap_err();
        assert!(matches!(err, Error::CorruptSnapshot(_)));
    }

    #[test]
    fn test_decode_rejects_duplicate_ids() {
        let raw = r#"[
            {"id":7,"text":"a","completed":false,"createdAt":"2025-01-06T12:00:00Z"},
            {"id":7,"text":"b","completed":true,"createdAt":"2025-01-06T12:00:01Z"}
        ]"#;
        let err = decode(raw).unwrap_err();
        assert!(matches!(err, Error::CorruptSnapshot(_)));
    }

    #[test]
    fn test_decode_snapshot_from_other_producer() {
        // Shape as written by a browser-side producer of the same format
        let raw = r#"[{"id":1736160000000,"text":"Buy milk","completed":false,"createdAt":"2025-01-06T12:00:00.000Z"}]"#;

        let tasks = decode(raw).unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].id, 1736160000000);
        assert_eq!(tasks[0].text, "Buy milk");
        assert!(!tasks[0].completed);
    }
}
