// Task model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single to-do entry
///
/// The serialized form uses exactly these four fields, with `createdAt` as an
/// ISO-8601 timestamp string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: i64,
    pub text: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}
