//! Todo Entity
//!
//! One row of the `todos` table, owned by exactly one identity.

use std::fmt;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Store-assigned row identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(pub i64);

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A todo row as returned by the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: TodoId,
    pub task: String,
    #[serde(default)]
    pub is_complete: bool,
    pub user_id: Uuid,
    /// Assigned by the store, only used for ordering. Columns without a
    /// time zone are read as UTC; unreadable values become `None`.
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub inserted_at: Option<DateTime<Utc>>,
}

fn lenient_timestamp<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error> {
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_timestamp))
}

/// Parse `timestamptz` or plain `timestamp` text as sent by the REST layer
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|t| t.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
                .map(|naive| naive.and_utc())
        })
}

/// Insert payload; the store fills in `id` and `inserted_at`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTodo {
    pub task: String,
    pub user_id: Uuid,
    pub is_complete: bool,
}

impl NewTodo {
    pub fn new(task: impl Into<String>, user_id: Uuid) -> Self {
        Self {
            task: task.into(),
            user_id,
            is_complete: false,
        }
    }
}

/// Partial update; only present fields are sent
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TodoPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_complete: Option<bool>,
}

impl TodoPatch {
    pub fn task(task: impl Into<String>) -> Self {
        Self {
            task: Some(task.into()),
            ..Default::default()
        }
    }

    pub fn completion(is_complete: bool) -> Self {
        Self {
            is_complete: Some(is_complete),
            ..Default::default()
        }
    }
}
