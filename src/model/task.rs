//! Task entity and its create/patch payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Deserialize a nullable patch field into a double `Option`.
///
/// serde collapses an explicit JSON `null` to the outer `None` for
/// `Option<Option<T>>`; this helper preserves the distinction so an explicit
/// `null` becomes `Some(None)` (clear) while an absent key stays `None`.
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Ok(Some(Option::deserialize(deserializer)?))
}

/// Task priority
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

/// Task entity
///
/// `position` determines display order among a user's tasks. Values are not
/// unique; the reorder operation assigns dense 0..n-1 values to the ids it
/// is handed and leaves everything else alone.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
    pub priority: Priority,
    pub category_id: Option<String>,
    pub progress: i32,
    pub due_time: Option<String>,
    pub position: i32,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request body for task creation
///
/// Only `title` is required; the store fills defaults for the rest. The
/// server assigns `id`, timestamps, and the owning user, so client-supplied
/// values for those are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub completed: Option<bool>,
    #[serde(default)]
    pub priority: Option<Priority>,
    #[serde(default)]
    pub category_id: Option<String>,
    #[serde(default)]
    pub progress: Option<i32>,
    #[serde(default)]
    pub due_time: Option<String>,
    #[serde(default)]
    pub position: Option<i32>,
}

/// Partial patch for task update
///
/// Absent fields leave the record untouched. The nullable fields use a
/// double `Option` so an explicit JSON `null` clears the value while an
/// absent key means "no change".
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TaskPatch {
    pub title: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    pub completed: Option<bool>,
    pub priority: Option<Priority>,
    #[serde(default, deserialize_with = "double_option")]
    pub category_id: Option<Option<String>>,
    pub progress: Option<i32>,
    #[serde(default, deserialize_with = "double_option")]
    pub due_time: Option<Option<String>>,
    pub position: Option<i32>,
}
