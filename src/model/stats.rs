//! Per-user statistics entity
//!
//! `total_tasks`, `completed_tasks`, and `last_active_date` are a derived
//! projection of the user's task set, refreshed after every task create,
//! delete, or completion change. `current_streak` and `weekly_progress` are
//! seeded display figures: task mutations never touch them, only the
//! stats-update path does.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Weekday name to 0-100 completion percentage
pub type WeeklyProgress = HashMap<String, u8>;

/// Statistics record, one per user
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub id: String,
    pub user_id: String,
    pub current_streak: i32,
    pub total_tasks: i32,
    pub completed_tasks: i32,
    pub weekly_progress: WeeklyProgress,
    pub last_active_date: Option<DateTime<Utc>>,
}

impl UserStats {
    /// Zero-valued record, created lazily on first write for a user
    pub fn empty(id: String, user_id: String) -> Self {
        Self {
            id,
            user_id,
            current_streak: 0,
            total_tasks: 0,
            completed_tasks: 0,
            weekly_progress: WeeklyProgress::new(),
            last_active_date: None,
        }
    }
}

/// Partial update for a stats record
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StatsPatch {
    pub current_streak: Option<i32>,
    pub total_tasks: Option<i32>,
    pub completed_tasks: Option<i32>,
    pub weekly_progress: Option<WeeklyProgress>,
    pub last_active_date: Option<DateTime<Utc>>,
}
