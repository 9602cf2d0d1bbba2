//! Demo data seeding
//!
//! Gives a fresh store something to show: a few categories and a seeded
//! stats record for the fixed user. The streak and weekly-progress figures
//! here are the only place those values ever come from; task mutations
//! preserve them as-is.

use chrono::Utc;

use super::Storage;
use crate::model::{CategoryColor, NewCategory, StatsPatch, WeeklyProgress};
use crate::types::Result;

const DEMO_CATEGORIES: &[(&str, CategoryColor)] = &[
    ("Work", CategoryColor::Blue),
    ("Personal", CategoryColor::Green),
    ("Learning", CategoryColor::Purple),
];

const DEMO_WEEKLY_PROGRESS: &[(&str, u8)] = &[
    ("Monday", 100),
    ("Tuesday", 80),
    ("Wednesday", 70),
    ("Thursday", 0),
    ("Friday", 0),
    ("Saturday", 0),
    ("Sunday", 0),
];

/// Seed demo categories and a stats record for the given user
pub async fn seed_demo_data(store: &dyn Storage, user_id: &str) -> Result<()> {
    for (name, color) in DEMO_CATEGORIES {
        store
            .create_category(
                user_id,
                NewCategory {
                    name: (*name).to_string(),
                    color: *color,
                },
            )
            .await?;
    }

    let weekly: WeeklyProgress = DEMO_WEEKLY_PROGRESS
        .iter()
        .map(|(day, pct)| ((*day).to_string(), *pct))
        .collect();

    store
        .update_user_stats(
            user_id,
            StatsPatch {
                current_streak: Some(12),
                total_tasks: Some(0),
                completed_tasks: Some(0),
                weekly_progress: Some(weekly),
                last_active_date: Some(Utc::now()),
            },
        )
        .await?;

    Ok(())
}
