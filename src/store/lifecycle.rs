//! Task lifecycle rules
//!
//! Defaulting, patch merge, reorder, and the statistics recomputation pass.
//! These run against the store state while its write lock is held, which is
//! what makes each store call atomic for readers.
//!
//! Cross-entity integrity is deliberately NOT enforced here: a task's
//! `category_id` is never validated against the category collection, and
//! deleting a category leaves referencing tasks with a dangling id.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::memory::StoreInner;
use crate::model::{NewTask, StatsPatch, Task, TaskPatch, UserStats};

/// Materialize a task from a create payload, filling defaults
pub(crate) fn build_task(user_id: &str, data: NewTask, now: DateTime<Utc>) -> Task {
    Task {
        id: Uuid::new_v4().to_string(),
        title: data.title,
        description: data.description,
        completed: data.completed.unwrap_or(false),
        priority: data.priority.unwrap_or_default(),
        category_id: data.category_id,
        progress: data.progress.unwrap_or(0),
        due_time: data.due_time,
        position: data.position.unwrap_or(0),
        user_id: user_id.to_string(),
        created_at: now,
        updated_at: now,
    }
}

/// Merge a partial patch over a task, stamping `updated_at`
///
/// Double-`Option` fields: an outer `Some` carries the new value, which may
/// itself be `None` to clear the field.
pub(crate) fn apply_task_patch(task: &mut Task, patch: TaskPatch, now: DateTime<Utc>) {
    if let Some(title) = patch.title {
        task.title = title;
    }
    if let Some(description) = patch.description {
        task.description = description;
    }
    if let Some(completed) = patch.completed {
        task.completed = completed;
    }
    if let Some(priority) = patch.priority {
        task.priority = priority;
    }
    if let Some(category_id) = patch.category_id {
        task.category_id = category_id;
    }
    if let Some(progress) = patch.progress {
        task.progress = progress;
    }
    if let Some(due_time) = patch.due_time {
        task.due_time = due_time;
    }
    if let Some(position) = patch.position {
        task.position = position;
    }
    task.updated_at = now;
}

/// Assign dense positions following the given id order
///
/// Ids without a stored task are skipped. Tasks not named in the sequence
/// keep their old position; there is no normalization pass afterwards.
pub(crate) fn apply_reorder(inner: &mut StoreInner, ordered_ids: &[String]) {
    for (index, id) in ordered_ids.iter().enumerate() {
        if let Some(task) = inner.tasks.get_mut(id) {
            task.position = index as i32;
        }
    }
}

/// Merge a stats patch, creating a zeroed record on first write
pub(crate) fn merge_user_stats(
    inner: &mut StoreInner,
    user_id: &str,
    patch: StatsPatch,
) -> UserStats {
    let stats = inner
        .user_stats
        .entry(user_id.to_string())
        .or_insert_with(|| UserStats::empty(Uuid::new_v4().to_string(), user_id.to_string()));

    if let Some(current_streak) = patch.current_streak {
        stats.current_streak = current_streak;
    }
    if let Some(total_tasks) = patch.total_tasks {
        stats.total_tasks = total_tasks;
    }
    if let Some(completed_tasks) = patch.completed_tasks {
        stats.completed_tasks = completed_tasks;
    }
    if let Some(weekly_progress) = patch.weekly_progress {
        stats.weekly_progress = weekly_progress;
    }
    if let Some(last_active_date) = patch.last_active_date {
        stats.last_active_date = Some(last_active_date);
    }
    stats.clone()
}

/// Statistics recomputation pass
///
/// Recomputes `total_tasks` and `completed_tasks` from the user's task set
/// and stamps `last_active_date`. Runs after every task create, delete, or
/// completion-state patch. `current_streak` and `weekly_progress` are left
/// untouched.
pub(crate) fn refresh_user_stats(inner: &mut StoreInner, user_id: &str, now: DateTime<Utc>) {
    let total_tasks = inner
        .tasks
        .values()
        .filter(|t| t.user_id == user_id)
        .count() as i32;
    let completed_tasks = inner
        .tasks
        .values()
        .filter(|t| t.user_id == user_id && t.completed)
        .count() as i32;

    merge_user_stats(
        inner,
        user_id,
        StatsPatch {
            total_tasks: Some(total_tasks),
            completed_tasks: Some(completed_tasks),
            last_active_date: Some(now),
            ..Default::default()
        },
    );
}
