//! In-memory entity store
//!
//! A single `RwLock` guards all three collections, so every operation —
//! including its statistics recomputation — is one atomic critical section.
//! Concurrent updates to the same task serialize last-write-wins on the
//! whole record.

use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::lifecycle;
use super::Storage;
use crate::model::{Category, NewCategory, NewTask, StatsPatch, Task, TaskPatch, UserStats};
use crate::types::{Result, TaskdeckError};

/// The collections behind the store lock
///
/// Categories keep insertion order; tasks and stats are keyed by id and
/// user id respectively.
#[derive(Default)]
pub(crate) struct StoreInner {
    pub(crate) categories: Vec<Category>,
    pub(crate) tasks: HashMap<String, Task>,
    pub(crate) user_stats: HashMap<String, UserStats>,
}

/// In-memory [`Storage`] implementation
pub struct MemStore {
    inner: RwLock<StoreInner>,
}

impl MemStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(StoreInner::default()),
        }
    }
}

impl Default for MemStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl Storage for MemStore {
    async fn list_categories(&self, user_id: &str) -> Result<Vec<Category>> {
        let inner = self.inner.read().await;
        Ok(inner
            .categories
            .iter()
            .filter(|c| c.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn create_category(&self, user_id: &str, data: NewCategory) -> Result<Category> {
        let mut inner = self.inner.write().await;
        let category = Category {
            id: Uuid::new_v4().to_string(),
            name: data.name,
            color: data.color,
            user_id: user_id.to_string(),
        };
        inner.categories.push(category.clone());
        Ok(category)
    }

    async fn delete_category(&self, id: &str) -> Result<()> {
        let mut inner = self.inner.write().await;
        // Absent ids fall through silently; referencing tasks are untouched.
        inner.categories.retain(|c| c.id != id);
        Ok(())
    }

    async fn list_tasks(&self, user_id: &str) -> Result<Vec<Task>> {
        let inner = self.inner.read().await;
        let mut tasks: Vec<Task> = inner
            .tasks
            .values()
            .filter(|t| t.user_id == user_id)
            .cloned()
            .collect();
        tasks.sort_by_key(|t| t.position);
        Ok(tasks)
    }

    async fn get_task(&self, id: &str) -> Result<Option<Task>> {
        let inner = self.inner.read().await;
        Ok(inner.tasks.get(id).cloned())
    }

    async fn create_task(&self, user_id: &str, data: NewTask) -> Result<Task> {
        let mut inner = self.inner.write().await;
        let now = Utc::now();
        let task = lifecycle::build_task(user_id, data, now);
        inner.tasks.insert(task.id.clone(), task.clone());
        lifecycle::refresh_user_stats(&mut inner, user_id, now);
        Ok(task)
    }

    async fn update_task(&self, id: &str, patch: TaskPatch) -> Result<Task> {
        let mut inner = self.inner.write().await;
        let now = Utc::now();
        let completion_touched = patch.completed.is_some();

        let task = inner
            .tasks
            .get_mut(id)
            .ok_or_else(|| TaskdeckError::NotFound(format!("task {}", id)))?;
        lifecycle::apply_task_patch(task, patch, now);
        let updated = task.clone();

        if completion_touched {
            lifecycle::refresh_user_stats(&mut inner, &updated.user_id, now);
        }
        Ok(updated)
    }

    async fn delete_task(&self, id: &str) -> Result<()> {
        let mut inner = self.inner.write().await;
        if let Some(task) = inner.tasks.remove(id) {
            lifecycle::refresh_user_stats(&mut inner, &task.user_id, Utc::now());
        }
        Ok(())
    }

    async fn reorder_tasks(&self, ordered_ids: &[String]) -> Result<()> {
        let mut inner = self.inner.write().await;
        lifecycle::apply_reorder(&mut inner, ordered_ids);
        Ok(())
    }

    async fn get_user_stats(&self, user_id: &str) -> Result<Option<UserStats>> {
        let inner = self.inner.read().await;
        Ok(inner.user_stats.get(user_id).cloned())
    }

    async fn update_user_stats(&self, user_id: &str, patch: StatsPatch) -> Result<UserStats> {
        let mut inner = self.inner.write().await;
        Ok(lifecycle::merge_user_stats(&mut inner, user_id, patch))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CategoryColor, Priority, WeeklyProgress};
    use std::time::Duration;

    const USER: &str = "demo-user";

    fn title_only(title: &str) -> NewTask {
        NewTask {
            title: title.to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn create_task_fills_defaults_and_counts_it() {
        let store = MemStore::new();
        let task = store.create_task(USER, title_only("Buy milk")).await.unwrap();

        assert!(!task.completed);
        assert_eq!(task.priority, Priority::Medium);
        assert_eq!(task.progress, 0);
        assert!(task.category_id.is_none());

        let stats = store.get_user_stats(USER).await.unwrap().unwrap();
        assert_eq!(stats.total_tasks, 1);
        assert_eq!(stats.completed_tasks, 0);
    }

    #[tokio::test]
    async fn stats_track_task_count_across_create_and_delete() {
        let store = MemStore::new();
        let mut ids = Vec::new();
        for title in ["a", "b", "c"] {
            ids.push(store.create_task(USER, title_only(title)).await.unwrap().id);
        }
        assert_eq!(
            store.get_user_stats(USER).await.unwrap().unwrap().total_tasks,
            3
        );

        store.delete_task(&ids[0]).await.unwrap();
        assert_eq!(
            store.get_user_stats(USER).await.unwrap().unwrap().total_tasks,
            2
        );
    }

    #[tokio::test]
    async fn completion_toggle_round_trips_completed_count() {
        let store = MemStore::new();
        let task = store.create_task(USER, title_only("a")).await.unwrap();
        store.create_task(USER, title_only("b")).await.unwrap();

        let patch: TaskPatch = serde_json::from_str(r#"{"completed":true}"#).unwrap();
        store.update_task(&task.id, patch).await.unwrap();
        let stats = store.get_user_stats(USER).await.unwrap().unwrap();
        assert_eq!(stats.completed_tasks, 1);
        assert_eq!(stats.total_tasks, 2);

        let patch: TaskPatch = serde_json::from_str(r#"{"completed":false}"#).unwrap();
        store.update_task(&task.id, patch).await.unwrap();
        let stats = store.get_user_stats(USER).await.unwrap().unwrap();
        assert_eq!(stats.completed_tasks, 0);
        assert_eq!(stats.total_tasks, 2);
    }

    #[tokio::test]
    async fn completion_patch_advances_updated_at_and_last_active() {
        let store = MemStore::new();
        let task = store.create_task(USER, title_only("a")).await.unwrap();

        // Coarse clocks could otherwise stamp the same instant twice.
        tokio::time::sleep(Duration::from_millis(5)).await;

        let patch: TaskPatch = serde_json::from_str(r#"{"completed":true}"#).unwrap();
        let updated = store.update_task(&task.id, patch).await.unwrap();
        assert!(updated.updated_at > task.updated_at);
        assert!(updated.updated_at > task.created_at);

        let stats = store.get_user_stats(USER).await.unwrap().unwrap();
        assert_eq!(stats.last_active_date, Some(updated.updated_at));
    }

    #[tokio::test]
    async fn patch_merges_only_provided_fields() {
        let store = MemStore::new();
        let task = store
            .create_task(
                USER,
                NewTask {
                    title: "Write report".to_string(),
                    description: Some("first draft".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let patch: TaskPatch = serde_json::from_str(r#"{"progress":60}"#).unwrap();
        let updated = store.update_task(&task.id, patch).await.unwrap();
        assert_eq!(updated.progress, 60);
        assert_eq!(updated.description.as_deref(), Some("first draft"));

        let patch: TaskPatch = serde_json::from_str(r#"{"description":null}"#).unwrap();
        let updated = store.update_task(&task.id, patch).await.unwrap();
        assert!(updated.description.is_none());
        assert_eq!(updated.progress, 60);
    }

    #[tokio::test]
    async fn update_of_absent_id_is_not_found() {
        let store = MemStore::new();
        let result = store.update_task("missing", TaskPatch::default()).await;
        assert!(matches!(result, Err(TaskdeckError::NotFound(_))));
    }

    #[tokio::test]
    async fn reorder_follows_given_id_order() {
        let store = MemStore::new();
        let a = store.create_task(USER, title_only("a")).await.unwrap();
        let b = store.create_task(USER, title_only("b")).await.unwrap();

        store
            .reorder_tasks(&[b.id.clone(), a.id.clone()])
            .await
            .unwrap();

        let tasks = store.list_tasks(USER).await.unwrap();
        assert_eq!(tasks[0].id, b.id);
        assert_eq!(tasks[0].position, 0);
        assert_eq!(tasks[1].id, a.id);
        assert_eq!(tasks[1].position, 1);
    }

    #[tokio::test]
    async fn reorder_leaves_omitted_tasks_alone() {
        let store = MemStore::new();
        let kept = store
            .create_task(
                USER,
                NewTask {
                    title: "pinned".to_string(),
                    position: Some(7),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        let moved = store.create_task(USER, title_only("moved")).await.unwrap();

        store
            .reorder_tasks(&[moved.id.clone(), "unknown-id".to_string()])
            .await
            .unwrap();

        assert_eq!(store.get_task(&moved.id).await.unwrap().unwrap().position, 0);
        assert_eq!(store.get_task(&kept.id).await.unwrap().unwrap().position, 7);
    }

    #[tokio::test]
    async fn deleting_absent_task_is_a_silent_no_op() {
        let store = MemStore::new();
        store.create_task(USER, title_only("a")).await.unwrap();
        let before = store.get_user_stats(USER).await.unwrap().unwrap();

        store.delete_task("missing").await.unwrap();

        assert_eq!(store.list_tasks(USER).await.unwrap().len(), 1);
        let after = store.get_user_stats(USER).await.unwrap().unwrap();
        assert_eq!(after.last_active_date, before.last_active_date);
    }

    #[tokio::test]
    async fn deleting_category_leaves_dangling_references() {
        let store = MemStore::new();
        let category = store
            .create_category(
                USER,
                NewCategory {
                    name: "Work".to_string(),
                    color: CategoryColor::Blue,
                },
            )
            .await
            .unwrap();
        let task = store
            .create_task(
                USER,
                NewTask {
                    title: "Write report".to_string(),
                    category_id: Some(category.id.clone()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        store.delete_category(&category.id).await.unwrap();
        // Delete again: absent id, still fine.
        store.delete_category(&category.id).await.unwrap();

        assert!(store.list_categories(USER).await.unwrap().is_empty());
        let task = store.get_task(&task.id).await.unwrap().unwrap();
        assert_eq!(task.category_id, Some(category.id));
    }

    #[tokio::test]
    async fn categories_list_in_insertion_order_per_user() {
        let store = MemStore::new();
        for (name, color) in [
            ("Work", CategoryColor::Blue),
            ("Personal", CategoryColor::Green),
        ] {
            store
                .create_category(
                    USER,
                    NewCategory {
                        name: name.to_string(),
                        color,
                    },
                )
                .await
                .unwrap();
        }
        store
            .create_category(
                "someone-else",
                NewCategory {
                    name: "Hidden".to_string(),
                    color: CategoryColor::Red,
                },
            )
            .await
            .unwrap();

        let names: Vec<String> = store
            .list_categories(USER)
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, ["Work", "Personal"]);
    }

    #[tokio::test]
    async fn stats_update_lazily_creates_a_zeroed_record() {
        let store = MemStore::new();
        assert!(store.get_user_stats(USER).await.unwrap().is_none());

        let stats = store
            .update_user_stats(
                USER,
                StatsPatch {
                    current_streak: Some(5),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(stats.current_streak, 5);
        assert_eq!(stats.total_tasks, 0);
        assert!(stats.last_active_date.is_none());
    }

    #[tokio::test]
    async fn task_mutations_never_touch_seeded_figures() {
        let store = MemStore::new();
        let mut weekly = WeeklyProgress::new();
        weekly.insert("Monday".to_string(), 100);
        store
            .update_user_stats(
                USER,
                StatsPatch {
                    current_streak: Some(12),
                    weekly_progress: Some(weekly),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let task = store.create_task(USER, title_only("a")).await.unwrap();
        let patch: TaskPatch = serde_json::from_str(r#"{"completed":true}"#).unwrap();
        store.update_task(&task.id, patch).await.unwrap();
        store.delete_task(&task.id).await.unwrap();

        let stats = store.get_user_stats(USER).await.unwrap().unwrap();
        assert_eq!(stats.current_streak, 12);
        assert_eq!(stats.weekly_progress.get("Monday"), Some(&100));
        assert_eq!(stats.total_tasks, 0);
    }

    #[tokio::test]
    async fn category_then_task_scenario() {
        let store = MemStore::new();
        let work = store
            .create_category(
                USER,
                NewCategory {
                    name: "Work".to_string(),
                    color: CategoryColor::Blue,
                },
            )
            .await
            .unwrap();
        store
            .create_task(
                USER,
                NewTask {
                    title: "Write report".to_string(),
                    category_id: Some(work.id.clone()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let tasks = store.list_tasks(USER).await.unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].category_id, Some(work.id));

        let stats = store.get_user_stats(USER).await.unwrap().unwrap();
        assert_eq!(stats.total_tasks, 1);
        assert_eq!(stats.completed_tasks, 0);
    }
}
