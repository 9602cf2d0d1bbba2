//! Entity store
//!
//! The authoritative keyed collections for categories, tasks, and per-user
//! statistics. All access goes through the [`Storage`] trait so a durable
//! table-backed store can replace [`MemStore`] without touching the request
//! handlers. Callers receive clones, never references into the store.

pub mod lifecycle;
pub mod memory;
pub mod seed;

pub use memory::MemStore;

use async_trait::async_trait;

use crate::model::{Category, NewCategory, NewTask, StatsPatch, Task, TaskPatch, UserStats};
use crate::types::Result;

/// Capability set of the entity store
///
/// Task mutations that can change completion state (create, delete, and a
/// patch carrying `completed`) also refresh the owner's derived statistics
/// inside the same critical section, so each call is atomic as observed by
/// subsequent reads.
#[async_trait]
pub trait Storage: Send + Sync {
    /// All categories for the user, in insertion order
    async fn list_categories(&self, user_id: &str) -> Result<Vec<Category>>;

    /// Create a category with a fresh id
    async fn create_category(&self, user_id: &str, data: NewCategory) -> Result<Category>;

    /// Remove a category if present; absent ids are a silent no-op
    async fn delete_category(&self, id: &str) -> Result<()>;

    /// The user's tasks sorted ascending by position
    async fn list_tasks(&self, user_id: &str) -> Result<Vec<Task>>;

    /// Look up a single task
    async fn get_task(&self, id: &str) -> Result<Option<Task>>;

    /// Create a task with a fresh id, defaulted fields, and refreshed stats
    async fn create_task(&self, user_id: &str, data: NewTask) -> Result<Task>;

    /// Merge a partial patch over an existing task
    ///
    /// Fails with `NotFound` if the id is absent. A patch carrying a
    /// `completed` value refreshes stats whether or not the value changed.
    async fn update_task(&self, id: &str, patch: TaskPatch) -> Result<Task>;

    /// Remove a task if present and refresh the owner's stats; absent ids
    /// are a silent no-op
    async fn delete_task(&self, id: &str) -> Result<()>;

    /// Assign dense 0..n-1 positions following the given id order
    ///
    /// Unknown ids are skipped; tasks omitted from the sequence keep their
    /// old position.
    async fn reorder_tasks(&self, ordered_ids: &[String]) -> Result<()>;

    /// Look up the user's stats record
    async fn get_user_stats(&self, user_id: &str) -> Result<Option<UserStats>>;

    /// Merge a partial stats patch, creating a zeroed record on first write
    async fn update_user_stats(&self, user_id: &str, patch: StatsPatch) -> Result<UserStats>;
}
