//! Taskdeck - personal task-tracking service
//!
//! Taskdeck keeps one user's tasks, categories, and productivity statistics
//! in an in-memory entity store and exposes them over an HTTP/JSON API.
//!
//! ## Services
//!
//! - **Tasks**: create, patch, delete, and reorder tasks
//! - **Categories**: flat color-tagged grouping for tasks
//! - **Stats**: derived per-user aggregates (total/completed counts) plus
//!   seeded streak and weekly-progress figures
//! - **Suggestions**: static prompt menu for the UI

pub mod config;
pub mod model;
pub mod routes;
pub mod server;
pub mod store;
pub mod types;

pub use config::Args;
pub use server::{run, AppState};
pub use types::{Result, TaskdeckError};
