//! Shared types for Taskdeck

pub mod error;

pub use error::{Result, TaskdeckError};
