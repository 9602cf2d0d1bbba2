//! Category entity
//!
//! Flat color-tagged grouping for tasks. Categories are immutable after
//! creation, and deleting one does not cascade to referencing tasks.

use serde::{Deserialize, Serialize};

/// Closed color palette for category badges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryColor {
    Blue,
    Green,
    Purple,
    Red,
    Yellow,
    Orange,
}

/// Category entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    pub color: CategoryColor,
    pub user_id: String,
}

/// Request body for category creation
///
/// The server assigns `id` and the owning user; client-supplied values for
/// those are ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCategory {
    pub name: String,
    pub color: CategoryColor,
}
