//! Category entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use sheethub_core::types::CategoryId;

/// A named grouping of spreadsheet files, tagged with a region and a type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Category {
    /// Surrogate key.
    pub id: CategoryId,
    /// Unique, human-chosen name.
    pub name: String,
    /// Free-text region label.
    pub region: String,
    /// Free-text classification used by the sum-by-type aggregate.
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub category_type: String,
    /// When the category was created.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a new category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCategory {
    /// Unique name.
    pub name: String,
    /// Region label.
    pub region: String,
    /// Classification.
    #[serde(rename = "type")]
    pub category_type: String,
}
