//! Spreadsheet file entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use sheethub_core::types::{CategoryId, SheetFileId};

/// An uploaded spreadsheet with its precomputed aggregates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct SheetFile {
    /// Surrogate key.
    pub id: SheetFileId,
    /// The client-supplied file name.
    pub filename: String,
    /// Location of the raw content in the blob store.
    pub filepath: String,
    /// Owning category.
    pub category_id: CategoryId,
    /// Sum of every numeric cell across all sheets.
    pub num_sum: f64,
    /// Every cell rendered as text, space-joined.
    pub text: String,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
}

impl SheetFile {
    /// Get the file extension (lowercase), if any.
    pub fn extension(&self) -> Option<String> {
        self.filename
            .rsplit('.')
            .next()
            .filter(|ext| *ext != self.filename)
            .map(|ext| ext.to_lowercase())
    }
}

/// Data required to create a new spreadsheet record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSheetFile {
    /// The client-supplied file name.
    pub filename: String,
    /// Location in the blob store.
    pub filepath: String,
    /// Owning category.
    pub category_id: CategoryId,
    /// Precomputed numeric sum.
    pub num_sum: f64,
    /// Precomputed text blob.
    pub text: String,
}
