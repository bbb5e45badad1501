//! Blob storage configuration.

use serde::{Deserialize, Serialize};

/// Local filesystem blob storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Root directory for uploaded spreadsheets. One sub-directory is
    /// created per category name.
    #[serde(default = "default_uploads_root")]
    pub uploads_root: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            uploads_root: default_uploads_root(),
        }
    }
}

fn default_uploads_root() -> String {
    "uploads".to_string()
}
