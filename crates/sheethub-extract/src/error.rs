//! Error type for spreadsheet extraction.

use sheethub_core::error::{AppError, ErrorKind};
use thiserror::Error;

/// Failures while reading a workbook.
#[derive(Debug, Error)]
pub enum ExtractionError {
    /// The content is not a workbook format calamine recognizes.
    #[error("Unreadable spreadsheet: {0}")]
    Open(#[source] calamine::Error),

    /// A sheet listed by the workbook could not be read.
    #[error("Failed to read sheet '{name}': {source}")]
    Sheet {
        /// The sheet name.
        name: String,
        /// The underlying reader error.
        #[source]
        source: calamine::Error,
    },

    /// The blocking extraction task panicked or was cancelled.
    #[error("Extraction task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl From<ExtractionError> for AppError {
    fn from(err: ExtractionError) -> Self {
        let message = err.to_string();
        AppError::with_source(ErrorKind::Extraction, message, err)
    }
}
