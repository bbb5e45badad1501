//! Workbook traversal.

use std::io::Cursor;

use bytes::Bytes;
use calamine::{Reader, open_workbook_auto_from_rs};
use tracing::debug;

use crate::cell::{coerce, render};
use crate::error::ExtractionError;
use crate::models::Extraction;

/// Extract the numeric sum and text blob from a workbook's raw bytes.
///
/// Every sheet is read as a headerless grid. This is CPU-bound; async
/// callers should go through [`extract_blocking`].
pub fn extract(data: Bytes) -> Result<Extraction, ExtractionError> {
    let mut workbook =
        open_workbook_auto_from_rs(Cursor::new(data)).map_err(ExtractionError::Open)?;

    let mut num_sum = 0.0;
    let mut cells: Vec<String> = Vec::new();
    let sheet_names = workbook.sheet_names();

    for name in &sheet_names {
        let range = workbook
            .worksheet_range(name)
            .map_err(|source| ExtractionError::Sheet {
                name: name.clone(),
                source,
            })?;

        for row in range.rows() {
            for cell in row {
                if let Some(value) = coerce(cell) {
                    num_sum += value;
                }
                cells.push(render(cell));
            }
        }
    }

    debug!(
        sheets = sheet_names.len(),
        cells = cells.len(),
        num_sum,
        "Extracted workbook"
    );

    Ok(Extraction {
        num_sum,
        sheet_count: sheet_names.len(),
        cell_count: cells.len(),
        text: cells.join(" "),
    })
}

/// Run [`extract`] on the blocking thread pool and wait for it.
pub async fn extract_blocking(data: Bytes) -> Result<Extraction, ExtractionError> {
    tokio::task::spawn_blocking(move || extract(data)).await?
}
