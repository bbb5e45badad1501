//! Extraction output.

use serde::{Deserialize, Serialize};

/// The aggregates derived from one workbook.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Extraction {
    /// Sum of every cell that coerces to a number, across all sheets.
    pub num_sum: f64,
    /// Every cell rendered as text, in sheet/row/column order, joined by
    /// a single space. Empty cells render as "".
    pub text: String,
    /// Number of sheets read.
    pub sheet_count: usize,
    /// Number of cells visited, empty ones included.
    pub cell_count: usize,
}
