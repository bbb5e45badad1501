//! Uploaded spreadsheet entities.

pub mod model;

pub use model::{CreateSheetFile, SheetFile};
