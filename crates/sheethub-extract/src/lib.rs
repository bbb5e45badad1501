//! # sheethub-extract
//!
//! Derives the two aggregates SheetHub stores for every upload: the sum
//! of all numeric cells and a single text blob of every cell, across every
//! sheet of a workbook. Any format `calamine` auto-detects is accepted
//! (xlsx, xlsm, xlsb, xls, ods).

pub mod cell;
pub mod error;
pub mod extractor;
pub mod models;

pub use error::ExtractionError;
pub use extractor::{extract, extract_blocking};
pub use models::Extraction;
