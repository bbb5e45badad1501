//! # sheethub-entity
//!
//! Domain entity models for SheetHub. Every struct in this crate
//! represents a database table row or the input needed to insert one.
//! Row types derive `sqlx::FromRow`.

pub mod category;
pub mod sheet_file;

pub use category::{Category, CreateCategory};
pub use sheet_file::{CreateSheetFile, SheetFile};
