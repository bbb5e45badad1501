//! Repository implementations for SheetHub entities.

pub mod category;
pub mod sheet_file;

pub use category::CategoryRepository;
pub use sheet_file::SheetFileRepository;

use sheethub_core::error::{AppError, ErrorKind};

/// Map an insert failure, turning unique-constraint violations into conflicts.
pub(crate) fn map_insert_error(err: sqlx::Error, context: &str, conflict: &str) -> AppError {
    let is_unique = err
        .as_database_error()
        .is_some_and(|db| db.is_unique_violation());

    if is_unique {
        AppError::with_source(ErrorKind::Conflict, conflict, err)
    } else {
        AppError::with_source(ErrorKind::Database, context, err)
    }
}
