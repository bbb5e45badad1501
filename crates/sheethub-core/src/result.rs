//! Convenience result type alias for SheetHub.

use crate::error::AppError;

/// A specialized `Result` type for SheetHub operations.
pub type AppResult<T> = Result<T, AppError>;
