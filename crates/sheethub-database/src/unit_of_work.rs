//! Per-request unit of work.
//!
//! A [`UnitOfWork`] owns one database transaction. Services thread it
//! through every repository call of an operation and call
//! [`UnitOfWork::commit`] only once every step has succeeded. Dropping it
//! without committing rolls the transaction back.

use sqlx::{PgConnection, PgPool, Postgres, Transaction};
use tracing::debug;

use sheethub_core::error::{AppError, ErrorKind};

/// A scoped database transaction.
#[derive(Debug)]
pub struct UnitOfWork {
    tx: Transaction<'static, Postgres>,
}

impl UnitOfWork {
    /// Begin a new transaction on the given pool.
    pub async fn begin(pool: &PgPool) -> Result<Self, AppError> {
        let tx = pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;
        Ok(Self { tx })
    }

    /// Borrow the transaction's connection for a repository call.
    pub fn conn(&mut self) -> &mut PgConnection {
        &mut self.tx
    }

    /// Commit every write made in this unit of work.
    pub async fn commit(self) -> Result<(), AppError> {
        self.tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit transaction", e)
        })?;
        debug!("Unit of work committed");
        Ok(())
    }
}
