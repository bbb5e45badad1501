//! Category repository implementation.

use sqlx::{PgConnection, PgExecutor, PgPool};

use sheethub_core::error::{AppError, ErrorKind};
use sheethub_core::result::AppResult;
use sheethub_entity::category::{Category, CreateCategory};

use super::map_insert_error;

/// Repository for category lookups and inserts.
#[derive(Debug, Clone)]
pub struct CategoryRepository {
    pool: PgPool,
}

impl CategoryRepository {
    /// Create a new category repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a category by its exact name.
    pub async fn find_by_name(&self, name: &str) -> AppResult<Option<Category>> {
        fetch_by_name(&self.pool, name).await
    }

    /// Find a category by its exact name inside a unit of work.
    pub async fn find_by_name_tx(
        &self,
        conn: &mut PgConnection,
        name: &str,
    ) -> AppResult<Option<Category>> {
        fetch_by_name(conn, name).await
    }

    /// Insert a new category inside a unit of work.
    ///
    /// A concurrent insert of the same name surfaces as a conflict.
    pub async fn create(&self, conn: &mut PgConnection, data: &CreateCategory) -> AppResult<Category> {
        sqlx::query_as::<_, Category>(
            "INSERT INTO categories (name, region, type) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.region)
        .bind(&data.category_type)
        .fetch_one(conn)
        .await
        .map_err(|e| map_insert_error(e, "Failed to create category", "Category already exists"))
    }

    /// Count all categories.
    pub async fn count(&self) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM categories")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count categories", e))
    }
}

async fn fetch_by_name<'e, E>(executor: E, name: &str) -> AppResult<Option<Category>>
where
    E: PgExecutor<'e>,
{
    sqlx::query_as::<_, Category>("SELECT * FROM categories WHERE name = $1")
        .bind(name)
        .fetch_optional(executor)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find category", e))
}
