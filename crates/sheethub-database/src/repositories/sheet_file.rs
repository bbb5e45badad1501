//! Spreadsheet file repository implementation.

use sqlx::{FromRow, PgConnection, PgPool};

use sheethub_core::error::{AppError, ErrorKind};
use sheethub_core::result::AppResult;
use sheethub_core::types::CategoryId;
use sheethub_entity::sheet_file::{CreateSheetFile, SheetFile};

use super::map_insert_error;

/// Aggregate of `num_sum` over every file of one category type.
#[derive(Debug, Clone, Copy, PartialEq, FromRow)]
pub struct TypeTotal {
    /// Number of files that matched.
    pub file_count: i64,
    /// Sum of their `num_sum` values; 0.0 when nothing matched.
    pub total: f64,
}

/// Repository for spreadsheet records and the aggregate queries over them.
#[derive(Debug, Clone)]
pub struct SheetFileRepository {
    pool: PgPool,
}

impl SheetFileRepository {
    /// Create a new spreadsheet file repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List every record owned by a category, oldest first.
    pub async fn find_by_category(&self, category_id: CategoryId) -> AppResult<Vec<SheetFile>> {
        sqlx::query_as::<_, SheetFile>(
            "SELECT * FROM excelfiles WHERE category_id = $1 ORDER BY id ASC",
        )
        .bind(category_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list files", e))
    }

    /// Insert a new record inside a unit of work.
    pub async fn create(&self, conn: &mut PgConnection, data: &CreateSheetFile) -> AppResult<SheetFile> {
        sqlx::query_as::<_, SheetFile>(
            "INSERT INTO excelfiles (filename, filepath, category_id, num_sum, text) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(&data.filename)
        .bind(&data.filepath)
        .bind(data.category_id)
        .bind(data.num_sum)
        .bind(&data.text)
        .fetch_one(conn)
        .await
        .map_err(|e| map_insert_error(e, "Failed to create file record", "File record already exists"))
    }

    /// Sum `num_sum` over every file whose category has exactly this type.
    pub async fn sum_by_type(&self, category_type: &str) -> AppResult<TypeTotal> {
        sqlx::query_as::<_, TypeTotal>(
            "SELECT COUNT(f.id) AS file_count, COALESCE(SUM(f.num_sum), 0)::DOUBLE PRECISION AS total \
             FROM excelfiles f JOIN categories c ON c.id = f.category_id \
             WHERE c.type = $1",
        )
        .bind(category_type)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to sum files by type", e))
    }

    /// Distinct regions of categories owning a file whose text contains
    /// `term`, compared case-insensitively. An empty term matches every file.
    pub async fn regions_matching(&self, term: &str) -> AppResult<Vec<String>> {
        let pattern = format!("%{}%", escape_like(term));

        sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT c.region FROM categories c \
             JOIN excelfiles f ON f.category_id = c.id \
             WHERE f.text ILIKE $1 ESCAPE '\\' \
             ORDER BY c.region ASC",
        )
        .bind(pattern)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find regions", e))
    }
}

/// Escape `LIKE` metacharacters so the term matches literally.
pub fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}
