//! Category service: create and look up categories.

use std::sync::Arc;

use tracing::{info, warn};

use sheethub_core::error::AppError;
use sheethub_core::result::AppResult;
use sheethub_database::DatabasePool;
use sheethub_database::repositories::CategoryRepository;
use sheethub_entity::category::{Category, CreateCategory};

/// Creates categories and resolves them by name.
#[derive(Debug, Clone)]
pub struct CategoryService {
    /// Pool used to open a unit of work per operation.
    db: DatabasePool,
    /// Category repository.
    category_repo: Arc<CategoryRepository>,
}

impl CategoryService {
    /// Creates a new category service.
    pub fn new(db: DatabasePool, category_repo: Arc<CategoryRepository>) -> Self {
        Self { db, category_repo }
    }

    /// Create a category. Fails with a conflict when the name is taken.
    pub async fn create_category(&self, data: CreateCategory) -> AppResult<Category> {
        info!(name = %data.name, "Creating category");

        let mut uow = self.db.begin().await?;

        if self
            .category_repo
            .find_by_name_tx(uow.conn(), &data.name)
            .await?
            .is_some()
        {
            warn!(name = %data.name, "Category already exists");
            return Err(AppError::conflict("Category already exists"));
        }

        let category = self.category_repo.create(uow.conn(), &data).await?;
        uow.commit().await?;

        info!(
            id = %category.id,
            name = %category.name,
            region = %category.region,
            category_type = %category.category_type,
            "Category created"
        );
        Ok(category)
    }

    /// Look up a category by exact name.
    pub async fn get_by_name(&self, name: &str) -> AppResult<Category> {
        self.category_repo
            .find_by_name(name)
            .await?
            .ok_or_else(|| AppError::not_found("Category not found"))
    }
}
