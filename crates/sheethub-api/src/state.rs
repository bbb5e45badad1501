//! Application state shared across all handlers.

use std::sync::Arc;

use sheethub_core::config::AppConfig;
use sheethub_core::traits::storage::BlobStore;
use sheethub_database::DatabasePool;
use sheethub_database::repositories::{CategoryRepository, SheetFileRepository};
use sheethub_service::{AggregateService, CategoryService, UploadService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped or pool handles, so cloning is cheap.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// PostgreSQL connection pool
    pub db: DatabasePool,
    /// Raw upload storage
    pub blob_store: Arc<dyn BlobStore>,

    // ── Services ─────────────────────────────────────────────
    /// Category service
    pub category_service: Arc<CategoryService>,
    /// Upload service
    pub upload_service: Arc<UploadService>,
    /// Aggregate query service
    pub aggregate_service: Arc<AggregateService>,
}

impl AppState {
    /// Wire repositories and services on top of the given infrastructure.
    pub fn new(config: AppConfig, db: DatabasePool, blob_store: Arc<dyn BlobStore>) -> Self {
        let category_repo = Arc::new(CategoryRepository::new(db.pool().clone()));
        let file_repo = Arc::new(SheetFileRepository::new(db.pool().clone()));

        let category_service = Arc::new(CategoryService::new(
            db.clone(),
            Arc::clone(&category_repo),
        ));
        let upload_service = Arc::new(UploadService::new(
            db.clone(),
            Arc::clone(&category_repo),
            Arc::clone(&file_repo),
            Arc::clone(&blob_store),
        ));
        let aggregate_service = Arc::new(AggregateService::new(Arc::clone(&file_repo)));

        Self {
            config: Arc::new(config),
            db,
            blob_store,
            category_service,
            upload_service,
            aggregate_service,
        }
    }
}
