//! Upload service: store, extract, and record a spreadsheet.

use std::sync::Arc;

use bytes::Bytes;
use chrono::Utc;
use tracing::{debug, error, info, warn};

use sheethub_core::error::AppError;
use sheethub_core::result::AppResult;
use sheethub_core::traits::storage::BlobStore;
use sheethub_database::repositories::{CategoryRepository, SheetFileRepository};
use sheethub_database::{DatabasePool, UnitOfWork};
use sheethub_entity::category::Category;
use sheethub_entity::sheet_file::{CreateSheetFile, SheetFile};
use sheethub_extract::extract_blocking;
use sheethub_storage::upload_path;

/// Parameters of a single upload request.
#[derive(Debug, Clone)]
pub struct UploadParams {
    /// Name of the owning category.
    pub category_name: String,
    /// The client-supplied file name.
    pub filename: String,
    /// Raw spreadsheet content.
    pub data: Bytes,
}

/// Runs the upload pipeline: category lookup, blob write, extraction,
/// row insert.
///
/// The blob is written before parsing and parsing happens before any
/// database write. If a later step fails, the blob is deleted again and
/// the unit of work is rolled back.
#[derive(Clone)]
pub struct UploadService {
    /// Pool used to open a unit of work per upload.
    db: DatabasePool,
    /// Category repository.
    category_repo: Arc<CategoryRepository>,
    /// Spreadsheet record repository.
    file_repo: Arc<SheetFileRepository>,
    /// Raw upload storage.
    blob_store: Arc<dyn BlobStore>,
}

impl std::fmt::Debug for UploadService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UploadService")
            .field("blob_store", &self.blob_store.provider_type())
            .finish()
    }
}

impl UploadService {
    /// Creates a new upload service.
    pub fn new(
        db: DatabasePool,
        category_repo: Arc<CategoryRepository>,
        file_repo: Arc<SheetFileRepository>,
        blob_store: Arc<dyn BlobStore>,
    ) -> Self {
        Self {
            db,
            category_repo,
            file_repo,
            blob_store,
        }
    }

    /// Upload a spreadsheet into a category.
    pub async fn upload_file(&self, params: UploadParams) -> AppResult<SheetFile> {
        info!(
            filename = %params.filename,
            category = %params.category_name,
            bytes = params.data.len(),
            "Uploading file"
        );

        let mut uow = self.db.begin().await?;

        let Some(category) = self
            .category_repo
            .find_by_name_tx(uow.conn(), &params.category_name)
            .await?
        else {
            warn!(category = %params.category_name, "Category not found");
            return Err(AppError::not_found("Category not found"));
        };

        let filepath = upload_path(&category.name, Utc::now().timestamp(), &params.filename);
        self.blob_store.write(&filepath, params.data.clone()).await?;
        debug!(filename = %params.filename, filepath = %filepath, "Finished saving file");

        match self.extract_and_record(uow, &category, &params, &filepath).await {
            Ok(file) => {
                info!(
                    id = %file.id,
                    filename = %file.filename,
                    extension = file.extension().as_deref().unwrap_or(""),
                    category = %category.name,
                    num_sum = file.num_sum,
                    "Finished uploading file"
                );
                Ok(file)
            }
            Err(err) => {
                if let Err(cleanup) = self.blob_store.delete(&filepath).await {
                    warn!(
                        filepath = %filepath,
                        error = %cleanup,
                        "Failed to remove blob of failed upload"
                    );
                }
                Err(err)
            }
        }
    }

    /// Parse the content and insert its record, committing on success.
    ///
    /// Returning early drops `uow`, which rolls the transaction back.
    async fn extract_and_record(
        &self,
        mut uow: UnitOfWork,
        category: &Category,
        params: &UploadParams,
        filepath: &str,
    ) -> AppResult<SheetFile> {
        let extraction = extract_blocking(params.data.clone()).await.map_err(|e| {
            error!(filename = %params.filename, error = %e, "Failed to parse file");
            AppError::from(e)
        })?;
        debug!(
            filename = %params.filename,
            sheets = extraction.sheet_count,
            cells = extraction.cell_count,
            "Finished parsing file"
        );

        let record = CreateSheetFile {
            filename: params.filename.clone(),
            filepath: filepath.to_string(),
            category_id: category.id,
            num_sum: extraction.num_sum,
            text: extraction.text,
        };

        let file = self.file_repo.create(uow.conn(), &record).await?;
        uow.commit().await?;
        Ok(file)
    }
}
