//! Spreadsheet upload handler.

use axum::Json;
use axum::extract::{Multipart, Path, State};
use bytes::Bytes;

use sheethub_core::error::AppError;
use sheethub_service::UploadParams;

use crate::dto::response::MessageResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// POST /upload_file/{category_name}
///
/// Reads the multipart field named `file`. A field without that name is
/// accepted when it is the first one carrying a file name.
pub async fn upload_file(
    State(state): State<AppState>,
    Path(category_name): Path<String>,
    mut multipart: Multipart,
) -> Result<Json<MessageResponse>, ApiError> {
    let mut upload: Option<(String, Bytes)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(format!("Multipart error: {e}")))?
    {
        let is_file_field = field.name() == Some("file");
        let Some(file_name) = field.file_name().map(String::from) else {
            continue;
        };
        if upload.is_some() && !is_file_field {
            continue;
        }

        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::validation(format!("Read error: {e}")))?;
        upload = Some((file_name, data));

        if is_file_field {
            break;
        }
    }

    let (filename, data) = upload.ok_or_else(|| AppError::validation("No file uploaded"))?;

    state
        .upload_service
        .upload_file(UploadParams {
            category_name,
            filename,
            data,
        })
        .await?;

    Ok(Json(MessageResponse::new("File uploaded")))
}
