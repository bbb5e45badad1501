//! Category handlers.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;

use sheethub_core::error::AppError;

use crate::dto::request::CreateCategoryRequest;
use crate::dto::response::MessageResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// POST /create_category
pub async fn create_category(
    State(state): State<AppState>,
    body: Result<Json<CreateCategoryRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Json(req) = body.map_err(|e| AppError::validation(e.body_text()))?;

    state.category_service.create_category(req.into()).await?;

    Ok(Json(MessageResponse::new("Category created")))
}
