//! Aggregate query handlers.

use axum::Json;
use axum::extract::{Path, Query, State};

use sheethub_core::error::AppError;

use crate::dto::request::FindRegionsQuery;
use crate::dto::response::SumResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /sum_type/{type}
pub async fn sum_type(
    State(state): State<AppState>,
    Path(category_type): Path<String>,
) -> Result<Json<SumResponse>, ApiError> {
    let sum = state.aggregate_service.sum_type(&category_type).await?;
    Ok(Json(SumResponse { sum }))
}

/// GET /find_regions?search_term=...
pub async fn find_regions(
    State(state): State<AppState>,
    Query(query): Query<FindRegionsQuery>,
) -> Result<Json<Vec<String>>, ApiError> {
    let search_term = query
        .search_term
        .ok_or_else(|| AppError::validation("search_term query parameter is required"))?;

    let regions = state.aggregate_service.find_regions(&search_term).await?;
    Ok(Json(regions))
}
