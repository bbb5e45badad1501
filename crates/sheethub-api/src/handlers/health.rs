//! Health check handler.

use axum::Json;
use axum::extract::State;

use crate::dto::response::HealthResponse;
use crate::state::AppState;

/// GET /health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let database = matches!(state.db.health_check().await, Ok(true));
    let storage = matches!(state.blob_store.health_check().await, Ok(true));

    let status = if database && storage { "ok" } else { "degraded" };

    Json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: label(database, "connected"),
        storage: label(storage, "available"),
    })
}

fn label(up: bool, healthy: &str) -> String {
    let text = if up { healthy } else { "unavailable" };
    text.to_string()
}
