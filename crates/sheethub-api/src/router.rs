//! Route definitions for the SheetHub HTTP API.
//!
//! The router receives `AppState` and passes it to all handlers via
//! Axum's `State` extractor.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let max_body = state.config.server.max_body_bytes;
    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    Router::new()
        .merge(category_routes())
        .merge(upload_routes())
        .merge(aggregate_routes())
        .merge(health_routes())
        .layer(DefaultBodyLimit::max(max_body))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Category management
fn category_routes() -> Router<AppState> {
    Router::new().route(
        "/create_category",
        post(handlers::category::create_category),
    )
}

/// Spreadsheet upload
fn upload_routes() -> Router<AppState> {
    Router::new().route(
        "/upload_file/{category_name}",
        post(handlers::upload::upload_file),
    )
}

/// Aggregate queries
fn aggregate_routes() -> Router<AppState> {
    Router::new()
        .route("/sum_type/{type}", get(handlers::aggregate::sum_type))
        .route("/find_regions", get(handlers::aggregate::find_regions))
}

/// Health probe
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
