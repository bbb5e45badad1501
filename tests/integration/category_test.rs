//! Integration tests for category creation.

use axum::http::StatusCode;

use sheethub_core::error::ErrorKind;
use sheethub_database::repositories::CategoryRepository;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_create_category() {
    let Some(app) = TestApp::new().await else {
        return;
    };

    let response = app.create_category("Sales", "US", "revenue").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message"], "Category created");

    let category = app.state.category_service.get_by_name("Sales").await.unwrap();
    assert_eq!(category.region, "US");
    assert_eq!(category.category_type, "revenue");
}

#[tokio::test]
async fn test_get_unknown_category_is_not_found() {
    let Some(app) = TestApp::new().await else {
        return;
    };
    app.create_category("Sales", "US", "revenue").await;

    let err = app
        .state
        .category_service
        .get_by_name("sales")
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
}

#[tokio::test]
async fn test_create_duplicate_category_keeps_original() {
    let Some(app) = TestApp::new().await else {
        return;
    };

    app.create_category("Sales", "US", "revenue").await;
    let response = app.create_category("Sales", "EU", "cost").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "CONFLICT");
    assert_eq!(response.body["detail"], "Category already exists");

    let category = app.state.category_service.get_by_name("Sales").await.unwrap();
    assert_eq!(category.region, "US");
    assert_eq!(category.category_type, "revenue");

    let repo = CategoryRepository::new(app.db_pool.clone());
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_category_names_are_case_sensitive() {
    let Some(app) = TestApp::new().await else {
        return;
    };

    app.create_category("Sales", "US", "revenue").await;
    let response = app.create_category("sales", "US", "revenue").await;

    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_create_category_missing_field() {
    let Some(app) = TestApp::new().await else {
        return;
    };

    let response = app
        .request(
            "POST",
            "/create_category",
            Some(serde_json::json!({ "category_name": "Sales" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}
