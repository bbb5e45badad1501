//! Integration tests for spreadsheet upload.

use axum::http::StatusCode;

use sheethub_database::repositories::SheetFileRepository;

use crate::helpers::{Cell, TestApp, multipart_body, workbook};

#[tokio::test]
async fn test_upload_records_sum_and_text() {
    let Some(app) = TestApp::new().await else {
        return;
    };
    app.create_category("Sales", "US", "revenue").await;

    let data = workbook(vec![vec![
        vec![Cell::Num(10.0), Cell::Text("note")],
        vec![Cell::Num(5.0)],
    ]]);
    let response = app.upload("Sales", "q1.xlsx", &data).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message"], "File uploaded");

    let category = app.state.category_service.get_by_name("Sales").await.unwrap();
    let files = SheetFileRepository::new(app.db_pool.clone())
        .find_by_category(category.id)
        .await
        .unwrap();

    assert_eq!(files.len(), 1);
    let file = &files[0];
    assert_eq!(file.filename, "q1.xlsx");
    assert_eq!(file.num_sum, 15.0);
    assert!(file.text.contains("10"));
    assert!(file.text.contains("note"));
    assert!(file.text.contains('5'));
    assert!(file.filepath.starts_with("Sales/"));
    assert!(file.filepath.ends_with("_q1.xlsx"));

    assert_eq!(app.stored_blobs(), vec![file.filepath.clone()]);
}

#[tokio::test]
async fn test_upload_text_only_sums_to_zero() {
    let Some(app) = TestApp::new().await else {
        return;
    };
    app.create_category("Notes", "EU", "memo").await;

    let data = workbook(vec![vec![vec![Cell::Text("alpha"), Cell::Text("beta")]]]);
    let response = app.upload("Notes", "notes.xlsx", &data).await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app.request("GET", "/sum_type/memo", None).await;
    assert_eq!(response.body["sum"], 0.0);
}

#[tokio::test]
async fn test_upload_to_missing_category() {
    let Some(app) = TestApp::new().await else {
        return;
    };

    let data = workbook(vec![vec![vec![Cell::Num(1.0)]]]);
    let response = app.upload("Nowhere", "a.xlsx", &data).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["detail"], "Category not found");
    assert_eq!(app.file_count().await, 0);
    assert!(app.stored_blobs().is_empty());
}

#[tokio::test]
async fn test_upload_without_file_field() {
    let Some(app) = TestApp::new().await else {
        return;
    };
    app.create_category("Sales", "US", "revenue").await;

    let response = app.upload_raw("Sales", multipart_body(None, b"")).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["detail"], "No file uploaded");
    assert_eq!(app.file_count().await, 0);
}

#[tokio::test]
async fn test_upload_accepts_other_file_field_name() {
    let Some(app) = TestApp::new().await else {
        return;
    };
    app.create_category("Sales", "US", "revenue").await;

    let data = workbook(vec![vec![vec![Cell::Num(3.0)]]]);
    let body = multipart_body(Some(("spreadsheet", "other.xlsx")), &data);
    let response = app.upload_raw("Sales", body).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(app.file_count().await, 1);
}

#[tokio::test]
async fn test_unparseable_upload_leaves_nothing_behind() {
    let Some(app) = TestApp::new().await else {
        return;
    };
    app.create_category("Sales", "US", "revenue").await;

    let response = app
        .upload("Sales", "broken.xlsx", b"this is not a spreadsheet")
        .await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(app.file_count().await, 0);
    assert!(app.stored_blobs().is_empty());
}

#[tokio::test]
async fn test_failed_insert_removes_stored_blob() {
    let Some(app) = TestApp::new().await else {
        return;
    };
    app.create_category("Sales", "US", "revenue").await;
    app.reject_file_inserts().await;

    let data = workbook(vec![vec![vec![Cell::Num(7.0)]]]);
    let response = app.upload("Sales", "q2.xlsx", &data).await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(app.file_count().await, 0);
    assert!(app.stored_blobs().is_empty());
}

#[tokio::test]
async fn test_upload_to_category_with_space_in_name() {
    let Some(app) = TestApp::new().await else {
        return;
    };
    app.create_category("North Sales", "CA", "revenue").await;

    let data = workbook(vec![vec![vec![Cell::Num(4.0)]]]);
    let response = app.upload("North Sales", "n.xlsx", &data).await;

    assert_eq!(response.status, StatusCode::OK);
    let blobs = app.stored_blobs();
    assert_eq!(blobs.len(), 1);
    assert!(blobs[0].starts_with("North Sales/"));
}
