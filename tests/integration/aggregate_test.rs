//! Integration tests for the aggregate queries.

use axum::http::StatusCode;
use serde_json::json;

use crate::helpers::{Cell, TestApp, workbook};

#[tokio::test]
async fn test_sum_type_without_matches_is_zero() {
    let Some(app) = TestApp::new().await else {
        return;
    };

    let response = app.request("GET", "/sum_type/unknown", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({ "sum": 0.0 }));
}

#[tokio::test]
async fn test_sum_type_adds_across_files_and_categories() {
    let Some(app) = TestApp::new().await else {
        return;
    };
    app.create_category("Sales", "US", "revenue").await;
    app.create_category("Refunds", "EU", "revenue").await;
    app.create_category("Costs", "US", "cost").await;

    app.upload("Sales", "a.xlsx", &workbook(vec![vec![vec![Cell::Num(2.5)]]]))
        .await;
    app.upload("Refunds", "b.xlsx", &workbook(vec![vec![vec![Cell::Num(-1.0)]]]))
        .await;
    app.upload("Costs", "c.xlsx", &workbook(vec![vec![vec![Cell::Num(100.0)]]]))
        .await;

    let response = app.request("GET", "/sum_type/revenue", None).await;
    assert_eq!(response.body["sum"], 1.5);

    let response = app.request("GET", "/sum_type/cost", None).await;
    assert_eq!(response.body["sum"], 100.0);

    let response = app.request("GET", "/sum_type/Revenue", None).await;
    assert_eq!(response.body["sum"], 0.0);
}

#[tokio::test]
async fn test_find_regions_is_case_insensitive_and_distinct() {
    let Some(app) = TestApp::new().await else {
        return;
    };
    app.create_category("Sales", "US", "revenue").await;
    app.create_category("Sales West", "US", "revenue").await;
    app.create_category("Costs", "EU", "cost").await;

    let alpha = workbook(vec![vec![vec![Cell::Text("Alpha Widget")]]]);
    app.upload("Sales", "a.xlsx", &alpha).await;
    app.upload("Sales West", "b.xlsx", &alpha).await;
    app.upload("Costs", "c.xlsx", &workbook(vec![vec![vec![Cell::Text("gamma")]]]))
        .await;

    let response = app
        .request("GET", "/find_regions?search_term=alpha", None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!(["US"]));

    let response = app
        .request("GET", "/find_regions?search_term=WIDGET", None)
        .await;
    assert_eq!(response.body, json!(["US"]));

    let response = app
        .request("GET", "/find_regions?search_term=nothing", None)
        .await;
    assert_eq!(response.body, json!([]));
}

#[tokio::test]
async fn test_find_regions_empty_term_lists_regions_with_files() {
    let Some(app) = TestApp::new().await else {
        return;
    };
    app.create_category("Sales", "US", "revenue").await;
    app.create_category("Costs", "EU", "cost").await;
    app.create_category("Empty", "APAC", "cost").await;

    app.upload("Sales", "a.xlsx", &workbook(vec![vec![vec![Cell::Num(1.0)]]]))
        .await;
    app.upload("Costs", "b.xlsx", &workbook(vec![vec![vec![Cell::Num(2.0)]]]))
        .await;

    let response = app.request("GET", "/find_regions?search_term=", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!(["EU", "US"]));
}

#[tokio::test]
async fn test_find_regions_treats_wildcards_literally() {
    let Some(app) = TestApp::new().await else {
        return;
    };
    app.create_category("Sales", "US", "revenue").await;
    app.upload("Sales", "a.xlsx", &workbook(vec![vec![vec![Cell::Text("plain")]]]))
        .await;

    let response = app
        .request("GET", "/find_regions?search_term=%25", None)
        .await;

    assert_eq!(response.body, json!([]));
}

#[tokio::test]
async fn test_find_regions_requires_search_term() {
    let Some(app) = TestApp::new().await else {
        return;
    };

    let response = app.request("GET", "/find_regions", None).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_end_to_end() {
    let Some(app) = TestApp::new().await else {
        return;
    };

    let response = app.create_category("Sales", "US", "revenue").await;
    assert_eq!(response.status, StatusCode::OK);

    let data = workbook(vec![vec![
        vec![Cell::Num(10.0), Cell::Text("note")],
        vec![Cell::Num(5.0), Cell::Text("")],
    ]]);
    let response = app.upload("Sales", "q1.xlsx", &data).await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app.request("GET", "/sum_type/revenue", None).await;
    assert_eq!(response.body["sum"], 15.0);

    let response = app
        .request("GET", "/find_regions?search_term=note", None)
        .await;
    assert_eq!(response.body, json!(["US"]));
}

#[tokio::test]
async fn test_health() {
    let Some(app) = TestApp::new().await else {
        return;
    };

    let response = app.request("GET", "/health", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert_eq!(response.body["database"], "connected");
}
