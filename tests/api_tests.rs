//! API integration tests
//!
//! Drives the router directly with `tower::ServiceExt::oneshot`; no socket.

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use reportfill::api::server::{router, ApiConfig, AppState};
use serde_json::{json, Value};
use tower::util::ServiceExt;

fn test_app(template_path: PathBuf) -> Router {
    router(Arc::new(AppState {
        version: env!("CARGO_PKG_VERSION").to_string(),
        template_path,
    }))
}

fn write_template(dir: &tempfile::TempDir) -> PathBuf {
    let mut book = umya_spreadsheet::new_file();
    book.get_active_sheet_mut().set_name("Summary");
    let _ = book.new_sheet("East Region");
    let path = dir.path().join("template.xlsx");
    umya_spreadsheet::writer::xlsx::write(&book, &path).unwrap();
    path
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// ═══════════════════════════════════════════════════════════════════════════
// HEALTH / INFO ENDPOINTS
// ═══════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn test_health_endpoint() {
    let app = test_app(PathBuf::from("unused.xlsx"));
    let response = app
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert!(body["timestamp"].as_str().unwrap().contains('T'));
}

#[tokio::test]
async fn test_version_endpoint() {
    let app = test_app(PathBuf::from("some/template.xlsx"));
    let response = app
        .oneshot(Request::get("/version").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(body["template"], "some/template.xlsx");
}

#[tokio::test]
async fn test_root_lists_endpoints() {
    let app = test_app(PathBuf::from("unused.xlsx"));
    let response = app
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let paths: Vec<&str> = body["endpoints"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["path"].as_str().unwrap())
        .collect();
    assert!(paths.contains(&"/populate-excel"));
    assert!(paths.contains(&"/health"));
}

// ═══════════════════════════════════════════════════════════════════════════
// POPULATE-EXCEL FAILURES
// ═══════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn test_populate_missing_body_is_400() {
    let app = test_app(PathBuf::from("unused.xlsx"));
    let response = app
        .oneshot(
            Request::post("/populate-excel")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "missing request body");
}

#[tokio::test]
async fn test_populate_invalid_json_is_400() {
    let app = test_app(PathBuf::from("unused.xlsx"));
    let response = app
        .oneshot(
            Request::post("/populate-excel")
                .header("content-type", "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().starts_with("invalid JSON body"));
}

#[tokio::test]
async fn test_populate_missing_template_is_500() {
    let app = test_app(PathBuf::from("/nonexistent/template.xlsx"));
    let response = app
        .oneshot(
            Request::post("/populate-excel")
                .header("content-type", "application/json")
                .body(Body::from(json!({"summary": {}}).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("template not found"));
}

// ═══════════════════════════════════════════════════════════════════════════
// POPULATE-EXCEL SUCCESS
// ═══════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn test_populate_returns_workbook_download() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(write_template(&dir));

    let payload = json!({
        "exchangeRate": 1.39,
        "summary": { "foodDistCAD": 100, "salaryCAD": 50, "incentiveCAD": 10 },
        "regions": [
            { "code": "East Region" },
            { "code": "West Region" }
        ]
    });
    let response = app
        .oneshot(
            Request::post("/populate-excel")
                .header("content-type", "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let headers = response.headers().clone();
    assert_eq!(
        headers.get("content-type").unwrap(),
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    );
    let disposition = headers.get("content-disposition").unwrap().to_str().unwrap();
    assert!(disposition.starts_with("attachment; filename=\"sponsorship-report-"));
    assert!(disposition.ends_with(".xlsx\""));
    assert_eq!(headers.get("x-regions-filled").unwrap(), "1");
    assert_eq!(headers.get("x-regions-skipped").unwrap(), "1");

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    // xlsx files are zip archives
    assert_eq!(&bytes[..2], b"PK");
}

#[tokio::test]
async fn test_convert_alias_behaves_like_populate() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(write_template(&dir));

    let response = app
        .oneshot(
            Request::post("/convert")
                .header("content-type", "application/json")
                .body(Body::from(json!({"summary": {}}).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("content-type").unwrap(),
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    );
}
