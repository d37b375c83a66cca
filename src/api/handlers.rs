//! API request handlers
//!
//! One real endpoint: POST /populate-excel takes the JSON payload, fills a
//! fresh copy of the template, and returns the workbook as a download.
//! Failure responses are always a JSON object with an `error` field; a
//! partial workbook is never returned.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{Local, Utc};
use serde::Serialize;
use serde_json::Value;
use tracing::error;
use uuid::Uuid;

use crate::report::render_report;
use crate::types::ReportPayload;

use super::server::AppState;

const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// JSON error body
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub request_id: String,
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
            request_id: Uuid::new_v4().to_string(),
        }),
    )
        .into_response()
}

/// Root endpoint response
#[derive(Serialize)]
pub struct RootResponse {
    pub name: String,
    pub version: String,
    pub description: String,
    pub endpoints: Vec<EndpointInfo>,
}

#[derive(Serialize)]
pub struct EndpointInfo {
    pub path: String,
    pub method: String,
    pub description: String,
}

/// GET / - Root info
pub async fn root(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(RootResponse {
        name: "Reportfill Server".to_string(),
        version: state.version.clone(),
        description: "Fills the sponsorship report template from JSON financial data".to_string(),
        endpoints: vec![
            EndpointInfo {
                path: "/populate-excel".to_string(),
                method: "POST".to_string(),
                description: "Fill the report template, returns the .xlsx file".to_string(),
            },
            EndpointInfo {
                path: "/convert".to_string(),
                method: "POST".to_string(),
                description: "Legacy alias for /populate-excel".to_string(),
            },
            EndpointInfo {
                path: "/health".to_string(),
                method: "GET".to_string(),
                description: "Health check endpoint".to_string(),
            },
            EndpointInfo {
                path: "/version".to_string(),
                method: "GET".to_string(),
                description: "Get server version".to_string(),
            },
        ],
    })
}

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

/// GET /health - Health check
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now().to_rfc3339(),
    })
}

/// Version response
#[derive(Serialize)]
pub struct VersionResponse {
    pub version: String,
    pub template: String,
}

/// GET /version - Server version
pub async fn version(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(VersionResponse {
        version: state.version.clone(),
        template: state.template_path.display().to_string(),
    })
}

/// Attachment filename: the timestamp is the only request-dependent part
/// of the whole response.
fn download_filename() -> String {
    format!(
        "sponsorship-report-{}.xlsx",
        Local::now().format("%Y%m%d-%H%M%S")
    )
}

/// POST /populate-excel - Fill the report template
///
/// The body is read raw rather than through the Json extractor so that an
/// empty body and undecodable JSON each map to the documented 400 error
/// shape.
pub async fn populate_excel(State(state): State<Arc<AppState>>, body: Bytes) -> Response {
    if body.is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "missing request body");
    }

    let json: Value = match serde_json::from_slice(&body) {
        Ok(value) => value,
        Err(e) => {
            return error_response(StatusCode::BAD_REQUEST, format!("invalid JSON body: {e}"))
        }
    };
    let payload = ReportPayload::from_json(&json);

    let template = state.template_path.clone();
    let rendered =
        tokio::task::spawn_blocking(move || render_report(&template, &payload)).await;

    match rendered {
        Ok(Ok((bytes, outcome))) => (
            StatusCode::OK,
            [
                ("content-type", XLSX_MIME.to_string()),
                (
                    "content-disposition",
                    format!("attachment; filename=\"{}\"", download_filename()),
                ),
                ("x-request-id", Uuid::new_v4().to_string()),
                ("x-regions-filled", outcome.regions_filled.len().to_string()),
                ("x-regions-skipped", outcome.skipped.len().to_string()),
            ],
            bytes,
        )
            .into_response(),
        Ok(Err(e)) => {
            error!("report fill failed: {e}");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
        Err(e) => {
            error!("report fill panicked: {e}");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "internal error")
        }
    }
}
