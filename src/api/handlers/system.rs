//! System endpoints: health check and page size catalog.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde::Serialize;
use utoipa::ToSchema;

use crate::app_state::AppState;
use crate::domain::PageSize;

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
struct HealthResponse {
    status: String,
    timestamp: String,
    version: String,
    event_utc_offset: String,
}

/// `GET /health`: Service health status.
#[utoipa::path(
    get,
    path = "/health",
    tag = "System",
    summary = "Health check",
    description = "Returns service health status, version, current timestamp, and the configured event zone.",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
    )
)]
pub async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            event_utc_offset: state.kit_service.event_zone().to_string(),
        }),
    )
}

/// Page size catalog.
#[derive(Debug, Serialize, ToSchema)]
struct PageSizeCatalog {
    options: Vec<u32>,
    default: u32,
}

/// `GET /config/page-sizes`: List selectable roster page sizes.
#[utoipa::path(
    get,
    path = "/config/page-sizes",
    tag = "System",
    summary = "List roster page sizes",
    description = "Returns the page sizes roster endpoints accept and the default used when none is given.",
    responses(
        (status = 200, description = "Page size catalog", body = PageSizeCatalog),
    )
)]
pub async fn page_sizes_handler(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(PageSizeCatalog {
            options: PageSize::OPTIONS.into_iter().map(u32::from).collect(),
            default: state.default_page_size.into(),
        }),
    )
}

/// System routes mounted at the root level (not under /api/v1).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_handler))
        .route("/config/page-sizes", get(page_sizes_handler))
}
