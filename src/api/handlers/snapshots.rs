//! Snapshot push handlers: upstream systems replace whole collections.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::put;
use axum::{Json, Router};

use crate::api::dto::SnapshotAck;
use crate::app_state::AppState;
use crate::domain::{Assignment, Attendance, Participant, Programme};

/// `PUT /snapshots/programmes`: Replace the programme snapshot.
#[utoipa::path(
    put,
    path = "/api/v1/snapshots/programmes",
    tag = "Snapshots",
    summary = "Replace programmes",
    description = "Replaces every programme record. Malformed timestamps are accepted and treated as absent.",
    request_body = Vec<Programme>,
    responses(
        (status = 200, description = "Snapshot replaced", body = SnapshotAck),
        (status = 400, description = "Body is not valid JSON", body = String, content_type = "text/plain"),
        (status = 415, description = "Missing `application/json` content type", body = String, content_type = "text/plain"),
        (status = 422, description = "JSON does not match the record shape", body = String, content_type = "text/plain"),
    )
)]
pub async fn put_programmes(
    State(state): State<AppState>,
    Json(programmes): Json<Vec<Programme>>,
) -> impl IntoResponse {
    let replaced = state.kit_service.replace_programmes(programmes).await;
    Json(SnapshotAck { replaced })
}

/// `PUT /snapshots/participants`: Replace the participant snapshot.
#[utoipa::path(
    put,
    path = "/api/v1/snapshots/participants",
    tag = "Snapshots",
    summary = "Replace participants",
    request_body = Vec<Participant>,
    responses(
        (status = 200, description = "Snapshot replaced", body = SnapshotAck),
        (status = 400, description = "Body is not valid JSON", body = String, content_type = "text/plain"),
        (status = 415, description = "Missing `application/json` content type", body = String, content_type = "text/plain"),
        (status = 422, description = "JSON does not match the record shape", body = String, content_type = "text/plain"),
    )
)]
pub async fn put_participants(
    State(state): State<AppState>,
    Json(participants): Json<Vec<Participant>>,
) -> impl IntoResponse {
    let replaced = state.kit_service.replace_participants(participants).await;
    Json(SnapshotAck { replaced })
}

/// `PUT /snapshots/assignments`: Replace the assignment snapshot.
#[utoipa::path(
    put,
    path = "/api/v1/snapshots/assignments",
    tag = "Snapshots",
    summary = "Replace assignments",
    request_body = Vec<Assignment>,
    responses(
        (status = 200, description = "Snapshot replaced", body = SnapshotAck),
        (status = 400, description = "Body is not valid JSON", body = String, content_type = "text/plain"),
        (status = 415, description = "Missing `application/json` content type", body = String, content_type = "text/plain"),
        (status = 422, description = "JSON does not match the record shape", body = String, content_type = "text/plain"),
    )
)]
pub async fn put_assignments(
    State(state): State<AppState>,
    Json(assignments): Json<Vec<Assignment>>,
) -> impl IntoResponse {
    let replaced = state.kit_service.replace_assignments(assignments).await;
    Json(SnapshotAck { replaced })
}

/// `PUT /snapshots/attendance`: Replace the attendance snapshot.
#[utoipa::path(
    put,
    path = "/api/v1/snapshots/attendance",
    tag = "Snapshots",
    summary = "Replace attendance check-ins",
    request_body = Vec<Attendance>,
    responses(
        (status = 200, description = "Snapshot replaced", body = SnapshotAck),
        (status = 400, description = "Body is not valid JSON", body = String, content_type = "text/plain"),
        (status = 415, description = "Missing `application/json` content type", body = String, content_type = "text/plain"),
        (status = 422, description = "JSON does not match the record shape", body = String, content_type = "text/plain"),
    )
)]
pub async fn put_attendance(
    State(state): State<AppState>,
    Json(attendance): Json<Vec<Attendance>>,
) -> impl IntoResponse {
    let replaced = state.kit_service.replace_attendance(attendance).await;
    Json(SnapshotAck { replaced })
}

/// Snapshot routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/snapshots/programmes", put(put_programmes))
        .route("/snapshots/participants", put(put_participants))
        .route("/snapshots/assignments", put(put_assignments))
        .route("/snapshots/attendance", put(put_attendance))
}
