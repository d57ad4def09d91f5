//! Assignment handlers: create, vehicle status, table presence.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{patch, post};
use axum::{Json, Router};

use crate::api::dto::{
    AssignmentResponse, CreateAssignmentRequest, UpdateTablePresenceRequest,
    UpdateVehicleStatusRequest,
};
use crate::app_state::AppState;
use crate::domain::{AssignmentId, ParticipantId, ProgrammeId};
use crate::error::{ErrorResponse, KitError};

/// `POST /programmes/{id}/assignments`: Assign a participant to a vehicle
/// or table.
///
/// # Errors
///
/// Returns [`KitError`] for unknown ids, a blank label, or a duplicate.
#[utoipa::path(
    post,
    path = "/api/v1/programmes/{id}/assignments",
    tag = "Assignments",
    summary = "Create assignment",
    description = "Vehicle assignments start `pending`; table assignments start `absent`.",
    params(
        ("id" = uuid::Uuid, Path, description = "Programme UUID"),
    ),
    request_body = CreateAssignmentRequest,
    responses(
        (status = 201, description = "Assignment created", body = AssignmentResponse),
        (status = 400, description = "Blank label or duplicate", body = ErrorResponse),
        (status = 404, description = "Programme or participant not found", body = ErrorResponse),
    )
)]
pub async fn create_assignment(
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
    Json(req): Json<CreateAssignmentRequest>,
) -> Result<impl IntoResponse, KitError> {
    let assignment = state
        .kit_service
        .create_assignment(
            ProgrammeId::from_uuid(id),
            ParticipantId::from_uuid(req.participant_id),
            req.initial_kind(),
        )
        .await?;
    Ok((StatusCode::CREATED, Json(AssignmentResponse::from(assignment))))
}

/// `PATCH /assignments/{id}/vehicle-status`: Advance a vehicle pickup.
///
/// # Errors
///
/// Returns [`KitError`] for an unknown id, a table assignment, or a
/// backwards transition.
#[utoipa::path(
    patch,
    path = "/api/v1/assignments/{id}/vehicle-status",
    tag = "Assignments",
    summary = "Update vehicle status",
    description = "Moves pending -> picked_up -> dropped_off. Re-sending the current status is a no-op; moving backwards is rejected.",
    params(
        ("id" = uuid::Uuid, Path, description = "Assignment UUID"),
    ),
    request_body = UpdateVehicleStatusRequest,
    responses(
        (status = 200, description = "Status updated", body = AssignmentResponse),
        (status = 404, description = "Assignment not found", body = ErrorResponse),
        (status = 409, description = "Not a vehicle assignment or backwards move", body = ErrorResponse),
    )
)]
pub async fn update_vehicle_status(
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
    Json(req): Json<UpdateVehicleStatusRequest>,
) -> Result<impl IntoResponse, KitError> {
    let assignment = state
        .kit_service
        .update_vehicle_status(AssignmentId::from_uuid(id), req.status)
        .await?;
    Ok(Json(AssignmentResponse::from(assignment)))
}

/// `PATCH /assignments/{id}/table-presence`: Mark table presence.
///
/// # Errors
///
/// Returns [`KitError`] for an unknown id or a vehicle assignment.
#[utoipa::path(
    patch,
    path = "/api/v1/assignments/{id}/table-presence",
    tag = "Assignments",
    summary = "Update table presence",
    params(
        ("id" = uuid::Uuid, Path, description = "Assignment UUID"),
    ),
    request_body = UpdateTablePresenceRequest,
    responses(
        (status = 200, description = "Presence updated", body = AssignmentResponse),
        (status = 404, description = "Assignment not found", body = ErrorResponse),
        (status = 409, description = "Not a table assignment", body = ErrorResponse),
    )
)]
pub async fn update_table_presence(
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
    Json(req): Json<UpdateTablePresenceRequest>,
) -> Result<impl IntoResponse, KitError> {
    let assignment = state
        .kit_service
        .update_table_presence(AssignmentId::from_uuid(id), req.presence)
        .await?;
    Ok(Json(AssignmentResponse::from(assignment)))
}

/// Assignment routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/programmes/{id}/assignments", post(create_assignment))
        .route("/assignments/{id}/vehicle-status", patch(update_vehicle_status))
        .route("/assignments/{id}/table-presence", patch(update_table_presence))
}
