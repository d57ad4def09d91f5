//! Roster handlers: searchable, paginated participant and assignment lists.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::{
    AssignmentRosterResponse, AssignmentRowDto, PaginationMeta, ParticipantRosterResponse,
    RosterParams,
};
use crate::app_state::AppState;
use crate::domain::{AssignmentRow, Page, ProgrammeId};
use crate::error::{ErrorResponse, KitError};

/// `GET /rosters/participants`: Search and page registered participants.
///
/// # Errors
///
/// Returns [`KitError::InvalidPageSize`] for an unlisted page size.
#[utoipa::path(
    get,
    path = "/api/v1/rosters/participants",
    tag = "Rosters",
    summary = "Participant roster",
    description = "Matches `q` against name, email, and registration number, then pages the result.",
    params(RosterParams),
    responses(
        (status = 200, description = "Roster page", body = ParticipantRosterResponse),
        (status = 400, description = "Invalid page size", body = ErrorResponse),
    )
)]
pub async fn participant_roster(
    State(state): State<AppState>,
    Query(params): Query<RosterParams>,
) -> Result<impl IntoResponse, KitError> {
    let query = params.into_query(state.default_page_size)?;
    let page = state.kit_service.participant_roster(&query).await;
    let pagination = PaginationMeta::from(&page);
    Ok(Json(ParticipantRosterResponse {
        data: page.items,
        pagination,
    }))
}

/// `GET /programmes/{id}/rosters/vehicles`: Search and page vehicle
/// assignments.
///
/// # Errors
///
/// Returns [`KitError`] for an unknown programme or invalid page size.
#[utoipa::path(
    get,
    path = "/api/v1/programmes/{id}/rosters/vehicles",
    tag = "Rosters",
    summary = "Vehicle roster",
    description = "Matches `q` against participant name, email, registration number, and vehicle label.",
    params(
        ("id" = uuid::Uuid, Path, description = "Programme UUID"),
        RosterParams,
    ),
    responses(
        (status = 200, description = "Roster page", body = AssignmentRosterResponse),
        (status = 400, description = "Invalid page size", body = ErrorResponse),
        (status = 404, description = "Programme not found", body = ErrorResponse),
    )
)]
pub async fn vehicle_roster(
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
    Query(params): Query<RosterParams>,
) -> Result<impl IntoResponse, KitError> {
    let query = params.into_query(state.default_page_size)?;
    let page = state
        .kit_service
        .vehicle_roster(ProgrammeId::from_uuid(id), &query)
        .await?;
    Ok(Json(assignment_page(page)))
}

/// `GET /programmes/{id}/rosters/tables`: Search and page table
/// assignments.
///
/// # Errors
///
/// Returns [`KitError`] for an unknown programme or invalid page size.
#[utoipa::path(
    get,
    path = "/api/v1/programmes/{id}/rosters/tables",
    tag = "Rosters",
    summary = "Table roster",
    description = "Matches `q` against participant name, email, registration number, and table label.",
    params(
        ("id" = uuid::Uuid, Path, description = "Programme UUID"),
        RosterParams,
    ),
    responses(
        (status = 200, description = "Roster page", body = AssignmentRosterResponse),
        (status = 400, description = "Invalid page size", body = ErrorResponse),
        (status = 404, description = "Programme not found", body = ErrorResponse),
    )
)]
pub async fn table_roster(
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
    Query(params): Query<RosterParams>,
) -> Result<impl IntoResponse, KitError> {
    let query = params.into_query(state.default_page_size)?;
    let page = state
        .kit_service
        .table_roster(ProgrammeId::from_uuid(id), &query)
        .await?;
    Ok(Json(assignment_page(page)))
}

fn assignment_page(page: Page<AssignmentRow>) -> AssignmentRosterResponse {
    let pagination = PaginationMeta::from(&page);
    AssignmentRosterResponse {
        data: page.items.into_iter().map(AssignmentRowDto::from).collect(),
        pagination,
    }
}

/// Roster routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/rosters/participants", get(participant_roster))
        .route("/programmes/{id}/rosters/vehicles", get(vehicle_roster))
        .route("/programmes/{id}/rosters/tables", get(table_roster))
}
