//! Programme listing handlers: phase sections and single programme.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::{NowParams, ProgrammeDto, ProgrammeSectionsResponse};
use crate::app_state::AppState;
use crate::domain::{Phase, Programme, ProgrammeId};
use crate::error::{ErrorResponse, KitError};

/// `GET /programmes`: Programmes grouped by phase.
///
/// # Errors
///
/// Returns [`KitError::InvalidRequest`] if `now` cannot be parsed.
#[utoipa::path(
    get,
    path = "/api/v1/programmes",
    tag = "Programmes",
    summary = "List programmes by phase",
    description = "Classifies every programme as upcoming, ongoing, or closed relative to `now` (default: server time) in the configured event zone.",
    params(NowParams),
    responses(
        (status = 200, description = "Programme sections", body = ProgrammeSectionsResponse),
        (status = 400, description = "Unparseable `now`", body = ErrorResponse),
    )
)]
pub async fn list_programmes(
    State(state): State<AppState>,
    Query(params): Query<NowParams>,
) -> Result<impl IntoResponse, KitError> {
    let zone = *state.kit_service.event_zone();
    let now = params.resolve(&zone)?;
    let groups = state.kit_service.programmes_by_phase(now).await;

    let section = |programmes: Vec<Programme>, phase: Phase| {
        programmes
            .iter()
            .map(|p| ProgrammeDto::new(p, phase, &zone))
            .collect::<Vec<_>>()
    };

    Ok(Json(ProgrammeSectionsResponse {
        now,
        upcoming: section(groups.upcoming, Phase::Upcoming),
        ongoing: section(groups.ongoing, Phase::Ongoing),
        closed: section(groups.closed, Phase::Closed),
    }))
}

/// `GET /programmes/{id}`: One programme with its phase.
///
/// # Errors
///
/// Returns [`KitError::ProgrammeNotFound`] for an unknown id.
#[utoipa::path(
    get,
    path = "/api/v1/programmes/{id}",
    tag = "Programmes",
    summary = "Get programme",
    params(
        ("id" = uuid::Uuid, Path, description = "Programme UUID"),
        NowParams,
    ),
    responses(
        (status = 200, description = "Programme detail", body = ProgrammeDto),
        (status = 404, description = "Programme not found", body = ErrorResponse),
    )
)]
pub async fn get_programme(
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
    Query(params): Query<NowParams>,
) -> Result<impl IntoResponse, KitError> {
    let zone = *state.kit_service.event_zone();
    let now = params.resolve(&zone)?;
    let (programme, phase) = state
        .kit_service
        .programme_phase(ProgrammeId::from_uuid(id), now)
        .await?;
    Ok(Json(ProgrammeDto::new(&programme, phase, &zone)))
}

/// Programme routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/programmes", get(list_programmes))
        .route("/programmes/{id}", get(get_programme))
}
