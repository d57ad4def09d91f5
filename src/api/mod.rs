//! REST API layer: route handlers, DTOs, and router composition.
//!
//! All resource endpoints are mounted under `/api/v1`. With the
//! `swagger-ui` feature the OpenAPI document is served at
//! `/api-docs/openapi.json` and browsable at `/swagger-ui`.

pub mod dto;
pub mod handlers;

use axum::Router;
use utoipa::OpenApi;

use crate::app_state::AppState;

/// OpenAPI description of every REST endpoint.
#[derive(Debug, OpenApi)]
#[openapi(
    info(title = "eventkit-gateway"),
    paths(
        handlers::system::health_handler,
        handlers::system::page_sizes_handler,
        handlers::snapshots::put_programmes,
        handlers::snapshots::put_participants,
        handlers::snapshots::put_assignments,
        handlers::snapshots::put_attendance,
        handlers::programmes::list_programmes,
        handlers::programmes::get_programme,
        handlers::rosters::participant_roster,
        handlers::rosters::vehicle_roster,
        handlers::rosters::table_roster,
        handlers::assignments::create_assignment,
        handlers::assignments::update_vehicle_status,
        handlers::assignments::update_table_presence,
        handlers::certificates::kit_access,
        handlers::certificates::print_batch,
        handlers::certificates::print_own,
    )
)]
pub struct ApiDoc;

/// Builds the complete API router with all REST endpoints.
pub fn build_router() -> Router<AppState> {
    let router = Router::new()
        .nest("/api/v1", handlers::routes())
        .merge(handlers::system::routes());

    #[cfg(feature = "swagger-ui")]
    let router = router.merge(
        utoipa_swagger_ui::SwaggerUi::new("/swagger-ui")
            .url("/api-docs/openapi.json", ApiDoc::openapi()),
    );

    router
}
