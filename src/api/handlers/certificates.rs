//! Event kit and certificate printing handlers.

use axum::extract::{Path, Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::api::dto::{
    CertificateBatchRequest, KitAccessResponse, KitParams, OwnCertificateRequest,
};
use crate::app_state::AppState;
use crate::domain::{CertificateDocument, ParticipantId, ProgrammeId, Recipient};
use crate::error::{ErrorResponse, KitError};

/// Header carrying the number of certificates in a printed document.
pub const CERTIFICATE_COUNT_HEADER: &str = "x-certificate-count";

/// `GET /programmes/{id}/kit`: Check event kit access.
///
/// # Errors
///
/// Returns [`KitError`] for an unknown programme or participant.
#[utoipa::path(
    get,
    path = "/api/v1/programmes/{id}/kit",
    tag = "Event Kit",
    summary = "Event kit access",
    description = "The kit unlocks once the participant has an attendance check-in for the programme.",
    params(
        ("id" = uuid::Uuid, Path, description = "Programme UUID"),
        KitParams,
    ),
    responses(
        (status = 200, description = "Access decision", body = KitAccessResponse),
        (status = 404, description = "Programme or participant not found", body = ErrorResponse),
    )
)]
pub async fn kit_access(
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
    Query(params): Query<KitParams>,
) -> Result<impl IntoResponse, KitError> {
    let access = state
        .kit_service
        .kit_access(
            ProgrammeId::from_uuid(id),
            ParticipantId::from_uuid(params.participant_id),
        )
        .await?;
    Ok(Json(KitAccessResponse::new(id, params.participant_id, access)))
}

/// `POST /programmes/{id}/certificates`: Print a certificate batch.
///
/// # Errors
///
/// Returns [`KitError::EmptyCertificateBatch`] when nothing is printable,
/// or a not-found error for unknown ids.
#[utoipa::path(
    post,
    path = "/api/v1/programmes/{id}/certificates",
    tag = "Certificates",
    summary = "Print certificate batch",
    description = "Returns one self-contained HTML document with a certificate per recipient, in request order.",
    params(
        ("id" = uuid::Uuid, Path, description = "Programme UUID"),
    ),
    request_body = CertificateBatchRequest,
    responses(
        (status = 200, description = "Printable HTML document", body = String, content_type = "text/html"),
        (status = 404, description = "Programme or participant not found", body = ErrorResponse),
        (status = 422, description = "No printable recipient", body = ErrorResponse),
    )
)]
pub async fn print_batch(
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
    Json(req): Json<CertificateBatchRequest>,
) -> Result<Response, KitError> {
    let ids: Vec<ParticipantId> = req
        .participant_ids
        .iter()
        .copied()
        .map(ParticipantId::from_uuid)
        .collect();
    let mut recipients = state.kit_service.recipients_for(&ids).await?;
    recipients.extend(req.names.into_iter().map(Recipient::new));

    let document = state
        .kit_service
        .build_certificates(ProgrammeId::from_uuid(id), &req.signatory, &recipients)
        .await?;
    Ok(html_response(document))
}

/// `POST /programmes/{id}/certificates/{participant_id}`: Print a
/// participant's own certificate from the event kit.
///
/// # Errors
///
/// Returns [`KitError::KitLocked`] without an attendance check-in, or a
/// not-found error for unknown ids.
#[utoipa::path(
    post,
    path = "/api/v1/programmes/{id}/certificates/{participant_id}",
    tag = "Certificates",
    summary = "Print own certificate",
    params(
        ("id" = uuid::Uuid, Path, description = "Programme UUID"),
        ("participant_id" = uuid::Uuid, Path, description = "Participant UUID"),
    ),
    request_body = OwnCertificateRequest,
    responses(
        (status = 200, description = "Printable HTML document", body = String, content_type = "text/html"),
        (status = 403, description = "Kit locked", body = ErrorResponse),
        (status = 404, description = "Programme or participant not found", body = ErrorResponse),
    )
)]
pub async fn print_own(
    State(state): State<AppState>,
    Path((id, participant_id)): Path<(uuid::Uuid, uuid::Uuid)>,
    Json(req): Json<OwnCertificateRequest>,
) -> Result<Response, KitError> {
    let document = state
        .kit_service
        .build_own_certificate(
            ProgrammeId::from_uuid(id),
            ParticipantId::from_uuid(participant_id),
            &req.signatory,
        )
        .await?;
    Ok(html_response(document))
}

fn html_response(document: CertificateDocument) -> Response {
    (
        [
            (header::CONTENT_TYPE, "text/html; charset=utf-8".to_string()),
            (
                header::HeaderName::from_static(CERTIFICATE_COUNT_HEADER),
                document.certificate_count.to_string(),
            ),
        ],
        document.html,
    )
        .into_response()
}

/// Event kit and certificate routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/programmes/{id}/kit", get(kit_access))
        .route("/programmes/{id}/certificates", post(print_batch))
        .route(
            "/programmes/{id}/certificates/{participant_id}",
            post(print_own),
        )
}
