//! Gateway error types with HTTP status code mapping.
//!
//! [`KitError`] is the single error type for the service and HTTP layers.
//! The pure view functions never produce one; they degrade to sentinels or
//! `None` instead.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

/// Structured JSON error response body.
///
/// All error responses follow this shape:
/// ```json
/// {
///   "error": {
///     "code": 2001,
///     "message": "programme not found: 6f1c...",
///     "details": null
///   }
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Structured error payload.
    pub error: ErrorBody,
}

/// Inner error body with numeric code and human-readable message.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Numeric error code.
    pub code: u32,
    /// Human-readable error message.
    pub message: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Service-level error with HTTP status code mapping.
///
/// # Error Code Ranges
///
/// | Range     | Category        | HTTP Status                  |
/// |-----------|-----------------|------------------------------|
/// | 1000–1999 | Validation      | 400 Bad Request              |
/// | 2000–2999 | Not Found       | 404 Not Found                |
/// | 3000–3999 | Server          | 500 Internal Server Error    |
/// | 4000–4999 | State / Access  | 403 / 409 / 422              |
#[derive(Debug, thiserror::Error)]
pub enum KitError {
    /// Request validation failed.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Page size outside the enumerated options.
    #[error("invalid page size {0}; expected one of 1, 10, 100, 1000")]
    InvalidPageSize(u32),

    /// Programme with the given id was not found.
    #[error("programme not found: {0}")]
    ProgrammeNotFound(uuid::Uuid),

    /// Participant with the given id was not found.
    #[error("participant not found: {0}")]
    ParticipantNotFound(uuid::Uuid),

    /// Assignment with the given id was not found.
    #[error("assignment not found: {0}")]
    AssignmentNotFound(uuid::Uuid),

    /// Status update targeted the wrong kind of assignment.
    #[error("assignment {0} does not support this status update")]
    WrongAssignmentKind(uuid::Uuid),

    /// Vehicle status would move backwards.
    #[error("cannot move vehicle status from {from} to {to}")]
    InvalidTransition {
        /// Current status.
        from: &'static str,
        /// Requested status.
        to: &'static str,
    },

    /// Event kit requested without an attendance record.
    #[error("no attendance recorded for participant {participant} at programme {programme}")]
    KitLocked {
        /// Programme id.
        programme: uuid::Uuid,
        /// Participant id.
        participant: uuid::Uuid,
    },

    /// Certificate batch produced no printable certificate.
    #[error("nothing to print: no participant with a printable name")]
    EmptyCertificateBatch,

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl KitError {
    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::InvalidRequest(_) => 1001,
            Self::InvalidPageSize(_) => 1002,
            Self::ProgrammeNotFound(_) => 2001,
            Self::ParticipantNotFound(_) => 2002,
            Self::AssignmentNotFound(_) => 2003,
            Self::Internal(_) => 3000,
            Self::WrongAssignmentKind(_) => 4001,
            Self::InvalidTransition { .. } => 4002,
            Self::KitLocked { .. } => 4003,
            Self::EmptyCertificateBatch => 4004,
        }
    }

    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) | Self::InvalidPageSize(_) => StatusCode::BAD_REQUEST,
            Self::ProgrammeNotFound(_)
            | Self::ParticipantNotFound(_)
            | Self::AssignmentNotFound(_) => StatusCode::NOT_FOUND,
            Self::WrongAssignmentKind(_) | Self::InvalidTransition { .. } => StatusCode::CONFLICT,
            Self::KitLocked { .. } => StatusCode::FORBIDDEN,
            Self::EmptyCertificateBatch => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for KitError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, "request rejected");
        }
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.error_code(),
                message: self.to_string(),
                details: None,
            },
        };
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}
