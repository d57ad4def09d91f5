//! Certificate printing and event kit DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{KitAccess, Signatory};

/// Request body for `POST /programmes/{id}/certificates`.
///
/// Recipients are taken from `participant_ids` (looked up in the
/// participant snapshot) followed by `names` (printed as given).
#[derive(Debug, Deserialize, ToSchema)]
pub struct CertificateBatchRequest {
    /// Signatory printed on every certificate.
    #[serde(default)]
    pub signatory: Signatory,
    /// Registered participants to print for, in order.
    #[serde(default)]
    pub participant_ids: Vec<uuid::Uuid>,
    /// Extra free-form recipient names, in order.
    #[serde(default)]
    pub names: Vec<String>,
}

/// Request body for `POST /programmes/{id}/certificates/{participant_id}`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct OwnCertificateRequest {
    /// Signatory printed on the certificate.
    #[serde(default)]
    pub signatory: Signatory,
}

/// Query for `GET /programmes/{id}/kit`.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct KitParams {
    /// Participant requesting the kit.
    pub participant_id: uuid::Uuid,
}

/// Response body for `GET /programmes/{id}/kit`.
#[derive(Debug, Serialize, ToSchema)]
pub struct KitAccessResponse {
    /// Programme identifier.
    pub programme_id: uuid::Uuid,
    /// Participant identifier.
    pub participant_id: uuid::Uuid,
    /// Whether the kit is unlocked.
    pub granted: bool,
    /// Earliest check-in, when granted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checked_in_at: Option<DateTime<Utc>>,
}

impl KitAccessResponse {
    /// Builds the response from an access decision.
    #[must_use]
    pub fn new(programme_id: uuid::Uuid, participant_id: uuid::Uuid, access: KitAccess) -> Self {
        let checked_in_at = match access {
            KitAccess::Granted { checked_in_at } => Some(checked_in_at),
            KitAccess::Locked => None,
        };
        Self {
            programme_id,
            participant_id,
            granted: access.is_granted(),
            checked_in_at,
        }
    }
}
