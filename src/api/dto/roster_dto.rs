//! Roster page DTOs.

use serde::Serialize;
use utoipa::ToSchema;

use super::common_dto::PaginationMeta;
use crate::domain::{AssignmentKind, AssignmentRow, Participant, TablePresence, VehicleStatus};

/// Paginated participant roster.
#[derive(Debug, Serialize, ToSchema)]
pub struct ParticipantRosterResponse {
    /// Participants on this page.
    pub data: Vec<Participant>,
    /// Pagination metadata.
    pub pagination: PaginationMeta,
}

/// One assignment roster line.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AssignmentRowDto {
    /// Assignment identifier.
    pub assignment_id: uuid::Uuid,
    /// Participant identifier.
    pub participant_id: uuid::Uuid,
    /// Participant name.
    pub name: String,
    /// Participant email.
    pub email: String,
    /// Registration number.
    pub display_id: String,
    /// Vehicle or table label.
    pub label: String,
    /// Vehicle status, for vehicle rosters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<VehicleStatus>,
    /// Presence flag, for table rosters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub presence: Option<TablePresence>,
}

impl From<AssignmentRow> for AssignmentRowDto {
    fn from(row: AssignmentRow) -> Self {
        let (label, status, presence) = match row.assignment.kind {
            AssignmentKind::Vehicle { label, status } => (label, Some(status), None),
            AssignmentKind::Table { label, presence } => (label, None, Some(presence)),
        };
        Self {
            assignment_id: *row.assignment.id.as_uuid(),
            participant_id: *row.participant.id.as_uuid(),
            name: row.participant.name,
            email: row.participant.email,
            display_id: row.participant.display_id,
            label,
            status,
            presence,
        }
    }
}

/// Paginated vehicle or table roster.
#[derive(Debug, Serialize, ToSchema)]
pub struct AssignmentRosterResponse {
    /// Roster lines on this page.
    pub data: Vec<AssignmentRowDto>,
    /// Pagination metadata.
    pub pagination: PaginationMeta,
}
