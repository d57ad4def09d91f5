//! Assignment create and status update DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Assignment, AssignmentKind, TablePresence, VehicleStatus};

/// Kind of assignment to create.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentKindDto {
    /// Shuttle vehicle seat; starts `pending`.
    Vehicle,
    /// Table seat; starts `absent`.
    Table,
}

/// Request body for `POST /programmes/{id}/assignments`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateAssignmentRequest {
    /// Participant to assign.
    pub participant_id: uuid::Uuid,
    /// Vehicle or table.
    pub kind: AssignmentKindDto,
    /// Vehicle or table label.
    pub label: String,
}

impl CreateAssignmentRequest {
    /// Builds the initial assignment detail.
    #[must_use]
    pub fn initial_kind(&self) -> AssignmentKind {
        let label = self.label.trim().to_string();
        match self.kind {
            AssignmentKindDto::Vehicle => AssignmentKind::Vehicle {
                label,
                status: VehicleStatus::Pending,
            },
            AssignmentKindDto::Table => AssignmentKind::Table {
                label,
                presence: TablePresence::Absent,
            },
        }
    }
}

/// Request body for `PATCH /assignments/{id}/vehicle-status`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateVehicleStatusRequest {
    /// New status; may not move backwards.
    pub status: VehicleStatus,
}

/// Request body for `PATCH /assignments/{id}/table-presence`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateTablePresenceRequest {
    /// New presence flag.
    pub presence: TablePresence,
}

/// Assignment as returned by create and update endpoints.
#[derive(Debug, Serialize, ToSchema)]
pub struct AssignmentResponse {
    /// Assignment identifier.
    pub id: uuid::Uuid,
    /// Programme identifier.
    pub programme_id: uuid::Uuid,
    /// Participant identifier.
    pub participant_id: uuid::Uuid,
    /// `"vehicle"` or `"table"`.
    pub kind: String,
    /// Vehicle or table label.
    pub label: String,
    /// Vehicle status, for vehicle assignments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<VehicleStatus>,
    /// Presence flag, for table assignments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub presence: Option<TablePresence>,
}

impl From<Assignment> for AssignmentResponse {
    fn from(a: Assignment) -> Self {
        let (kind, label, status, presence) = match a.kind {
            AssignmentKind::Vehicle { label, status } => ("vehicle", label, Some(status), None),
            AssignmentKind::Table { label, presence } => ("table", label, None, Some(presence)),
        };
        Self {
            id: *a.id.as_uuid(),
            programme_id: *a.programme_id.as_uuid(),
            participant_id: *a.participant_id.as_uuid(),
            kind: kind.to_string(),
            label,
            status,
            presence,
        }
    }
}
