//! Vehicle and table assignments.
//!
//! An assignment ties one participant to a vehicle seat or a dinner table
//! for one programme. Assignments are created by administrators and then
//! only ever mutated through status updates.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::participant::Participant;
use super::roster::Searchable;
use super::{AssignmentId, ParticipantId, ProgrammeId};
use crate::error::KitError;

/// Shuttle progress for a vehicle assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum VehicleStatus {
    /// Waiting to be picked up.
    Pending,
    /// On board.
    PickedUp,
    /// Arrived at the drop-off point.
    DroppedOff,
}

impl VehicleStatus {
    const fn rank(self) -> u8 {
        match self {
            Self::Pending => 0,
            Self::PickedUp => 1,
            Self::DroppedOff => 2,
        }
    }

    /// Returns `true` if moving from `self` to `next` does not go backwards.
    #[must_use]
    pub const fn can_advance_to(self, next: Self) -> bool {
        next.rank() >= self.rank()
    }

    /// Returns the snake_case wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::PickedUp => "picked_up",
            Self::DroppedOff => "dropped_off",
        }
    }
}

/// Attendance at an assigned table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum TablePresence {
    /// Seated at the table.
    Present,
    /// Not seated.
    Absent,
}

/// What was assigned, with its current status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AssignmentKind {
    /// A seat in a shuttle vehicle.
    Vehicle {
        /// Vehicle label (plate number or shuttle name).
        label: String,
        /// Pickup progress.
        status: VehicleStatus,
    },
    /// A seat at a numbered table.
    Table {
        /// Table label.
        label: String,
        /// Presence flag.
        presence: TablePresence,
    },
}

impl AssignmentKind {
    /// Vehicle or table label.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Vehicle { label, .. } | Self::Table { label, .. } => label,
        }
    }
}

/// A participant's vehicle or table assignment for one programme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Assignment {
    /// Assignment identifier.
    #[schema(value_type = uuid::Uuid)]
    pub id: AssignmentId,
    /// Programme the assignment belongs to.
    #[schema(value_type = uuid::Uuid)]
    pub programme_id: ProgrammeId,
    /// Assigned participant.
    #[schema(value_type = uuid::Uuid)]
    pub participant_id: ParticipantId,
    /// Vehicle or table detail.
    #[serde(flatten)]
    pub kind: AssignmentKind,
}

impl Assignment {
    /// Returns `true` for vehicle assignments.
    #[must_use]
    pub const fn is_vehicle(&self) -> bool {
        matches!(self.kind, AssignmentKind::Vehicle { .. })
    }

    /// Returns `true` for table assignments.
    #[must_use]
    pub const fn is_table(&self) -> bool {
        matches!(self.kind, AssignmentKind::Table { .. })
    }

    /// Moves a vehicle assignment to `next`.
    ///
    /// Returns `Ok(true)` if the status changed and `Ok(false)` if it was
    /// already `next`.
    ///
    /// # Errors
    ///
    /// Returns [`KitError::WrongAssignmentKind`] for table assignments and
    /// [`KitError::InvalidTransition`] when `next` would move backwards.
    pub fn advance_vehicle(&mut self, next: VehicleStatus) -> Result<bool, KitError> {
        let AssignmentKind::Vehicle { status, .. } = &mut self.kind else {
            return Err(KitError::WrongAssignmentKind(*self.id.as_uuid()));
        };
        if !status.can_advance_to(next) {
            return Err(KitError::InvalidTransition {
                from: status.as_str(),
                to: next.as_str(),
            });
        }
        let changed = *status != next;
        *status = next;
        Ok(changed)
    }

    /// Sets table presence. Presence may toggle freely.
    ///
    /// # Errors
    ///
    /// Returns [`KitError::WrongAssignmentKind`] for vehicle assignments.
    pub fn set_presence(&mut self, next: TablePresence) -> Result<bool, KitError> {
        let AssignmentKind::Table { presence, .. } = &mut self.kind else {
            return Err(KitError::WrongAssignmentKind(*self.id.as_uuid()));
        };
        let changed = *presence != next;
        *presence = next;
        Ok(changed)
    }
}

/// An assignment joined with its participant for roster display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssignmentRow {
    /// The assignment.
    pub assignment: Assignment,
    /// The assigned participant.
    pub participant: Participant,
}

impl Searchable for AssignmentRow {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.participant.name.as_str(),
            self.participant.email.as_str(),
            self.participant.display_id.as_str(),
            self.assignment.kind.label(),
        ]
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn vehicle(status: VehicleStatus) -> Assignment {
        Assignment {
            id: AssignmentId::new(),
            programme_id: ProgrammeId::new(),
            participant_id: ParticipantId::new(),
            kind: AssignmentKind::Vehicle {
                label: "Shuttle 3".to_string(),
                status,
            },
        }
    }

    fn table() -> Assignment {
        Assignment {
            kind: AssignmentKind::Table {
                label: "Table 12".to_string(),
                presence: TablePresence::Absent,
            },
            ..vehicle(VehicleStatus::Pending)
        }
    }

    #[test]
    fn vehicle_moves_forward() {
        let mut a = vehicle(VehicleStatus::Pending);
        assert!(matches!(a.advance_vehicle(VehicleStatus::PickedUp), Ok(true)));
        assert!(matches!(a.advance_vehicle(VehicleStatus::DroppedOff), Ok(true)));
        assert!(matches!(
            a.kind,
            AssignmentKind::Vehicle { status: VehicleStatus::DroppedOff, .. }
        ));
    }

    #[test]
    fn same_status_is_a_no_op() {
        let mut a = vehicle(VehicleStatus::PickedUp);
        assert!(matches!(a.advance_vehicle(VehicleStatus::PickedUp), Ok(false)));
    }

    #[test]
    fn vehicle_cannot_move_backwards() {
        let mut a = vehicle(VehicleStatus::DroppedOff);
        let result = a.advance_vehicle(VehicleStatus::Pending);
        assert!(matches!(
            result,
            Err(KitError::InvalidTransition { from: "dropped_off", to: "pending" })
        ));
    }

    #[test]
    fn presence_toggles_and_kinds_are_checked() {
        let mut t = table();
        assert!(matches!(t.set_presence(TablePresence::Present), Ok(true)));
        assert!(matches!(t.set_presence(TablePresence::Absent), Ok(true)));
        assert!(matches!(
            t.advance_vehicle(VehicleStatus::PickedUp),
            Err(KitError::WrongAssignmentKind(_))
        ));
        let mut v = vehicle(VehicleStatus::Pending);
        assert!(matches!(
            v.set_presence(TablePresence::Present),
            Err(KitError::WrongAssignmentKind(_))
        ));
    }

    #[test]
    fn wire_shape_is_flat_and_tagged() {
        let a = vehicle(VehicleStatus::PickedUp);
        let Ok(value) = serde_json::to_value(&a) else {
            panic!("serialization failed");
        };
        assert_eq!(value.get("kind"), Some(&serde_json::json!("vehicle")));
        assert_eq!(value.get("status"), Some(&serde_json::json!("picked_up")));
        assert_eq!(value.get("label"), Some(&serde_json::json!("Shuttle 3")));
    }

    #[test]
    fn rows_search_the_label() {
        let row = AssignmentRow {
            assignment: vehicle(VehicleStatus::Pending),
            participant: Participant {
                id: ParticipantId::new(),
                name: "Jane Cruz".to_string(),
                email: "jane@example.org".to_string(),
                display_id: "REG-0042".to_string(),
            },
        };
        assert!(row.search_fields().contains(&"Shuttle 3"));
        assert!(row.search_fields().contains(&"REG-0042"));
    }
}
