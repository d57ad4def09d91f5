//! In-memory holder for the snapshots pushed by upstream systems.
//!
//! Each collection sits behind its own [`tokio::sync::RwLock`] so that a
//! roster read does not wait on an unrelated snapshot push. Readers get
//! clones; the pure view functions then run without holding any lock.

use tokio::sync::RwLock;

use super::{
    Assignment, AssignmentId, Attendance, Participant, ParticipantId, Programme, ProgrammeId,
};
use crate::error::KitError;

/// Latest snapshot of every record collection.
#[derive(Debug, Default)]
pub struct SnapshotStore {
    programmes: RwLock<Vec<Programme>>,
    participants: RwLock<Vec<Participant>>,
    assignments: RwLock<Vec<Assignment>>,
    attendance: RwLock<Vec<Attendance>>,
}

impl SnapshotStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces all programmes. Returns the new count.
    pub async fn replace_programmes(&self, programmes: Vec<Programme>) -> usize {
        let mut guard = self.programmes.write().await;
        *guard = programmes;
        guard.len()
    }

    /// Replaces all participants. Returns the new count.
    pub async fn replace_participants(&self, participants: Vec<Participant>) -> usize {
        let mut guard = self.participants.write().await;
        *guard = participants;
        guard.len()
    }

    /// Replaces all assignments. Returns the new count.
    pub async fn replace_assignments(&self, assignments: Vec<Assignment>) -> usize {
        let mut guard = self.assignments.write().await;
        *guard = assignments;
        guard.len()
    }

    /// Replaces all attendance records. Returns the new count.
    pub async fn replace_attendance(&self, attendance: Vec<Attendance>) -> usize {
        let mut guard = self.attendance.write().await;
        *guard = attendance;
        guard.len()
    }

    /// Returns every programme in snapshot order.
    pub async fn programmes(&self) -> Vec<Programme> {
        self.programmes.read().await.clone()
    }

    /// Returns every participant in snapshot order.
    pub async fn participants(&self) -> Vec<Participant> {
        self.participants.read().await.clone()
    }

    /// Returns every attendance record.
    pub async fn attendance(&self) -> Vec<Attendance> {
        self.attendance.read().await.clone()
    }

    /// Returns a programme by id.
    ///
    /// # Errors
    ///
    /// Returns [`KitError::ProgrammeNotFound`] if no such programme exists.
    pub async fn programme(&self, id: ProgrammeId) -> Result<Programme, KitError> {
        self.programmes
            .read()
            .await
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(KitError::ProgrammeNotFound(*id.as_uuid()))
    }

    /// Returns a participant by id.
    ///
    /// # Errors
    ///
    /// Returns [`KitError::ParticipantNotFound`] if no such participant
    /// exists.
    pub async fn participant(&self, id: ParticipantId) -> Result<Participant, KitError> {
        self.participants
            .read()
            .await
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(KitError::ParticipantNotFound(*id.as_uuid()))
    }

    /// Returns the assignments for one programme in snapshot order.
    pub async fn assignments_for(&self, programme_id: ProgrammeId) -> Vec<Assignment> {
        self.assignments
            .read()
            .await
            .iter()
            .filter(|a| a.programme_id == programme_id)
            .cloned()
            .collect()
    }

    /// Appends a new assignment.
    ///
    /// # Errors
    ///
    /// Returns [`KitError::InvalidRequest`] if an assignment with the same
    /// id, or of the same kind for the same participant and programme,
    /// already exists.
    pub async fn insert_assignment(&self, assignment: Assignment) -> Result<(), KitError> {
        let mut assignments = self.assignments.write().await;
        let clash = assignments.iter().any(|a| {
            a.id == assignment.id
                || (a.programme_id == assignment.programme_id
                    && a.participant_id == assignment.participant_id
                    && a.is_vehicle() == assignment.is_vehicle())
        });
        if clash {
            return Err(KitError::InvalidRequest(format!(
                "participant {} already has this assignment for programme {}",
                assignment.participant_id, assignment.programme_id
            )));
        }
        assignments.push(assignment);
        Ok(())
    }

    /// Applies `update` to one assignment under the write lock and returns
    /// the updated record alongside the closure's result.
    ///
    /// # Errors
    ///
    /// Returns [`KitError::AssignmentNotFound`] if the id is unknown, or
    /// whatever error `update` returns.
    pub async fn update_assignment<T>(
        &self,
        id: AssignmentId,
        update: impl FnOnce(&mut Assignment) -> Result<T, KitError>,
    ) -> Result<(Assignment, T), KitError> {
        let mut assignments = self.assignments.write().await;
        let entry = assignments
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(KitError::AssignmentNotFound(*id.as_uuid()))?;
        let outcome = update(&mut *entry)?;
        Ok((entry.clone(), outcome))
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::{AssignmentKind, VehicleStatus};

    fn programme(title: &str) -> Programme {
        Programme {
            id: ProgrammeId::new(),
            title: title.to_string(),
            description: None,
            starts_at: None,
            ends_at: None,
            location: None,
            venue: None,
        }
    }

    fn vehicle(programme_id: ProgrammeId, participant_id: ParticipantId) -> Assignment {
        Assignment {
            id: AssignmentId::new(),
            programme_id,
            participant_id,
            kind: AssignmentKind::Vehicle {
                label: "Bus A".to_string(),
                status: VehicleStatus::Pending,
            },
        }
    }

    #[tokio::test]
    async fn replace_swaps_whole_collection() {
        let store = SnapshotStore::new();
        assert_eq!(store.replace_programmes(vec![programme("a"), programme("b")]).await, 2);
        assert_eq!(store.replace_programmes(vec![programme("c")]).await, 1);
        let titles: Vec<String> = store.programmes().await.into_iter().map(|p| p.title).collect();
        assert_eq!(titles, vec!["c"]);
    }

    #[tokio::test]
    async fn lookup_unknown_programme_fails() {
        let store = SnapshotStore::new();
        let result = store.programme(ProgrammeId::new()).await;
        assert!(matches!(result, Err(KitError::ProgrammeNotFound(_))));
    }

    #[tokio::test]
    async fn duplicate_vehicle_assignment_rejected() {
        let store = SnapshotStore::new();
        let (prog, who) = (ProgrammeId::new(), ParticipantId::new());
        assert!(store.insert_assignment(vehicle(prog, who)).await.is_ok());
        let again = store.insert_assignment(vehicle(prog, who)).await;
        assert!(matches!(again, Err(KitError::InvalidRequest(_))));
        assert_eq!(store.assignments_for(prog).await.len(), 1);
    }

    #[tokio::test]
    async fn update_applies_under_lock() {
        let store = SnapshotStore::new();
        let a = vehicle(ProgrammeId::new(), ParticipantId::new());
        let id = a.id;
        store.replace_assignments(vec![a]).await;

        let result = store
            .update_assignment(id, |a| a.advance_vehicle(VehicleStatus::PickedUp))
            .await;
        let Ok((updated, changed)) = result else {
            panic!("update failed");
        };
        assert!(changed);
        assert!(matches!(
            updated.kind,
            AssignmentKind::Vehicle { status: VehicleStatus::PickedUp, .. }
        ));

        let missing = store
            .update_assignment(AssignmentId::new(), |_| Ok(()))
            .await;
        assert!(matches!(missing, Err(KitError::AssignmentNotFound(_))));
    }
}
