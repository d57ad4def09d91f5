//! Kit service: joins snapshot data with the pure view functions.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, FixedOffset, Utc};

use crate::domain::{
    Assignment, AssignmentId, AssignmentKind, AssignmentRow, Attendance, CertificateDocument,
    CertificateEvent, CertificateStyle, KitAccess, Page, Participant, ParticipantId, Phase,
    Programme, ProgrammeId, Recipient, RosterQuery, Signatory, SnapshotStore, TablePresence,
    VehicleStatus, bucket_by_phase, build_certificate_document, classify_phase, kit_access,
};
use crate::error::KitError;

/// Programmes grouped for sectioned display, each group in snapshot order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhaseGroups {
    /// Not yet started.
    pub upcoming: Vec<Programme>,
    /// In progress.
    pub ongoing: Vec<Programme>,
    /// Finished.
    pub closed: Vec<Programme>,
}

/// Orchestration layer for every gateway operation.
///
/// Holds the [`SnapshotStore`] plus the settings the pure functions need
/// (event zone, print stylesheet). Reads clone a snapshot and then run the
/// view logic without holding locks.
#[derive(Debug, Clone)]
pub struct KitService {
    store: Arc<SnapshotStore>,
    event_zone: FixedOffset,
    certificate_style: CertificateStyle,
}

impl KitService {
    /// Creates a new `KitService`.
    #[must_use]
    pub fn new(
        store: Arc<SnapshotStore>,
        event_zone: FixedOffset,
        certificate_style: CertificateStyle,
    ) -> Self {
        Self {
            store,
            event_zone,
            certificate_style,
        }
    }

    /// Returns the configured event zone.
    #[must_use]
    pub const fn event_zone(&self) -> &FixedOffset {
        &self.event_zone
    }

    // ── Snapshots ───────────────────────────────────────────────────────

    /// Replaces the programme snapshot.
    pub async fn replace_programmes(&self, programmes: Vec<Programme>) -> usize {
        let count = self.store.replace_programmes(programmes).await;
        tracing::info!(count, "programme snapshot replaced");
        count
    }

    /// Replaces the participant snapshot.
    pub async fn replace_participants(&self, participants: Vec<Participant>) -> usize {
        let count = self.store.replace_participants(participants).await;
        tracing::info!(count, "participant snapshot replaced");
        count
    }

    /// Replaces the assignment snapshot.
    pub async fn replace_assignments(&self, assignments: Vec<Assignment>) -> usize {
        let count = self.store.replace_assignments(assignments).await;
        tracing::info!(count, "assignment snapshot replaced");
        count
    }

    /// Replaces the attendance snapshot.
    pub async fn replace_attendance(&self, attendance: Vec<Attendance>) -> usize {
        let count = self.store.replace_attendance(attendance).await;
        tracing::info!(count, "attendance snapshot replaced");
        count
    }

    // ── Programmes ──────────────────────────────────────────────────────

    /// Groups every programme by phase relative to `now`.
    pub async fn programmes_by_phase(&self, now: DateTime<Utc>) -> PhaseGroups {
        let programmes = self.store.programmes().await;
        let buckets = bucket_by_phase(&programmes, now, &self.event_zone);
        let owned = |group: Vec<&Programme>| group.into_iter().cloned().collect::<Vec<_>>();
        let groups = PhaseGroups {
            upcoming: owned(buckets.upcoming),
            ongoing: owned(buckets.ongoing),
            closed: owned(buckets.closed),
        };
        tracing::debug!(
            upcoming = groups.upcoming.len(),
            ongoing = groups.ongoing.len(),
            closed = groups.closed.len(),
            "programmes classified"
        );
        groups
    }

    /// Returns one programme and its phase relative to `now`.
    ///
    /// # Errors
    ///
    /// Returns [`KitError::ProgrammeNotFound`] for an unknown id.
    pub async fn programme_phase(
        &self,
        id: ProgrammeId,
        now: DateTime<Utc>,
    ) -> Result<(Programme, Phase), KitError> {
        let programme = self.store.programme(id).await?;
        let window = programme.window(&self.event_zone);
        let phase = classify_phase(window.starts_at, window.ends_at, now, &self.event_zone);
        tracing::debug!(programme_id = %id, phase = phase.as_str(), "programme classified");
        Ok((programme, phase))
    }

    // ── Rosters ─────────────────────────────────────────────────────────

    /// Searches and pages the participant roster.
    pub async fn participant_roster(&self, query: &RosterQuery) -> Page<Participant> {
        let participants = self.store.participants().await;
        let page = query.apply(&participants).map(Clone::clone);
        tracing::debug!(
            query = %query.query,
            matched = page.total_count,
            page = page.page,
            "participant roster paged"
        );
        page
    }

    /// Searches and pages the vehicle roster of a programme.
    ///
    /// # Errors
    ///
    /// Returns [`KitError::ProgrammeNotFound`] for an unknown programme.
    pub async fn vehicle_roster(
        &self,
        programme_id: ProgrammeId,
        query: &RosterQuery,
    ) -> Result<Page<AssignmentRow>, KitError> {
        self.assignment_roster(programme_id, query, Assignment::is_vehicle)
            .await
    }

    /// Searches and pages the table roster of a programme.
    ///
    /// # Errors
    ///
    /// Returns [`KitError::ProgrammeNotFound`] for an unknown programme.
    pub async fn table_roster(
        &self,
        programme_id: ProgrammeId,
        query: &RosterQuery,
    ) -> Result<Page<AssignmentRow>, KitError> {
        self.assignment_roster(programme_id, query, Assignment::is_table)
            .await
    }

    async fn assignment_roster(
        &self,
        programme_id: ProgrammeId,
        query: &RosterQuery,
        keep: fn(&Assignment) -> bool,
    ) -> Result<Page<AssignmentRow>, KitError> {
        self.store.programme(programme_id).await?;
        let participants: HashMap<ParticipantId, Participant> = self
            .store
            .participants()
            .await
            .into_iter()
            .map(|p| (p.id, p))
            .collect();

        let rows: Vec<AssignmentRow> = self
            .store
            .assignments_for(programme_id)
            .await
            .into_iter()
            .filter(keep)
            .filter_map(|assignment| {
                let Some(participant) = participants.get(&assignment.participant_id) else {
                    tracing::warn!(
                        assignment_id = %assignment.id,
                        participant_id = %assignment.participant_id,
                        "assignment references unknown participant; skipped"
                    );
                    return None;
                };
                Some(AssignmentRow {
                    participant: participant.clone(),
                    assignment,
                })
            })
            .collect();

        Ok(query.apply(&rows).map(Clone::clone))
    }

    // ── Assignments ─────────────────────────────────────────────────────

    /// Creates a vehicle or table assignment.
    ///
    /// # Errors
    ///
    /// Returns [`KitError::ProgrammeNotFound`] or
    /// [`KitError::ParticipantNotFound`] for unknown ids, and
    /// [`KitError::InvalidRequest`] for a blank label or a duplicate.
    pub async fn create_assignment(
        &self,
        programme_id: ProgrammeId,
        participant_id: ParticipantId,
        kind: AssignmentKind,
    ) -> Result<Assignment, KitError> {
        if kind.label().trim().is_empty() {
            return Err(KitError::InvalidRequest(
                "assignment label must not be blank".to_string(),
            ));
        }
        self.store.programme(programme_id).await?;
        self.store.participant(participant_id).await?;

        let assignment = Assignment {
            id: AssignmentId::new(),
            programme_id,
            participant_id,
            kind,
        };
        self.store.insert_assignment(assignment.clone()).await?;
        tracing::info!(
            assignment_id = %assignment.id,
            %programme_id,
            %participant_id,
            label = assignment.kind.label(),
            "assignment created"
        );
        Ok(assignment)
    }

    /// Advances a vehicle assignment's status.
    ///
    /// # Errors
    ///
    /// Returns [`KitError::AssignmentNotFound`],
    /// [`KitError::WrongAssignmentKind`], or
    /// [`KitError::InvalidTransition`].
    pub async fn update_vehicle_status(
        &self,
        id: AssignmentId,
        status: VehicleStatus,
    ) -> Result<Assignment, KitError> {
        let (assignment, changed) = self
            .store
            .update_assignment(id, |a| a.advance_vehicle(status))
            .await?;
        tracing::info!(assignment_id = %id, status = status.as_str(), changed, "vehicle status updated");
        Ok(assignment)
    }

    /// Sets a table assignment's presence flag.
    ///
    /// # Errors
    ///
    /// Returns [`KitError::AssignmentNotFound`] or
    /// [`KitError::WrongAssignmentKind`].
    pub async fn update_table_presence(
        &self,
        id: AssignmentId,
        presence: TablePresence,
    ) -> Result<Assignment, KitError> {
        let (assignment, changed) = self
            .store
            .update_assignment(id, |a| a.set_presence(presence))
            .await?;
        tracing::info!(assignment_id = %id, ?presence, changed, "table presence updated");
        Ok(assignment)
    }

    // ── Event kit & certificates ────────────────────────────────────────

    /// Checks whether a participant may open a programme's event kit.
    ///
    /// # Errors
    ///
    /// Returns [`KitError::ProgrammeNotFound`] or
    /// [`KitError::ParticipantNotFound`] for unknown ids.
    pub async fn kit_access(
        &self,
        programme_id: ProgrammeId,
        participant_id: ParticipantId,
    ) -> Result<KitAccess, KitError> {
        self.store.programme(programme_id).await?;
        self.store.participant(participant_id).await?;
        let attendance = self.store.attendance().await;
        Ok(kit_access(&attendance, programme_id, participant_id))
    }

    /// Resolves participant ids into certificate recipients, keeping the
    /// requested order.
    ///
    /// # Errors
    ///
    /// Returns [`KitError::ParticipantNotFound`] for the first unknown id.
    pub async fn recipients_for(&self, ids: &[ParticipantId]) -> Result<Vec<Recipient>, KitError> {
        let participants = self.store.participants().await;
        ids.iter()
            .map(|id| {
                participants
                    .iter()
                    .find(|p| p.id == *id)
                    .map(|p| Recipient::new(p.name.clone()))
                    .ok_or(KitError::ParticipantNotFound(*id.as_uuid()))
            })
            .collect()
    }

    /// Prints a certificate batch for a programme.
    ///
    /// # Errors
    ///
    /// Returns [`KitError::ProgrammeNotFound`] for an unknown programme and
    /// [`KitError::EmptyCertificateBatch`] when no recipient has a
    /// printable name.
    pub async fn build_certificates(
        &self,
        programme_id: ProgrammeId,
        signatory: &Signatory,
        recipients: &[Recipient],
    ) -> Result<CertificateDocument, KitError> {
        let programme = self.store.programme(programme_id).await?;
        let event = CertificateEvent::from_programme(&programme, &self.event_zone);
        let document = build_certificate_document(
            &event,
            signatory,
            recipients,
            &self.event_zone,
            &self.certificate_style,
        )
        .ok_or(KitError::EmptyCertificateBatch)?;
        tracing::info!(
            %programme_id,
            requested = recipients.len(),
            printed = document.certificate_count,
            "certificate batch built"
        );
        Ok(document)
    }

    /// Prints a participant's own certificate from their event kit.
    ///
    /// # Errors
    ///
    /// Returns [`KitError::KitLocked`] when the participant has no
    /// attendance for the programme, plus the errors of
    /// [`Self::build_certificates`].
    pub async fn build_own_certificate(
        &self,
        programme_id: ProgrammeId,
        participant_id: ParticipantId,
        signatory: &Signatory,
    ) -> Result<CertificateDocument, KitError> {
        if !self.kit_access(programme_id, participant_id).await?.is_granted() {
            return Err(KitError::KitLocked {
                programme: *programme_id.as_uuid(),
                participant: *participant_id.as_uuid(),
            });
        }
        let recipients = self.recipients_for(&[participant_id]).await?;
        self.build_certificates(programme_id, signatory, &recipients)
            .await
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use chrono::Offset;

    use super::*;
    use crate::domain::{PageSize, parse_timestamp};

    fn at(raw: &str) -> DateTime<Utc> {
        parse_timestamp(raw, &Utc.fix()).unwrap_or_else(|| panic!("bad fixture {raw}"))
    }

    fn make_service() -> KitService {
        KitService::new(
            Arc::new(SnapshotStore::new()),
            Utc.fix(),
            CertificateStyle::default(),
        )
    }

    fn programme(title: &str, start: Option<&str>, end: Option<&str>) -> Programme {
        Programme {
            id: ProgrammeId::new(),
            title: title.to_string(),
            description: None,
            starts_at: start.map(ToString::to_string),
            ends_at: end.map(ToString::to_string),
            location: Some("Function Hall".to_string()),
            venue: None,
        }
    }

    fn participant(name: &str, display_id: &str) -> Participant {
        Participant {
            id: ParticipantId::new(),
            name: name.to_string(),
            email: format!("{}@example.org", name.to_lowercase().replace(' ', ".")),
            display_id: display_id.to_string(),
        }
    }

    async fn seeded() -> (KitService, Programme, Vec<Participant>) {
        let service = make_service();
        let summit = programme("Summit", Some("2026-01-10T09:00"), Some("2026-01-10T17:00"));
        let people = vec![
            participant("Jane Cruz", "REG-001"),
            participant("John Dela Cruz", "REG-002"),
            participant("Maria Santos", "REG-003"),
        ];
        service.replace_programmes(vec![summit.clone()]).await;
        service.replace_participants(people.clone()).await;
        (service, summit, people)
    }

    fn first_id(people: &[Participant]) -> ParticipantId {
        people.first().map(|p| p.id).unwrap_or_else(|| panic!("empty fixture"))
    }

    #[tokio::test]
    async fn groups_programmes_by_phase() {
        let service = make_service();
        service
            .replace_programmes(vec![
                programme("past", Some("2026-01-01T09:00"), None),
                programme("now", Some("2026-01-10T09:00"), Some("2026-01-10T17:00")),
                programme("tbd", None, None),
            ])
            .await;
        let groups = service.programmes_by_phase(at("2026-01-10T12:00")).await;
        let titles = |g: &[Programme]| g.iter().map(|p| p.title.clone()).collect::<Vec<_>>();
        assert_eq!(titles(&groups.upcoming), vec!["tbd"]);
        assert_eq!(titles(&groups.ongoing), vec!["now"]);
        assert_eq!(titles(&groups.closed), vec!["past"]);
    }

    #[tokio::test]
    async fn single_programme_phase() {
        let (service, summit, _) = seeded().await;
        let Ok((_, phase)) = service.programme_phase(summit.id, at("2026-01-11T08:00")).await
        else {
            panic!("programme missing");
        };
        assert_eq!(phase, Phase::Closed);
    }

    #[tokio::test]
    async fn participant_roster_filters_then_pages() {
        let (service, _, _) = seeded().await;
        let page = service
            .participant_roster(&RosterQuery::new("cruz", PageSize::One).with_page(2))
            .await;
        assert_eq!(page.total_count, 2);
        assert_eq!(page.total_pages, 2);
        let names: Vec<&str> = page.items.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["John Dela Cruz"]);
    }

    #[tokio::test]
    async fn vehicle_roster_joins_participants() {
        let (service, summit, people) = seeded().await;
        for (who, label) in people.iter().zip(["Bus A", "Bus B", "Bus A"]) {
            let kind = AssignmentKind::Vehicle {
                label: label.to_string(),
                status: VehicleStatus::Pending,
            };
            let created = service.create_assignment(summit.id, who.id, kind).await;
            assert!(created.is_ok());
        }
        let Ok(page) = service
            .vehicle_roster(summit.id, &RosterQuery::new("bus a", PageSize::Ten))
            .await
        else {
            panic!("roster failed");
        };
        let names: Vec<&str> = page.items.iter().map(|r| r.participant.name.as_str()).collect();
        assert_eq!(names, vec!["Jane Cruz", "Maria Santos"]);

        let Ok(tables) = service
            .table_roster(summit.id, &RosterQuery::default())
            .await
        else {
            panic!("roster failed");
        };
        assert_eq!(tables.total_count, 0);
    }

    #[tokio::test]
    async fn assignment_requires_known_records() {
        let (service, summit, _) = seeded().await;
        let kind = AssignmentKind::Table {
            label: "Table 4".to_string(),
            presence: TablePresence::Absent,
        };
        let result = service
            .create_assignment(summit.id, ParticipantId::new(), kind)
            .await;
        assert!(matches!(result, Err(KitError::ParticipantNotFound(_))));
    }

    #[tokio::test]
    async fn vehicle_status_only_moves_forward() {
        let (service, summit, people) = seeded().await;
        let kind = AssignmentKind::Vehicle {
            label: "Van 2".to_string(),
            status: VehicleStatus::Pending,
        };
        let Ok(created) = service.create_assignment(summit.id, first_id(&people), kind).await
        else {
            panic!("create failed");
        };
        let dropped = service
            .update_vehicle_status(created.id, VehicleStatus::DroppedOff)
            .await;
        assert!(dropped.is_ok());
        let back = service
            .update_vehicle_status(created.id, VehicleStatus::PickedUp)
            .await;
        assert!(matches!(back, Err(KitError::InvalidTransition { .. })));
    }

    #[tokio::test]
    async fn own_certificate_is_gated_on_attendance() {
        let (service, summit, people) = seeded().await;
        let jane = first_id(&people);
        let signatory = Signatory::default();

        let locked = service.build_own_certificate(summit.id, jane, &signatory).await;
        assert!(matches!(locked, Err(KitError::KitLocked { .. })));

        service
            .replace_attendance(vec![Attendance {
                participant_id: jane,
                programme_id: summit.id,
                checked_in_at: at("2026-01-10T09:05"),
            }])
            .await;
        let Ok(doc) = service.build_own_certificate(summit.id, jane, &signatory).await else {
            panic!("certificate failed");
        };
        assert_eq!(doc.certificate_count, 1);
        assert!(doc.html.contains("JANE CRUZ"));
    }

    #[tokio::test]
    async fn empty_batch_is_an_error() {
        let (service, summit, _) = seeded().await;
        let result = service
            .build_certificates(summit.id, &Signatory::default(), &[])
            .await;
        assert!(matches!(result, Err(KitError::EmptyCertificateBatch)));
    }

    #[tokio::test]
    async fn recipients_keep_requested_order() {
        let (service, _, people) = seeded().await;
        let ids: Vec<ParticipantId> = people.iter().rev().map(|p| p.id).collect();
        let Ok(recipients) = service.recipients_for(&ids).await else {
            panic!("lookup failed");
        };
        let names: Vec<&str> = recipients.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Maria Santos", "John Dela Cruz", "Jane Cruz"]);
    }
}
