//! Attendance check-ins and event kit gating.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{ParticipantId, ProgrammeId};

/// A participant scanned present at a programme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Attendance {
    /// Who checked in.
    #[schema(value_type = uuid::Uuid)]
    pub participant_id: ParticipantId,
    /// Where they checked in.
    #[schema(value_type = uuid::Uuid)]
    pub programme_id: ProgrammeId,
    /// When the check-in was recorded.
    pub checked_in_at: DateTime<Utc>,
}

/// Outcome of an event kit access check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "access", rename_all = "snake_case")]
pub enum KitAccess {
    /// The participant attended; the kit is unlocked.
    Granted {
        /// Earliest check-in for the programme.
        checked_in_at: DateTime<Utc>,
    },
    /// No attendance on record.
    Locked,
}

impl KitAccess {
    /// Returns `true` if the kit is unlocked.
    #[must_use]
    pub const fn is_granted(&self) -> bool {
        matches!(self, Self::Granted { .. })
    }
}

/// Decides whether `participant` may open the kit for `programme`.
///
/// Duplicate scans are common; the earliest one is reported.
#[must_use]
pub fn kit_access(
    attendance: &[Attendance],
    programme: ProgrammeId,
    participant: ParticipantId,
) -> KitAccess {
    attendance
        .iter()
        .filter(|a| a.programme_id == programme && a.participant_id == participant)
        .map(|a| a.checked_in_at)
        .min()
        .map_or(KitAccess::Locked, |checked_in_at| KitAccess::Granted {
            checked_in_at,
        })
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn earliest_scan_unlocks_kit() {
        let programme = ProgrammeId::new();
        let participant = ParticipantId::new();
        let first = Utc.with_ymd_and_hms(2026, 1, 10, 8, 55, 0).single();
        let second = Utc.with_ymd_and_hms(2026, 1, 10, 13, 2, 0).single();
        let (Some(first), Some(second)) = (first, second) else {
            panic!("valid fixture times");
        };
        let records = vec![
            Attendance { participant_id: participant, programme_id: programme, checked_in_at: second },
            Attendance { participant_id: participant, programme_id: programme, checked_in_at: first },
        ];
        assert_eq!(
            kit_access(&records, programme, participant),
            KitAccess::Granted { checked_in_at: first }
        );
    }

    #[test]
    fn other_programmes_do_not_count() {
        let participant = ParticipantId::new();
        let records = vec![Attendance {
            participant_id: participant,
            programme_id: ProgrammeId::new(),
            checked_in_at: Utc::now(),
        }];
        let access = kit_access(&records, ProgrammeId::new(), participant);
        assert_eq!(access, KitAccess::Locked);
        assert!(!access.is_granted());
    }
}
