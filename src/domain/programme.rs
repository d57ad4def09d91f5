//! Programme (event) records as delivered by the scheduling snapshot.

use chrono::FixedOffset;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::ProgrammeId;
use super::schedule::ScheduleWindow;
use super::venue::{StructuredVenue, Venue};

/// A scheduled activity that participants check into.
///
/// Timestamps are kept as the raw strings the upstream system supplied so
/// that a malformed value degrades to "absent" instead of rejecting the
/// whole snapshot. Use [`Programme::window`] to get parsed bounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Programme {
    /// Programme identifier.
    #[schema(value_type = uuid::Uuid)]
    pub id: ProgrammeId,
    /// Display title.
    pub title: String,
    /// Optional long description.
    #[serde(default)]
    pub description: Option<String>,
    /// Raw start timestamp.
    #[serde(default)]
    pub starts_at: Option<String>,
    /// Raw end timestamp. Absent means "same day as start".
    #[serde(default)]
    pub ends_at: Option<String>,
    /// Flat free-text location.
    #[serde(default)]
    pub location: Option<String>,
    /// Structured venue, preferred over `location` when usable.
    #[serde(default)]
    pub venue: Option<StructuredVenue>,
}

impl Programme {
    /// Parses the programme's scheduling window in `zone`.
    #[must_use]
    pub fn window(&self, zone: &FixedOffset) -> ScheduleWindow {
        ScheduleWindow::parse(self.starts_at.as_deref(), self.ends_at.as_deref(), zone)
    }

    /// Resolves the programme's venue.
    #[must_use]
    pub fn venue(&self) -> Venue {
        Venue::resolve(self.venue.as_ref(), self.location.as_deref())
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_sparse_record() {
        let json = serde_json::json!({
            "id": uuid::Uuid::new_v4(),
            "title": "Opening Plenary",
            "starts_at": "2026-01-10T09:00:00+08:00",
        });
        let Ok(p) = serde_json::from_value::<Programme>(json) else {
            panic!("deserialization failed");
        };
        assert_eq!(p.ends_at, None);
        assert_eq!(p.venue(), Venue::Unspecified);
        let Some(utc) = FixedOffset::east_opt(0) else {
            panic!("valid offset");
        };
        assert!(p.window(&utc).starts_at.is_some());
    }
}
