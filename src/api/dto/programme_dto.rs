//! Programme listing DTOs.

use chrono::{DateTime, FixedOffset, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{Phase, Programme};

/// A programme as shown on listing pages.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProgrammeDto {
    /// Programme identifier.
    pub id: uuid::Uuid,
    /// Display title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Parsed start, if valid.
    pub starts_at: Option<DateTime<Utc>>,
    /// Parsed end, if valid.
    pub ends_at: Option<DateTime<Utc>>,
    /// Resolved venue label (`"—"` when unknown).
    pub venue: String,
    /// Phase relative to the evaluation time.
    pub phase: Phase,
}

impl ProgrammeDto {
    /// Builds the listing view of a programme.
    #[must_use]
    pub fn new(programme: &Programme, phase: Phase, zone: &FixedOffset) -> Self {
        let window = programme.window(zone);
        Self {
            id: *programme.id.as_uuid(),
            title: programme.title.clone(),
            description: programme.description.clone(),
            starts_at: window.starts_at,
            ends_at: window.ends_at,
            venue: programme.venue().label(),
            phase,
        }
    }
}

/// Response body for `GET /programmes`: programmes in display sections.
#[derive(Debug, Serialize, ToSchema)]
pub struct ProgrammeSectionsResponse {
    /// Evaluation time used for classification.
    pub now: DateTime<Utc>,
    /// Programmes not yet started.
    pub upcoming: Vec<ProgrammeDto>,
    /// Programmes in progress.
    pub ongoing: Vec<ProgrammeDto>,
    /// Finished programmes.
    pub closed: Vec<ProgrammeDto>,
}
