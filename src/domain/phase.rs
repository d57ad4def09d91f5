//! Event phase classification.
//!
//! A programme is `upcoming`, `ongoing`, or `closed` relative to a
//! caller-supplied `now`. The classifier never reads the wall clock.

use chrono::{DateTime, FixedOffset, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use super::programme::Programme;
use super::schedule::{ScheduleWindow, same_calendar_day};

/// Position of a programme relative to the current time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Not started yet, or not scheduled at all.
    Upcoming,
    /// In progress.
    Ongoing,
    /// Finished.
    Closed,
}

impl Phase {
    /// Returns the lowercase wire name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Upcoming => "upcoming",
            Self::Ongoing => "ongoing",
            Self::Closed => "closed",
        }
    }
}

/// Classifies a schedule window against `now`.
///
/// A missing start is `Upcoming`. With a usable end the window is
/// inclusive at both bounds. Without one (absent, unparseable, or earlier
/// than the start) the programme counts as ongoing for the rest of its
/// start day in `zone`.
#[must_use]
pub fn classify_phase(
    starts_at: Option<DateTime<Utc>>,
    ends_at: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
    zone: &FixedOffset,
) -> Phase {
    let Some(start) = starts_at else {
        return Phase::Upcoming;
    };
    if now < start {
        return Phase::Upcoming;
    }
    match ScheduleWindow::new(starts_at, ends_at).effective_end() {
        Some(end) if now <= end => Phase::Ongoing,
        Some(_) => Phase::Closed,
        None if same_calendar_day(now, start, zone) => Phase::Ongoing,
        None => Phase::Closed,
    }
}

/// Programmes grouped by phase, each group in input order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PhaseBuckets<'a> {
    /// Programmes that have not started.
    pub upcoming: Vec<&'a Programme>,
    /// Programmes in progress.
    pub ongoing: Vec<&'a Programme>,
    /// Finished programmes.
    pub closed: Vec<&'a Programme>,
}

/// Sorts programmes into phase buckets for sectioned display.
#[must_use]
pub fn bucket_by_phase<'a>(
    programmes: &'a [Programme],
    now: DateTime<Utc>,
    zone: &FixedOffset,
) -> PhaseBuckets<'a> {
    let mut buckets = PhaseBuckets::default();
    for programme in programmes {
        let window = programme.window(zone);
        let target = match classify_phase(window.starts_at, window.ends_at, now, zone) {
            Phase::Upcoming => &mut buckets.upcoming,
            Phase::Ongoing => &mut buckets.ongoing,
            Phase::Closed => &mut buckets.closed,
        };
        target.push(programme);
    }
    buckets
}
