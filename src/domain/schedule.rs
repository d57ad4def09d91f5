//! Scheduling windows and lenient timestamp parsing.
//!
//! Programme timestamps arrive as raw strings from upstream snapshots.
//! They are parsed once into a [`ScheduleWindow`]; anything that cannot be
//! parsed is treated as absent rather than rejected.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::Serialize;

/// Offset-carrying layouts that RFC 3339 parsing rejects, such as a
/// missing seconds field or an offset without a colon.
const OFFSET_LAYOUTS: [&str; 8] = [
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%dT%H:%M%z",
    "%Y-%m-%dT%H:%M:%S%z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M%:z",
    "%Y-%m-%d %H:%M%z",
    "%Y-%m-%d %H:%M:%S%:z",
    "%Y-%m-%d %H:%M:%S%z",
];

/// Naive layouts accepted in addition to RFC 3339. Interpreted in the
/// event zone.
const NAIVE_LAYOUTS: [&str; 6] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parses a timestamp leniently.
///
/// Accepts RFC 3339 and other ISO 8601 date-times with an explicit offset
/// (seconds optional, `Z` or `+HH:MM` or `+HHMM`), naive date-times (`T` or
/// space separated, with or without seconds), and bare dates (midnight).
/// Naive forms are read as local time in `zone`. Blank or malformed input
/// yields `None`.
#[must_use]
pub fn parse_timestamp(raw: &str, zone: &FixedOffset) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    let zulu = raw
        .strip_suffix(['Z', 'z'])
        .map(|head| format!("{head}+00:00"));
    let candidate = zulu.as_deref().unwrap_or(raw);
    if let Some(dt) = OFFSET_LAYOUTS
        .iter()
        .find_map(|layout| DateTime::parse_from_str(candidate, layout).ok())
    {
        return Some(dt.with_timezone(&Utc));
    }
    let naive = NAIVE_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDateTime::parse_from_str(raw, layout).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })?;
    zone.from_local_datetime(&naive)
        .single()
        .map(|dt| dt.with_timezone(&Utc))
}

/// A programme's parsed start/end window.
///
/// Either bound may be missing. No ordering between the bounds is
/// enforced here; consumers decide how to treat an end before the start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ScheduleWindow {
    /// Start of the window, if scheduled.
    pub starts_at: Option<DateTime<Utc>>,
    /// End of the window, if defined.
    pub ends_at: Option<DateTime<Utc>>,
}

impl ScheduleWindow {
    /// Creates a window from already-parsed bounds.
    #[must_use]
    pub const fn new(starts_at: Option<DateTime<Utc>>, ends_at: Option<DateTime<Utc>>) -> Self {
        Self { starts_at, ends_at }
    }

    /// Parses raw bound strings, dropping whichever fails to parse.
    #[must_use]
    pub fn parse(starts_at: Option<&str>, ends_at: Option<&str>, zone: &FixedOffset) -> Self {
        Self {
            starts_at: starts_at.and_then(|s| parse_timestamp(s, zone)),
            ends_at: ends_at.and_then(|s| parse_timestamp(s, zone)),
        }
    }

    /// Returns the end bound only when it is usable, i.e. present and not
    /// earlier than the start.
    #[must_use]
    pub fn effective_end(&self) -> Option<DateTime<Utc>> {
        match (self.starts_at, self.ends_at) {
            (Some(start), Some(end)) if end >= start => Some(end),
            (None, end) => end,
            _ => None,
        }
    }
}

/// Returns `true` when both instants fall on the same calendar date in
/// `zone`.
#[must_use]
pub fn same_calendar_day(a: DateTime<Utc>, b: DateTime<Utc>, zone: &FixedOffset) -> bool {
    a.with_timezone(zone).date_naive() == b.with_timezone(zone).date_naive()
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap_or_else(|| panic!("valid offset"))
    }

    fn manila() -> FixedOffset {
        FixedOffset::east_opt(8 * 3600).unwrap_or_else(|| panic!("valid offset"))
    }

    #[test]
    fn parses_rfc3339_with_offset() {
        let Some(dt) = parse_timestamp("2026-01-10T09:00:00+08:00", &utc()) else {
            panic!("expected timestamp");
        };
        assert_eq!(dt.to_rfc3339(), "2026-01-10T01:00:00+00:00");
    }

    #[test]
    fn offset_without_seconds_is_honoured() {
        let expected = parse_timestamp("2026-01-10T01:00:00Z", &utc());
        assert!(expected.is_some());
        for raw in [
            "2026-01-10T09:00+08:00",
            "2026-01-10T09:00:00+0800",
            "2026-01-10T09:00+0800",
            "2026-01-10 09:00+08:00",
            "2026-01-10T01:00Z",
        ] {
            assert_eq!(parse_timestamp(raw, &manila()), expected, "{raw}");
            assert_eq!(parse_timestamp(raw, &utc()), expected, "{raw}");
        }
    }

    #[test]
    fn naive_forms_use_event_zone() {
        let zone = manila();
        let a = parse_timestamp("2026-01-10T09:00", &zone);
        let b = parse_timestamp("2026-01-10 09:00:00", &zone);
        let c = parse_timestamp("2026-01-10T01:00:00Z", &zone);
        assert!(a.is_some());
        assert_eq!(a, b);
        assert_eq!(a, c);
    }

    #[test]
    fn bare_date_is_midnight() {
        let Some(dt) = parse_timestamp("2026-01-10", &utc()) else {
            panic!("expected timestamp");
        };
        assert_eq!(dt.to_rfc3339(), "2026-01-10T00:00:00+00:00");
    }

    #[test]
    fn malformed_and_blank_are_absent() {
        assert_eq!(parse_timestamp("", &utc()), None);
        assert_eq!(parse_timestamp("   ", &utc()), None);
        assert_eq!(parse_timestamp("next tuesday", &utc()), None);
        assert_eq!(parse_timestamp("2026-13-40T25:00", &utc()), None);
    }

    #[test]
    fn window_drops_malformed_end() {
        let w = ScheduleWindow::parse(Some("2026-01-10T09:00"), Some("soon"), &utc());
        assert!(w.starts_at.is_some());
        assert_eq!(w.ends_at, None);
    }

    #[test]
    fn effective_end_ignores_inverted_window() {
        let w = ScheduleWindow::parse(
            Some("2026-01-10T09:00"),
            Some("2026-01-09T09:00"),
            &utc(),
        );
        assert!(w.ends_at.is_some());
        assert_eq!(w.effective_end(), None);
    }

    #[test]
    fn same_day_depends_on_zone() {
        let a = parse_timestamp("2026-01-10T15:00:00Z", &utc());
        let b = parse_timestamp("2026-01-10T17:00:00Z", &utc());
        let (Some(a), Some(b)) = (a, b) else {
            panic!("expected timestamps");
        };
        assert!(same_calendar_day(a, b, &utc()));
        // 23:00 and 01:00 the next day in UTC+8
        assert!(!same_calendar_day(a, b, &manila()));
    }
}
