//! Pure display formatters shared by the certificate builder.

use chrono::{DateTime, Datelike, FixedOffset, Utc};

use super::schedule::{ScheduleWindow, same_calendar_day};

/// Sentinel rendered for a value that is entirely absent.
pub const MISSING: &str = "—";

/// Sentinel rendered for a programme that has no start date yet.
pub const DATE_TBD: &str = "Date TBD";

/// Formats a single instant as a long calendar date, e.g.
/// `"January 10, 2026"`, in `zone`.
#[must_use]
pub fn format_date(at: DateTime<Utc>, zone: &FixedOffset) -> String {
    at.with_timezone(zone).format("%B %-d, %Y").to_string()
}

/// Formats a schedule window for print.
///
/// * no start: `"Date TBD"`
/// * no usable end, or both bounds on one day: `"January 10, 2026"`
/// * same month: `"January 10 – 12, 2026"`
/// * same year: `"January 30 – February 2, 2026"`
/// * otherwise: `"December 30, 2025 – January 2, 2026"`
#[must_use]
pub fn format_date_range(window: &ScheduleWindow, zone: &FixedOffset) -> String {
    let Some(start) = window.starts_at else {
        return DATE_TBD.to_string();
    };
    let end = match window.effective_end() {
        Some(end) if !same_calendar_day(start, end, zone) => end,
        _ => return format_date(start, zone),
    };

    let s = start.with_timezone(zone);
    let e = end.with_timezone(zone);
    if s.year() == e.year() && s.month() == e.month() {
        format!("{} – {}", s.format("%B %-d"), e.format("%-d, %Y"))
    } else if s.year() == e.year() {
        format!("{} – {}", s.format("%B %-d"), e.format("%B %-d, %Y"))
    } else {
        format!("{} – {}", s.format("%B %-d, %Y"), e.format("%B %-d, %Y"))
    }
}

/// Date the certificate is "given on": the end if present, else the
/// start, else `"—"`.
#[must_use]
pub fn format_given_date(window: &ScheduleWindow, zone: &FixedOffset) -> String {
    window
        .ends_at
        .or(window.starts_at)
        .map_or_else(|| MISSING.to_string(), |at| format_date(at, zone))
}

/// Collapses internal whitespace and upper-cases a participant name for
/// print. Returns an empty string for a blank name.
#[must_use]
pub fn normalize_participant_name(raw: &str) -> String {
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_uppercase()
}

/// Escapes text for safe interpolation into HTML element content and
/// double-quoted attribute values.
#[must_use]
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::schedule::parse_timestamp;

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap_or_else(|| panic!("valid offset"))
    }

    fn window(start: Option<&str>, end: Option<&str>) -> ScheduleWindow {
        ScheduleWindow::parse(start, end, &utc())
    }

    #[test]
    fn range_without_start_is_tbd() {
        assert_eq!(format_date_range(&window(None, Some("2026-01-10")), &utc()), "Date TBD");
    }

    #[test]
    fn range_on_one_day_is_single_date() {
        let w = window(Some("2026-01-10T09:00"), Some("2026-01-10T17:00"));
        assert_eq!(format_date_range(&w, &utc()), "January 10, 2026");
        let open = window(Some("2026-01-10T09:00"), None);
        assert_eq!(format_date_range(&open, &utc()), "January 10, 2026");
    }

    #[test]
    fn range_within_month() {
        let w = window(Some("2026-01-10T09:00"), Some("2026-01-12T17:00"));
        assert_eq!(format_date_range(&w, &utc()), "January 10 – 12, 2026");
    }

    #[test]
    fn range_across_months_and_years() {
        let w = window(Some("2026-01-30"), Some("2026-02-02"));
        assert_eq!(format_date_range(&w, &utc()), "January 30 – February 2, 2026");
        let w = window(Some("2025-12-30"), Some("2026-01-02"));
        assert_eq!(
            format_date_range(&w, &utc()),
            "December 30, 2025 – January 2, 2026"
        );
    }

    #[test]
    fn inverted_range_prints_start_only() {
        let w = window(Some("2026-01-10"), Some("2026-01-05"));
        assert_eq!(format_date_range(&w, &utc()), "January 10, 2026");
    }

    #[test]
    fn given_date_prefers_end() {
        let w = window(Some("2026-01-10"), Some("2026-01-12"));
        assert_eq!(format_given_date(&w, &utc()), "January 12, 2026");
        let w = window(Some("2026-01-10"), Some("garbage"));
        assert_eq!(format_given_date(&w, &utc()), "January 10, 2026");
        assert_eq!(format_given_date(&window(None, None), &utc()), "—");
    }

    #[test]
    fn date_uses_zone() {
        let Some(at) = parse_timestamp("2026-01-10T20:00:00Z", &utc()) else {
            panic!("expected timestamp");
        };
        let Some(plus8) = FixedOffset::east_opt(8 * 3600) else {
            panic!("valid offset");
        };
        assert_eq!(format_date(at, &plus8), "January 11, 2026");
    }

    #[test]
    fn names_are_collapsed_and_uppercased() {
        assert_eq!(normalize_participant_name("  Jane   Cruz "), "JANE CRUZ");
        assert_eq!(normalize_participant_name("john\tdela\ncruz"), "JOHN DELA CRUZ");
        assert_eq!(normalize_participant_name("   "), "");
        assert_eq!(normalize_participant_name("José Peña"), "JOSÉ PEÑA");
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape_html(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
    }
}
