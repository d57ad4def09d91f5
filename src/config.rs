//! Gateway configuration loaded from environment variables.
//!
//! All settings come from environment variables (or a `.env` file via
//! `dotenvy`). Unset variables fall back to defaults. A set but invalid
//! event zone, page size, or listen address is a startup error.

use std::net::SocketAddr;
use std::path::PathBuf;

use chrono::{FixedOffset, Offset, Utc};

use crate::domain::{CertificateStyle, PageSize};

/// Top-level gateway configuration.
///
/// Loaded once at startup via [`KitConfig::from_env`].
#[derive(Debug, Clone)]
pub struct KitConfig {
    /// Socket address to bind the HTTP server to (e.g. `0.0.0.0:3000`).
    pub listen_addr: SocketAddr,

    /// Fixed UTC offset used for calendar-day comparisons and printed
    /// dates.
    pub event_zone: FixedOffset,

    /// Page size used when a roster request does not name one.
    pub default_page_size: PageSize,

    /// Stylesheet embedded in printed certificates.
    pub certificate_style: CertificateStyle,

    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for KitConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            event_zone: Utc.fix(),
            default_page_size: PageSize::default(),
            certificate_style: CertificateStyle::default(),
            request_timeout_secs: 30,
        }
    }
}

impl KitConfig {
    /// Loads configuration from environment variables.
    ///
    /// | Variable                      | Default        |
    /// |-------------------------------|----------------|
    /// | `LISTEN_ADDR`                 | `0.0.0.0:3000` |
    /// | `EVENT_UTC_OFFSET`            | `+00:00`       |
    /// | `DEFAULT_PAGE_SIZE`           | `10`           |
    /// | `CERTIFICATE_STYLESHEET_PATH` | built-in       |
    /// | `REQUEST_TIMEOUT_SECS`        | `30`           |
    ///
    /// # Errors
    ///
    /// Returns an error if `LISTEN_ADDR`, `EVENT_UTC_OFFSET` or
    /// `DEFAULT_PAGE_SIZE` is set but invalid, or if the stylesheet path
    /// cannot be read.
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();
        let defaults = Self::default();

        let listen_addr: SocketAddr = std::env::var("LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:3000".to_string())
            .parse()?;

        let event_zone = match std::env::var("EVENT_UTC_OFFSET") {
            Ok(raw) => parse_utc_offset(&raw)
                .ok_or_else(|| format!("EVENT_UTC_OFFSET must look like +08:00, got {raw:?}"))?,
            Err(_) => defaults.event_zone,
        };

        let default_page_size = match std::env::var("DEFAULT_PAGE_SIZE") {
            Ok(raw) => parse_page_size(&raw)?,
            Err(_) => defaults.default_page_size,
        };

        let certificate_style = match std::env::var("CERTIFICATE_STYLESHEET_PATH") {
            Ok(path) => CertificateStyle::new(std::fs::read_to_string(PathBuf::from(path))?),
            Err(_) => defaults.certificate_style,
        };

        let request_timeout_secs = parse_env("REQUEST_TIMEOUT_SECS", defaults.request_timeout_secs);

        Ok(Self {
            listen_addr,
            event_zone,
            default_page_size,
            certificate_style,
            request_timeout_secs,
        })
    }
}

/// Parses an offset of the form `+HH:MM`, `-HH:MM`, `+HHMM`, or `Z`.
#[must_use]
pub fn parse_utc_offset(raw: &str) -> Option<FixedOffset> {
    let raw = raw.trim();
    if raw.eq_ignore_ascii_case("z") || raw.eq_ignore_ascii_case("utc") {
        return Some(Utc.fix());
    }
    let mut chars = raw.chars();
    let sign = match chars.next()? {
        '+' => 1,
        '-' => -1,
        _ => return None,
    };
    let digits: String = chars.filter(|c| *c != ':').collect();
    if digits.len() != 4 || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let hours: i32 = digits.get(..2)?.parse().ok()?;
    let minutes: i32 = digits.get(2..)?.parse().ok()?;
    if hours > 14 || minutes > 59 {
        return None;
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

/// Parses a `DEFAULT_PAGE_SIZE` value into one of the enumerated sizes.
fn parse_page_size(raw: &str) -> Result<PageSize, Box<dyn std::error::Error>> {
    Ok(PageSize::try_from(raw.trim().parse::<u32>()?)?)
}

/// Parses an environment variable as `T`, returning `default` on missing
/// or invalid values.
fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
