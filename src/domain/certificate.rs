//! Certificate batch printing.
//!
//! [`build_certificate_document`] turns one programme, one signatory and a
//! list of recipients into a single self-contained HTML document with one
//! certificate per page. The document carries its own `<style>` block so
//! print-to-PDF output does not depend on anything loaded at print time.

use chrono::FixedOffset;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::format::{
    escape_html, format_date_range, format_given_date, normalize_participant_name,
};
use super::programme::Programme;
use super::schedule::ScheduleWindow;
use super::venue::Venue;

/// Print stylesheet used when none is configured.
pub const DEFAULT_STYLESHEET: &str = r"@page { size: A4 landscape; margin: 0; }
* { box-sizing: border-box; }
body { margin: 0; font-family: Georgia, 'Times New Roman', serif; color: #1a1a1a; }
.certificate { width: 297mm; height: 210mm; padding: 24mm 28mm; text-align: center; page-break-after: always; break-after: page; border: 6mm solid #1f3b63; }
.certificate:last-child { page-break-after: auto; break-after: auto; }
.heading { font-size: 30pt; letter-spacing: 0.12em; text-transform: uppercase; margin: 0 0 10mm; }
.lead { font-size: 13pt; margin: 0; }
.recipient { font-size: 34pt; margin: 8mm 0; letter-spacing: 0.04em; }
.body { font-size: 13pt; line-height: 1.5; margin: 0 20mm; }
.given { font-size: 12pt; margin: 8mm 0 0; }
.signatory { margin: 14mm auto 0; width: 90mm; }
.signature { display: block; max-height: 22mm; margin: 0 auto -4mm; }
.signatory-name { font-weight: bold; border-top: 1px solid #1a1a1a; padding-top: 2mm; margin: 0; text-transform: uppercase; }
.signatory-title { font-size: 11pt; margin: 0; }";

/// Programme details printed on each certificate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificateEvent {
    /// Programme title.
    pub title: String,
    /// Parsed schedule window.
    pub window: ScheduleWindow,
    /// Resolved venue.
    pub venue: Venue,
}

impl CertificateEvent {
    /// Extracts the printable details of a programme.
    #[must_use]
    pub fn from_programme(programme: &Programme, zone: &FixedOffset) -> Self {
        Self {
            title: programme.title.clone(),
            window: programme.window(zone),
            venue: programme.venue(),
        }
    }
}

/// The authority whose name and signature appear on certificates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Signatory {
    /// Printed name. May be blank.
    #[serde(default)]
    pub name: String,
    /// Position or title. May be blank.
    #[serde(default)]
    pub title: String,
    /// URL or opaque reference to a signature image.
    #[serde(default)]
    pub signature_ref: Option<String>,
}

/// One certificate recipient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Recipient {
    /// Name as registered; normalized for print.
    pub name: String,
}

impl Recipient {
    /// Creates a recipient from a display name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Stylesheet embedded in the printed document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificateStyle(String);

impl CertificateStyle {
    /// Wraps a custom stylesheet.
    #[must_use]
    pub fn new(css: impl Into<String>) -> Self {
        Self(css.into())
    }

    /// Returns the raw CSS.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CertificateStyle {
    fn default() -> Self {
        Self(DEFAULT_STYLESHEET.to_string())
    }
}

/// A rendered batch ready to print.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificateDocument {
    /// Complete HTML document.
    pub html: String,
    /// Number of certificate blocks in `html`.
    pub certificate_count: usize,
}

/// The fully formatted text of one certificate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificateFields {
    /// Normalized recipient name.
    pub recipient: String,
    /// Programme title.
    pub event_title: String,
    /// Formatted schedule window.
    pub date_range: String,
    /// Formatted "given on" date.
    pub given_on: String,
    /// Venue label.
    pub venue: String,
    /// Signatory name.
    pub signatory_name: String,
    /// Signatory title.
    pub signatory_title: String,
    /// Signature image reference, if any.
    pub signature_ref: Option<String>,
}

impl CertificateFields {
    /// Formats the fields for one recipient. Returns `None` when the
    /// recipient's name is blank.
    #[must_use]
    pub fn new(
        event: &CertificateEvent,
        signatory: &Signatory,
        recipient: &Recipient,
        zone: &FixedOffset,
    ) -> Option<Self> {
        let name = normalize_participant_name(&recipient.name);
        if name.is_empty() {
            return None;
        }
        Some(Self {
            recipient: name,
            event_title: event.title.trim().to_string(),
            date_range: format_date_range(&event.window, zone),
            given_on: format_given_date(&event.window, zone),
            venue: event.venue.label(),
            signatory_name: signatory.name.trim().to_string(),
            signatory_title: signatory.title.trim().to_string(),
            signature_ref: signatory
                .signature_ref
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(ToString::to_string),
        })
    }

    /// Renders the certificate as an HTML `<section>`.
    #[must_use]
    pub fn render(&self) -> String {
        let signature = self.signature_ref.as_deref().map_or_else(String::new, |src| {
            format!(
                "<img class=\"signature\" src=\"{}\" alt=\"\">",
                escape_html(src)
            )
        });
        format!(
            concat!(
                "<section class=\"certificate\">",
                "<p class=\"heading\">Certificate of Participation</p>",
                "<p class=\"lead\">This certificate is proudly presented to</p>",
                "<h1 class=\"recipient\">{recipient}</h1>",
                "<p class=\"body\">for participating in <strong>{title}</strong> ",
                "held on {dates} at {venue}.</p>",
                "<p class=\"given\">Given on {given}.</p>",
                "<div class=\"signatory\">{signature}",
                "<p class=\"signatory-name\">{signatory_name}</p>",
                "<p class=\"signatory-title\">{signatory_title}</p>",
                "</div></section>"
            ),
            recipient = escape_html(&self.recipient),
            title = escape_html(&self.event_title),
            dates = escape_html(&self.date_range),
            venue = escape_html(&self.venue),
            given = escape_html(&self.given_on),
            signature = signature,
            signatory_name = escape_html(&self.signatory_name),
            signatory_title = escape_html(&self.signatory_title),
        )
    }
}

/// Builds one printable document with a certificate per recipient, in
/// input order.
///
/// Recipients with blank names are skipped. Returns `None` when no
/// certificate was produced; callers must not print in that case.
#[must_use]
pub fn build_certificate_document(
    event: &CertificateEvent,
    signatory: &Signatory,
    participants: &[Recipient],
    zone: &FixedOffset,
    style: &CertificateStyle,
) -> Option<CertificateDocument> {
    let blocks: Vec<String> = participants
        .iter()
        .filter_map(|recipient| CertificateFields::new(event, signatory, recipient, zone))
        .map(|fields| fields.render())
        .collect();
    if blocks.is_empty() {
        return None;
    }

    let html = format!(
        concat!(
            "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\">",
            "<title>Certificates - {title}</title>",
            "<style>{style}</style></head><body>{body}</body></html>"
        ),
        title = escape_html(event.title.trim()),
        style = style.as_str(),
        body = blocks.concat(),
    );
    Some(CertificateDocument {
        html,
        certificate_count: blocks.len(),
    })
}
