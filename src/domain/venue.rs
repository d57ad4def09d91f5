//! Venue normalization.
//!
//! Upstream records describe where a programme happens in one of two
//! shapes: a structured `{ name, address }` object or a flat `location`
//! string. [`Venue::resolve`] folds both into a single tagged value with
//! one canonical display label.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::format::MISSING;

/// Structured venue as supplied by the venue directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StructuredVenue {
    /// Venue name (e.g. `"Rizal Hall"`).
    #[serde(default)]
    pub name: Option<String>,
    /// Street address.
    #[serde(default)]
    pub address: Option<String>,
}

/// Canonical venue after normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Venue {
    /// Structured venue with at least one non-blank part.
    Structured {
        /// Trimmed name, if present.
        name: Option<String>,
        /// Trimmed address, if present.
        address: Option<String>,
    },
    /// Free-text location string.
    Flat(String),
    /// Nothing usable was supplied.
    Unspecified,
}

impl Venue {
    /// Picks the best available venue description.
    ///
    /// A structured venue wins whenever it has a non-blank name or address;
    /// otherwise a non-blank flat location is used.
    #[must_use]
    pub fn resolve(structured: Option<&StructuredVenue>, location: Option<&str>) -> Self {
        if let Some(v) = structured {
            let name = non_blank(v.name.as_deref());
            let address = non_blank(v.address.as_deref());
            if name.is_some() || address.is_some() {
                return Self::Structured { name, address };
            }
        }
        match non_blank(location) {
            Some(flat) => Self::Flat(flat),
            None => Self::Unspecified,
        }
    }

    /// Display label: `"name, address"` for structured venues, the flat
    /// string as-is, or `"—"` when unspecified.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Structured { name, address } => [name.as_deref(), address.as_deref()]
                .into_iter()
                .flatten()
                .collect::<Vec<_>>()
                .join(", "),
            Self::Flat(location) => location.clone(),
            Self::Unspecified => MISSING.to_string(),
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn structured(name: Option<&str>, address: Option<&str>) -> StructuredVenue {
        StructuredVenue {
            name: name.map(ToString::to_string),
            address: address.map(ToString::to_string),
        }
    }

    #[test]
    fn structured_wins_over_flat() {
        let v = structured(Some("Rizal Hall"), Some("12 Roxas Blvd, Manila"));
        let venue = Venue::resolve(Some(&v), Some("Somewhere else"));
        assert_eq!(venue.label(), "Rizal Hall, 12 Roxas Blvd, Manila");
    }

    #[test]
    fn structured_with_only_name() {
        let v = structured(Some("  Rizal Hall "), Some("   "));
        assert_eq!(Venue::resolve(Some(&v), None).label(), "Rizal Hall");
    }

    #[test]
    fn blank_structured_falls_back_to_flat() {
        let v = structured(Some(""), None);
        let venue = Venue::resolve(Some(&v), Some(" Function Room B "));
        assert_eq!(venue, Venue::Flat("Function Room B".to_string()));
    }

    #[test]
    fn nothing_usable_is_sentinel() {
        assert_eq!(Venue::resolve(None, Some("  ")), Venue::Unspecified);
        assert_eq!(Venue::resolve(None, None).label(), "—");
    }
}
