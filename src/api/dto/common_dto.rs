//! Shared DTO types used across multiple endpoints.

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{Page, PageSize, RosterQuery, parse_timestamp};
use crate::error::KitError;

/// Search and pagination query parameters for roster endpoints.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RosterParams {
    /// Free-text search over the roster's searchable fields.
    #[serde(default)]
    pub q: Option<String>,
    /// Page number (1-indexed). Out-of-range pages clamp. Defaults to 1.
    #[serde(default)]
    pub page: Option<u32>,
    /// Records per page: one of 1, 10, 100, 1000.
    #[serde(default)]
    pub page_size: Option<u32>,
}

impl RosterParams {
    /// Validates the parameters into a [`RosterQuery`].
    ///
    /// # Errors
    ///
    /// Returns [`KitError::InvalidPageSize`] if `page_size` is not one of
    /// the enumerated options.
    pub fn into_query(self, default_page_size: PageSize) -> Result<RosterQuery, KitError> {
        let page_size = self
            .page_size
            .map(PageSize::try_from)
            .transpose()?
            .unwrap_or(default_page_size);
        let page = self.page.map_or(1, |p| p as usize);
        Ok(RosterQuery::new(self.q.unwrap_or_default(), page_size).with_page(page))
    }
}

/// Optional evaluation time for phase-dependent endpoints.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct NowParams {
    /// Timestamp to classify against. Defaults to the server clock.
    #[serde(default)]
    pub now: Option<String>,
}

impl NowParams {
    /// Resolves the evaluation time.
    ///
    /// # Errors
    ///
    /// Returns [`KitError::InvalidRequest`] if `now` is given but cannot be
    /// parsed.
    pub fn resolve(&self, zone: &FixedOffset) -> Result<DateTime<Utc>, KitError> {
        match self.now.as_deref() {
            None => Ok(Utc::now()),
            Some(raw) => parse_timestamp(raw, zone)
                .ok_or_else(|| KitError::InvalidRequest(format!("unparseable `now`: {raw:?}"))),
        }
    }
}

/// Pagination metadata included in roster responses.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PaginationMeta {
    /// Page returned (after clamping).
    pub page: usize,
    /// Records per page.
    pub page_size: u32,
    /// Number of records matching the query.
    pub total: usize,
    /// Total number of pages (at least 1).
    pub total_pages: usize,
}

impl<T> From<&Page<T>> for PaginationMeta {
    fn from(page: &Page<T>) -> Self {
        Self {
            page: page.page,
            page_size: page.page_size.into(),
            total: page.total_count,
            total_pages: page.total_pages,
        }
    }
}

/// Acknowledgement for a snapshot replacement.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SnapshotAck {
    /// Number of records now held.
    pub replaced: usize,
}
