//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::domain::PageSize;
use crate::service::KitService;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Kit service for all business logic.
    pub kit_service: Arc<KitService>,
    /// Page size for roster requests that do not name one.
    pub default_page_size: PageSize,
}
