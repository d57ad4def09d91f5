//! REST endpoint handlers organized by resource.

pub mod assignments;
pub mod certificates;
pub mod programmes;
pub mod rosters;
pub mod snapshots;
pub mod system;

use axum::Router;

use crate::app_state::AppState;

/// Composes all resource routes under `/api/v1`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(snapshots::routes())
        .merge(programmes::routes())
        .merge(rosters::routes())
        .merge(assignments::routes())
        .merge(certificates::routes())
}
