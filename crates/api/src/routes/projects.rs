//! Route definitions for project-scoped analytics reads.

use axum::routing::get;
use axum::Router;

use crate::handlers::{events, stats};
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET /{id}/stats  -> project_overview
/// GET /{id}/events -> list_by_project
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{id}/stats", get(stats::project_overview))
        .route("/{id}/events", get(events::list_by_project))
}
