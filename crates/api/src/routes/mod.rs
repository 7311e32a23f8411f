pub mod health;
pub mod ingest;
pub mod projects;
pub mod stats;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// POST /ingest                  record one usage event (ingest secret)
///
/// GET  /stats                   overview across all visible projects
///
/// GET  /projects/{id}/stats     overview for one project
/// GET  /projects/{id}/events    recent event listing (not windowed)
/// ```
///
/// Everything except `/ingest` requires a bearer token.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/ingest", ingest::router())
        .nest("/stats", stats::router())
        .nest("/projects", projects::router())
}
