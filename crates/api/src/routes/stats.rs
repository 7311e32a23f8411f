//! Route definitions for the cross-project overview.

use axum::routing::get;
use axum::Router;

use crate::handlers::stats;
use crate::state::AppState;

/// Routes mounted at `/stats`.
///
/// ```text
/// GET / -> all_projects_overview
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(stats::all_projects_overview))
}
