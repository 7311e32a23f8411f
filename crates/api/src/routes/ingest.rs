//! Route definitions for event ingestion.

use axum::routing::post;
use axum::Router;

use crate::handlers::ingest;
use crate::state::AppState;

/// Routes mounted at `/ingest`.
///
/// ```text
/// POST / -> record
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(ingest::record))
}
