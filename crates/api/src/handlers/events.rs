//! Handler for the full project event listing.

use axum::extract::{Path, State};
use axum::Json;

use pulse_core::analytics::EVENT_LISTING_LIMIT;
use pulse_core::types::DbId;
use pulse_db::models::usage_event::UsageEvent;
use pulse_db::repositories::UsageEventRepo;

use crate::error::AppResult;
use crate::handlers::ensure_project_access;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/projects/{id}/events
///
/// Up to [`EVENT_LISTING_LIMIT`] most recent events, newest first. Unlike
/// the overview's `recentEvents`, this listing is not window-filtered.
pub async fn list_by_project(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<UsageEvent>>>> {
    let project = ensure_project_access(&state.pool, user.user_id, id).await?;

    let events =
        UsageEventRepo::list_recent_by_project(&state.pool, project.id, EVENT_LISTING_LIMIT)
            .await?;
    Ok(Json(DataResponse { data: events }))
}
