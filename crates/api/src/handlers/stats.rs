//! Handlers for the overview endpoints.
//!
//! Two read paths exist -- one project, all visible projects -- and both
//! funnel through [`build_overview`] so the aggregation logic cannot
//! drift between them. The only difference is how the project-id set is
//! resolved.

use axum::extract::{Path, Query, State};
use axum::Json;
use chrono::Utc;
use serde::Serialize;

use pulse_core::analytics::{self, DayBucket, EventBreakdown, OVERVIEW_RECENT_LIMIT};
use pulse_core::types::{DbId, Timestamp};
use pulse_db::models::usage_event::UsageEvent;
use pulse_db::repositories::{ProjectRepo, UsageEventRepo};
use pulse_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::handlers::ensure_project_access;
use crate::middleware::auth::AuthUser;
use crate::query::WindowParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// The full derived analytics read-model for a project-id set and window.
///
/// Never persisted; recomputed from raw rows on every request.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventsOverview {
    pub total_events: i64,
    pub unique_users: i64,
    pub event_breakdown: Vec<EventBreakdown>,
    pub recent_events: Vec<UsageEvent>,
    pub daily_stats: Vec<DayBucket>,
}

/// GET /api/v1/projects/{id}/stats
pub async fn project_overview(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Query(params): Query<WindowParams>,
) -> AppResult<Json<DataResponse<EventsOverview>>> {
    let project = ensure_project_access(&state.pool, user.user_id, id).await?;

    let window_days = analytics::clamp_window_days(params.days);
    let overview = build_overview(&state.pool, &[project.id], window_days, Utc::now()).await?;
    Ok(Json(DataResponse { data: overview }))
}

/// GET /api/v1/stats
///
/// Aggregates over every project the caller may view. A caller with no
/// visible projects gets an all-zero overview; the daily series still
/// spans the full window.
pub async fn all_projects_overview(
    State(state): State<AppState>,
    user: AuthUser,
    Query(params): Query<WindowParams>,
) -> AppResult<Json<DataResponse<EventsOverview>>> {
    let project_ids = ProjectRepo::visible_ids(&state.pool, user.user_id).await?;

    let window_days = analytics::clamp_window_days(params.days);
    let overview = build_overview(&state.pool, &project_ids, window_days, Utc::now()).await?;
    Ok(Json(DataResponse { data: overview }))
}

/// Fetch the windowed events for a project-id set and aggregate them.
///
/// One snapshot read feeds totals, breakdown, daily buckets, and the
/// recent-event list, so all parts of the overview describe the same
/// instant.
async fn build_overview(
    pool: &DbPool,
    project_ids: &[DbId],
    window_days: i64,
    now: Timestamp,
) -> Result<EventsOverview, AppError> {
    let since = analytics::window_start(now, window_days)?;
    let events = UsageEventRepo::list_window(pool, project_ids, since).await?;

    let stats = analytics::aggregate(&events, window_days, now)?;
    let recent_events = analytics::recent_events(&events, window_days, now, OVERVIEW_RECENT_LIMIT)?;

    Ok(EventsOverview {
        total_events: stats.total_events,
        unique_users: stats.unique_users,
        event_breakdown: stats.event_breakdown,
        recent_events,
        daily_stats: stats.daily_stats,
    })
}
