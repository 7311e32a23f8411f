//! Repository for the `usage_events` table.

use sqlx::PgPool;

use pulse_core::types::{DbId, Timestamp};

use crate::models::usage_event::UsageEvent;

/// Column list for `usage_events` queries.
const COLUMNS: &str = "id, project_id, event_name, user_id, properties, created_at";

/// Provides append and read operations for the event store.
pub struct UsageEventRepo;

impl UsageEventRepo {
    /// Append one event row, returning it.
    ///
    /// `created_at` is assigned by the database (`NOW()`); client-supplied
    /// timestamps never reach this layer. A single atomic insert: on
    /// failure nothing is persisted.
    pub async fn insert(
        pool: &PgPool,
        project_id: DbId,
        event_name: &str,
        user_id: &str,
        properties: Option<&serde_json::Value>,
    ) -> Result<UsageEvent, sqlx::Error> {
        let query = format!(
            "INSERT INTO usage_events (project_id, event_name, user_id, properties)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UsageEvent>(&query)
            .bind(project_id)
            .bind(event_name)
            .bind(user_id)
            .bind(properties)
            .fetch_one(pool)
            .await
    }

    /// Fetch all events for a project-id set with `created_at >= since`,
    /// newest first.
    ///
    /// Feeds the aggregation engine; the lower bound is the UTC start of
    /// day of the overview window's first date.
    pub async fn list_window(
        pool: &PgPool,
        project_ids: &[DbId],
        since: Timestamp,
    ) -> Result<Vec<UsageEvent>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM usage_events
             WHERE project_id = ANY($1) AND created_at >= $2
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, UsageEvent>(&query)
            .bind(project_ids)
            .bind(since)
            .fetch_all(pool)
            .await
    }

    /// The most recent events for one project, newest first, capped at
    /// `limit`. Not window-filtered.
    pub async fn list_recent_by_project(
        pool: &PgPool,
        project_id: DbId,
        limit: i64,
    ) -> Result<Vec<UsageEvent>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM usage_events
             WHERE project_id = $1
             ORDER BY created_at DESC
             LIMIT $2"
        );
        sqlx::query_as::<_, UsageEvent>(&query)
            .bind(project_id)
            .bind(limit)
            .fetch_all(pool)
            .await
    }
}
