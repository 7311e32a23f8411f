//! Usage event entity model.

use serde::Serialize;
use sqlx::FromRow;

use pulse_core::analytics::EventRecord;
use pulse_core::types::{DbId, Timestamp};

/// A row from the `usage_events` table.
///
/// `user_id` is the client-supplied pseudo-anonymous identifier, an opaque
/// string with no relation to the `users` table. `created_at` is assigned
/// by the database at insert time.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageEvent {
    pub id: DbId,
    pub project_id: DbId,
    pub event_name: String,
    pub user_id: String,
    pub properties: Option<serde_json::Value>,
    pub created_at: Timestamp,
}

impl EventRecord for UsageEvent {
    fn event_name(&self) -> &str {
        &self.event_name
    }

    fn user_id(&self) -> &str {
        &self.user_id
    }

    fn created_at(&self) -> Timestamp {
        self.created_at
    }
}
