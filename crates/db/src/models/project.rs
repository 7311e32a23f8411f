//! Project entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use pulse_core::types::{DbId, Timestamp};

/// A project row from the `projects` table.
///
/// The secret hash never leaves the server; only the display prefix is
/// serialized.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: DbId,
    pub name: String,
    pub owner_user_id: DbId,
    #[serde(skip_serializing)]
    pub ingest_secret_hash: String,
    pub ingest_secret_prefix: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new project.
///
/// The caller generates the ingest secret via
/// `pulse_core::secrets::generate_ingest_secret` and passes the derived
/// hash and prefix here; the plaintext never reaches this layer.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    pub name: String,
    pub owner_user_id: DbId,
    pub ingest_secret_hash: String,
    pub ingest_secret_prefix: String,
}
