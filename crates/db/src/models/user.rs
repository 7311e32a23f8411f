//! User entity model.
//!
//! Authentication is handled outside this service; users exist here as the
//! referents of project ownership and membership.

use serde::Serialize;
use sqlx::FromRow;

use pulse_core::types::{DbId, Timestamp};

/// A row from the `users` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub email: String,
    pub created_at: Timestamp,
}
