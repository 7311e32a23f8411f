//! Repository for the `projects` and `project_members` tables.
//!
//! Also the home of access resolution: the set of projects a user may
//! view is their owned projects united with their memberships.

use sqlx::PgPool;

use pulse_core::types::DbId;

use crate::models::project::{CreateProject, Project};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, name, owner_user_id, ingest_secret_hash, ingest_secret_prefix, created_at, updated_at";

/// Provides project lookup, ingest-secret resolution, and access checks.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (name, owner_user_id, ingest_secret_hash, ingest_secret_prefix)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.name)
            .bind(input.owner_user_id)
            .bind(&input.ingest_secret_hash)
            .bind(&input.ingest_secret_prefix)
            .fetch_one(pool)
            .await
    }

    /// Find a project by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Resolve a project by the SHA-256 hash of its ingest secret.
    ///
    /// The unique constraint on `ingest_secret_hash` guarantees at most one
    /// match, so an unrecognized secret is simply `None`.
    pub async fn find_by_secret_hash(
        pool: &PgPool,
        secret_hash: &str,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE ingest_secret_hash = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(secret_hash)
            .fetch_optional(pool)
            .await
    }

    /// Add a user as a member of a project. Idempotent.
    pub async fn add_member(
        pool: &PgPool,
        project_id: DbId,
        user_id: DbId,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO project_members (project_id, user_id)
             VALUES ($1, $2)
             ON CONFLICT (project_id, user_id) DO NOTHING",
        )
        .bind(project_id)
        .bind(user_id)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// All project IDs the user may view: owned ∪ member, deduplicated.
    ///
    /// `UNION` (not `UNION ALL`) collapses a user who both owns and is a
    /// member of the same project to a single entry. Sorted ascending for
    /// deterministic output.
    pub async fn visible_ids(pool: &PgPool, user_id: DbId) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT id FROM projects WHERE owner_user_id = $1
             UNION
             SELECT project_id FROM project_members WHERE user_id = $1
             ORDER BY id",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }

    /// Whether the user is the owner or a member of the project.
    pub async fn has_access(
        pool: &PgPool,
        user_id: DbId,
        project_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT EXISTS (
                 SELECT 1 FROM projects
                  WHERE id = $2 AND owner_user_id = $1
                 UNION ALL
                 SELECT 1 FROM project_members
                  WHERE project_id = $2 AND user_id = $1
             )",
        )
        .bind(user_id)
        .bind(project_id)
        .fetch_one(pool)
        .await
    }
}
