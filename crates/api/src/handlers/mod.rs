//! HTTP handlers.

pub mod events;
pub mod ingest;
pub mod stats;

use sqlx::PgPool;

use pulse_core::error::CoreError;
use pulse_core::types::DbId;
use pulse_db::models::project::Project;
use pulse_db::repositories::ProjectRepo;

use crate::error::AppError;

/// Load a project and verify the caller may view it.
///
/// Existence is checked before access so a missing project is 404 while an
/// existing-but-inaccessible one is 403; callers depend on that
/// distinction.
pub(crate) async fn ensure_project_access(
    pool: &PgPool,
    user_id: DbId,
    project_id: DbId,
) -> Result<Project, AppError> {
    let project = ProjectRepo::find_by_id(pool, project_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id: project_id,
        }))?;

    if !ProjectRepo::has_access(pool, user_id, project.id).await? {
        return Err(AppError::Core(CoreError::Forbidden(
            "You do not have access to this project".into(),
        )));
    }

    Ok(project)
}
