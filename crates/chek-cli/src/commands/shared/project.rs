use chek_core::entities::Project;
use chek_core::errors::CoreError;
use chek_db::error::DatabaseError;

use crate::cli::GlobalFlags;
use crate::context::AppContext;

/// Fetch a project owned by the acting user.
///
/// A project owned by someone else is reported as not found.
pub async fn require_project(
    ctx: &AppContext,
    flags: &GlobalFlags,
    project_id: &str,
) -> anyhow::Result<Project> {
    ctx.service
        .get_project(&flags.user, project_id)
        .await
        .map_err(|error| project_error(error, project_id))
}

/// Turn a missing row into `CoreError::NotFound` for the project.
pub fn project_error(error: DatabaseError, project_id: &str) -> anyhow::Error {
    match error {
        DatabaseError::NoResult => CoreError::NotFound {
            entity_type: "project".to_string(),
            id: project_id.to_string(),
        }
        .into(),
        other => other.into(),
    }
}
