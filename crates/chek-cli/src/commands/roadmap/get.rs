use serde::Serialize;

use chek_core::entities::RoadmapEntry;

use crate::cli::GlobalFlags;
use crate::commands::shared::project::require_project;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct StoredRoadmapResponse {
    project_id: String,
    roadmap_created: bool,
    entries: Vec<RoadmapEntry>,
}

pub async fn run(project_id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let project = require_project(ctx, flags, project_id).await?;
    let entries = ctx.service.list_roadmap(project_id).await?;

    output(
        &StoredRoadmapResponse {
            project_id: project.id,
            roadmap_created: project.roadmap_created,
            entries,
        },
        flags.format,
    )
}
