use chek_core::enums::MaturityCategory;

use crate::cli::GlobalFlags;
use crate::commands::shared::project::require_project;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    project_id: &str,
    category: Option<MaturityCategory>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    require_project(ctx, flags, project_id).await?;
    let scores = ctx.service.list_scores(project_id, category).await?;
    output(&scores, flags.format)
}
