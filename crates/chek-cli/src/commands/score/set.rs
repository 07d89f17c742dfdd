use chek_core::entities::MaturityScore;
use chek_core::enums::MaturityCategory;

use crate::cli::GlobalFlags;
use crate::commands::shared::project::require_project;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    project_id: &str,
    category: MaturityCategory,
    label: &str,
    level: i32,
    justification: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    require_project(ctx, flags, project_id).await?;

    let mut score = MaturityScore::new(label, level);
    score.justification = justification.map(str::to_string);

    ctx.service
        .upsert_score(project_id, &flags.user, category, &score)
        .await?;

    let scores = ctx.service.list_scores(project_id, Some(category)).await?;
    output(&scores, flags.format)
}
