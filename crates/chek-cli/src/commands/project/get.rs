use serde::Serialize;

use chek_core::entities::Project;

use crate::cli::GlobalFlags;
use crate::commands::shared::project::require_project;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ProjectDetailResponse {
    project: Project,
    score_count: usize,
    gap_count: usize,
    roadmap_count: usize,
    advisor_tokens: u64,
}

pub async fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let project = require_project(ctx, flags, id).await?;
    let score_count = ctx.service.list_scores(id, None).await?.len();
    let gap_count = ctx.service.list_gap_entries(id).await?.len();
    let roadmap_count = ctx.service.list_roadmap(id).await?.len();
    let advisor_tokens = ctx
        .service
        .list_advisor_usage(id)
        .await?
        .iter()
        .map(|usage| usage.prompt_tokens + usage.completion_tokens)
        .sum();

    output(
        &ProjectDetailResponse {
            project,
            score_count,
            gap_count,
            roadmap_count,
            advisor_tokens,
        },
        flags.format,
    )
}
