use chek_core::responses::BenchmarkResponse;
use chek_roadmap::{RoadmapError, compute_gaps};

use crate::cli::GlobalFlags;
use crate::commands::shared::project::require_project;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(project_id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    require_project(ctx, flags, project_id).await?;

    let catalog = ctx.load_catalog()?;
    let scores = ctx.service.list_scores(project_id, None).await?;

    let entries = match compute_gaps(&scores, &catalog) {
        Ok(entries) => entries,
        Err(RoadmapError::NoData) => {
            tracing::warn!(project_id, "no scores to benchmark");
            return output(
                &BenchmarkResponse {
                    project_id: project_id.to_string(),
                    entries: Vec::new(),
                    message: "no maturity scores to benchmark; 0 entries".to_string(),
                },
                flags.format,
            );
        }
        Err(error) => return Err(error.into()),
    };

    ctx.service
        .replace_gap_entries(project_id, &flags.user, &entries)
        .await?;

    let open = entries.iter().filter(|entry| entry.level_gap > 0).count();
    output(
        &BenchmarkResponse {
            project_id: project_id.to_string(),
            message: format!("{} entries, {open} below target", entries.len()),
            entries,
        },
        flags.format,
    )
}
