use chek_core::responses::BenchmarkResponse;
use chek_roadmap::render_gap_entries;

use crate::cli::GlobalFlags;
use crate::commands::shared::project::require_project;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    project_id: &str,
    text: bool,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    require_project(ctx, flags, project_id).await?;
    let entries = ctx.service.list_gap_entries(project_id).await?;

    if text {
        println!("{}", render_gap_entries(&entries));
        return Ok(());
    }

    output(
        &BenchmarkResponse {
            project_id: project_id.to_string(),
            message: format!("{} entries", entries.len()),
            entries,
        },
        flags.format,
    )
}
