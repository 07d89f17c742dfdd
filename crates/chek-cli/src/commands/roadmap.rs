use crate::cli::GlobalFlags;
use crate::cli::subcommands::RoadmapCommands;
use crate::context::AppContext;

mod evaluate;
mod get;

/// Handle `chek roadmap`.
pub async fn handle(
    action: &RoadmapCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        RoadmapCommands::Evaluate {
            project,
            advisor,
            language,
        } => evaluate::run(project, *advisor, language.as_deref(), ctx, flags).await,
        RoadmapCommands::Get { project } => get::run(project, ctx, flags).await,
    }
}
