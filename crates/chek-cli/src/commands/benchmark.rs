use crate::cli::GlobalFlags;
use crate::cli::subcommands::BenchmarkCommands;
use crate::context::AppContext;

mod evaluate;
mod get;

/// Handle `chek benchmark`.
pub async fn handle(
    action: &BenchmarkCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        BenchmarkCommands::Evaluate { project } => evaluate::run(project, ctx, flags).await,
        BenchmarkCommands::Get { project, text } => get::run(project, *text, ctx, flags).await,
    }
}
