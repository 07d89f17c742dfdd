use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Project { action } => commands::project::handle(&action, ctx, flags).await,
        Commands::Score { action } => commands::score::handle(&action, ctx, flags).await,
        Commands::Benchmark { action } => commands::benchmark::handle(&action, ctx, flags).await,
        Commands::Roadmap { action } => commands::roadmap::handle(&action, ctx, flags).await,
        Commands::Catalog { .. } => unreachable!("catalog is pre-dispatched in main"),
    }
}
