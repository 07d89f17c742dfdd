use chek_core::enums::MaturityCategory;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ScoreCommands;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;

mod import;
mod list;
mod set;

/// Handle `chek score`.
pub async fn handle(
    action: &ScoreCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ScoreCommands::Set {
            project,
            category,
            label,
            level,
            justification,
        } => {
            let category = parse_enum::<MaturityCategory>(category, "category")?;
            set::run(
                project,
                category,
                label,
                *level,
                justification.as_deref(),
                ctx,
                flags,
            )
            .await
        }
        ScoreCommands::Import {
            project,
            category,
            file,
        } => {
            let category = parse_enum::<MaturityCategory>(category, "category")?;
            import::run(project, category, file, ctx, flags).await
        }
        ScoreCommands::List { project, category } => {
            let category = category
                .as_deref()
                .map(|value| parse_enum::<MaturityCategory>(value, "category"))
                .transpose()?;
            list::run(project, category, ctx, flags).await
        }
    }
}
