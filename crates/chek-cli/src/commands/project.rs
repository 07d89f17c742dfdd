use crate::cli::GlobalFlags;
use crate::cli::subcommands::ProjectCommands;
use crate::context::AppContext;

mod create;
mod delete;
mod get;
mod list;
mod update;

/// Handle `chek project`.
pub async fn handle(
    action: &ProjectCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ProjectCommands::Create { name, instructions } => {
            create::run(name, instructions.as_deref(), ctx, flags).await
        }
        ProjectCommands::List => list::run(ctx, flags).await,
        ProjectCommands::Get { id } => get::run(id, ctx, flags).await,
        ProjectCommands::Update {
            id,
            name,
            instructions,
            clear_instructions,
            maturity_assessment,
            questionnaire_submitted,
            report_created,
        } => {
            let args = update::UpdateArgs {
                name: name.clone(),
                instructions: instructions.clone(),
                clear_instructions: *clear_instructions,
                maturity_assessment: *maturity_assessment,
                questionnaire_submitted: *questionnaire_submitted,
                report_created: *report_created,
            };
            update::run(id, args, ctx, flags).await
        }
        ProjectCommands::Delete { id } => delete::run(id, ctx, flags).await,
    }
}
