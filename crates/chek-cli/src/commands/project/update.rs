use anyhow::bail;
use chek_db::updates::project::ProjectUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::commands::shared::project::project_error;
use crate::context::AppContext;
use crate::output::output;

pub struct UpdateArgs {
    pub name: Option<String>,
    pub instructions: Option<String>,
    pub clear_instructions: bool,
    pub maturity_assessment: Option<bool>,
    pub questionnaire_submitted: Option<bool>,
    pub report_created: Option<bool>,
}

pub async fn run(
    id: &str,
    args: UpdateArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut builder = ProjectUpdateBuilder::new();
    if let Some(name) = args.name {
        builder = builder.name(name);
    }
    if args.clear_instructions {
        builder = builder.building_permit_instructions(None);
    } else if let Some(instructions) = args.instructions {
        builder = builder.building_permit_instructions(Some(instructions));
    }
    if let Some(done) = args.maturity_assessment {
        builder = builder.maturity_assessment(done);
    }
    if let Some(done) = args.questionnaire_submitted {
        builder = builder.questionnaire_submitted(done);
    }
    if let Some(done) = args.report_created {
        builder = builder.report_created(done);
    }

    let update = builder.build();
    if update.is_empty() {
        bail!("nothing to update; pass at least one field");
    }

    let project = ctx
        .service
        .update_project(&flags.user, id, update)
        .await
        .map_err(|error| project_error(error, id))?;
    output(&project, flags.format)
}
