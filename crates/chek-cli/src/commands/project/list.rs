use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let projects = ctx.service.list_projects(&flags.user).await?;
    output(&projects, flags.format)
}
