use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::commands::shared::project::project_error;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct DeleteResponse<'a> {
    id: &'a str,
    deleted: bool,
}

pub async fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.service
        .delete_project(&flags.user, id)
        .await
        .map_err(|error| project_error(error, id))?;
    output(&DeleteResponse { id, deleted: true }, flags.format)
}
