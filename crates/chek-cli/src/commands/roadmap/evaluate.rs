use anyhow::{Context, bail};
use chek_advisor::{AdvisorOutcome, ChatAdvisor, MaturityAdvisor, RuleAdvisor, TokenUsage};
use chek_core::entities::GapEntry;
use chek_core::enums::AdvisorKind;
use chek_core::responses::RoadmapResponse;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AdvisorChoice;
use crate::commands::shared::project::require_project;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    project_id: &str,
    choice: AdvisorChoice,
    language: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    require_project(ctx, flags, project_id).await?;

    let gaps = ctx.service.list_gap_entries(project_id).await?;
    if gaps.is_empty() {
        bail!("project {project_id} has no benchmark gaps; run `chek benchmark evaluate` first");
    }

    let language = language.unwrap_or(&ctx.config.general.language);
    let (kind, outcome) = match choice {
        AdvisorChoice::Rule => (
            AdvisorKind::Rule,
            advise(&RuleAdvisor::new(ctx.options), &gaps, language, ctx, project_id, flags)
                .await?,
        ),
        AdvisorChoice::Chat => {
            let advisor = ChatAdvisor::new(&ctx.config.advisor, ctx.options)?;
            (
                AdvisorKind::Chat,
                advise(&advisor, &gaps, language, ctx, project_id, flags).await?,
            )
        }
    };

    ctx.service
        .replace_roadmap(project_id, &flags.user, &outcome.entries)
        .await?;

    if let Some(usage) = &outcome.usage {
        record_usage(ctx, project_id, flags, usage).await?;
    }

    output(
        &RoadmapResponse {
            project_id: project_id.to_string(),
            advisor: kind,
            entries: outcome.entries,
        },
        flags.format,
    )
}

async fn record_usage(
    ctx: &AppContext,
    project_id: &str,
    flags: &GlobalFlags,
    usage: &TokenUsage,
) -> anyhow::Result<()> {
    ctx.service
        .record_advisor_usage(
            project_id,
            &flags.user,
            &usage.model,
            usage.prompt_tokens,
            usage.completion_tokens,
        )
        .await?;
    Ok(())
}

/// Run the advisor. Tokens billed for a rejected reply are recorded before
/// the error is returned.
async fn advise<A: MaturityAdvisor>(
    advisor: &A,
    gaps: &[GapEntry],
    language: &str,
    ctx: &AppContext,
    project_id: &str,
    flags: &GlobalFlags,
) -> anyhow::Result<AdvisorOutcome> {
    match advisor.advise(gaps, language).await {
        Ok(outcome) => Ok(outcome),
        Err(error) => {
            if let Some(usage) = error.usage() {
                if let Err(record_error) = record_usage(ctx, project_id, flags, usage).await {
                    tracing::warn!(error = %record_error, "could not record advisor usage");
                }
            }
            Err(error).context("failed to build roadmap")
        }
    }
}
