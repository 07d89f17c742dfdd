use anyhow::{Context, bail};
use chek_core::entities::MaturityScore;
use chek_core::enums::MaturityCategory;
use chek_schema::{MATURITY_SCORE, SchemaRegistry};
use serde_json::Value;

use crate::cli::GlobalFlags;
use crate::commands::shared::project::require_project;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    project_id: &str,
    category: MaturityCategory,
    file: &str,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    require_project(ctx, flags, project_id).await?;

    let raw = std::fs::read_to_string(file).with_context(|| format!("failed to read {file}"))?;
    let scores = parse_scores(&raw, &SchemaRegistry::new())
        .with_context(|| format!("invalid score file {file}"))?;

    if category.merges_by_label() {
        ctx.service
            .upsert_scores(project_id, &flags.user, category, &scores)
            .await?;
    } else {
        ctx.service
            .replace_scores(project_id, &flags.user, category, &scores)
            .await?;
    }
    tracing::info!(project_id, %category, count = scores.len(), "scores imported");

    let stored = ctx.service.list_scores(project_id, Some(category)).await?;
    output(&stored, flags.format)
}

/// Parse a JSON array of scores, checking each item against the score schema
/// and the rubric range before anything is written.
fn parse_scores(raw: &str, registry: &SchemaRegistry) -> anyhow::Result<Vec<MaturityScore>> {
    let value: Value = serde_json::from_str(raw)?;
    let Value::Array(items) = value else {
        bail!("expected a JSON array of scores");
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            registry
                .validate(MATURITY_SCORE, &item)
                .with_context(|| format!("score #{index}"))?;
            let score: MaturityScore =
                serde_json::from_value(item).with_context(|| format!("score #{index}"))?;
            score.check_level().with_context(|| format!("score #{index}"))?;
            Ok(score)
        })
        .collect()
}
