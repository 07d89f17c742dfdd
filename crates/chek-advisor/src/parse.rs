//! Boundary checks for roadmaps returned by a chat model.
//!
//! The raw reply is untrusted text. It is reduced to JSON, every element is
//! validated against the `roadmap_entry` schema, deserialized, and finally
//! checked against the gap set with [`validate_roadmap`].

use chek_core::entities::{GapEntry, RoadmapEntry};
use chek_roadmap::{RoadmapError, ScheduleOptions, validate_roadmap};
use chek_schema::{ROADMAP_ENTRY, SchemaError, SchemaRegistry};
use serde_json::Value;

use crate::error::AdvisorError;

/// Strip a surrounding Markdown code fence (```` ```json ... ``` ````), if any.
#[must_use]
pub fn strip_code_fence(content: &str) -> &str {
    let trimmed = content.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let body = rest.split_once('\n').map_or("", |(_, body)| body);
    body.trim_end().strip_suffix("```").unwrap_or(body).trim()
}

fn roadmap_items(value: Value) -> Result<Vec<Value>, AdvisorError> {
    match value {
        Value::Array(items) => Ok(items),
        Value::Object(mut map) => match map.remove("roadmap") {
            Some(Value::Array(items)) => Ok(items),
            _ => Err(AdvisorError::Parse(
                "expected a JSON array or an object with a 'roadmap' array".into(),
            )),
        },
        _ => Err(AdvisorError::Parse("expected a JSON array of roadmap entries".into())),
    }
}

fn item_name(item: &Value) -> String {
    item.get("kma")
        .and_then(Value::as_str)
        .unwrap_or("(unnamed entry)")
        .to_string()
}

/// Accept the `chek_tools` spelling for `check_tools`.
fn normalize_item(item: &mut Value) {
    let Value::Object(map) = item else {
        return;
    };
    if map.contains_key("check_tools") {
        return;
    }
    if let Some(tools) = map.remove("chek_tools") {
        map.insert("check_tools".into(), tools);
    }
}

fn parse_item(mut item: Value, schema: &SchemaRegistry) -> Result<RoadmapEntry, AdvisorError> {
    normalize_item(&mut item);
    let kma = item_name(&item);

    match schema.validate(ROADMAP_ENTRY, &item) {
        Ok(()) => {}
        Err(SchemaError::Mismatch { errors, .. }) => {
            return Err(RoadmapError::SchemaValidation { kma, errors }.into());
        }
        Err(e) => return Err(AdvisorError::Parse(e.to_string())),
    }

    serde_json::from_value(item).map_err(|e| {
        RoadmapError::SchemaValidation {
            kma,
            errors: vec![e.to_string()],
        }
        .into()
    })
}

/// Turn a chat reply into a validated roadmap in gap order.
///
/// # Errors
///
/// - `AdvisorError::Parse` if the reply is not JSON or not a list of entries.
/// - `AdvisorError::Roadmap(SchemaValidation)` if an entry is malformed or the
///   roadmap breaks a scheduling invariant for `gaps`.
pub fn parse_roadmap_content(
    content: &str,
    gaps: &[GapEntry],
    options: &ScheduleOptions,
    schema: &SchemaRegistry,
) -> Result<Vec<RoadmapEntry>, AdvisorError> {
    let value: Value = serde_json::from_str(strip_code_fence(content))
        .map_err(|e| AdvisorError::Parse(format!("reply is not JSON: {e}")))?;

    let mut entries = roadmap_items(value)?
        .into_iter()
        .map(|item| parse_item(item, schema))
        .collect::<Result<Vec<_>, _>>()?;

    validate_roadmap(gaps, &entries, options)?;

    // validate_roadmap guarantees a one-to-one match with the gaps.
    entries.sort_by_key(|entry| {
        gaps.iter()
            .position(|gap| gap.kma_name == entry.kma_name)
            .unwrap_or(usize::MAX)
    });
    Ok(entries)
}
