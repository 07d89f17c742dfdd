//! Invariant checks for roadmaps produced outside the scheduler.
//!
//! A maturity advisor may return a roadmap shaped like the scheduler's output
//! without honoring its rules. Nothing is persisted until every entry passes.

use std::collections::HashMap;

use chek_core::entities::{GapEntry, RoadmapEntry};

use crate::error::RoadmapError;
use crate::graph::DependencyGraph;
use crate::schedule::ScheduleOptions;

/// Check `entries` against the gap set they were derived from.
///
/// The roadmap must cover every gap exactly once and each entry must satisfy:
/// - zero gap: `start_date == end_date`, no dependencies, actions, or tools
/// - gap `g > 0`: `end_date` is `g` windows after `start_date`, `start_date`
///   is not before the epoch, dependencies are the gap's own, and there is one
///   action per gap action (action text may be translated)
/// - `start_date` is not before the end of any KMA whose gap actions meet this
///   KMA's gap dependencies
///
/// Ordering is derived from `gaps`, never from the entries' own lists.
///
/// # Errors
///
/// Returns `RoadmapError::SchemaValidation` for the first offending KMA, with
/// every problem found on it.
pub fn validate_roadmap(
    gaps: &[GapEntry],
    entries: &[RoadmapEntry],
    options: &ScheduleOptions,
) -> Result<(), RoadmapError> {
    let gap_by_name: HashMap<&str, &GapEntry> =
        gaps.iter().map(|g| (g.kma_name.as_str(), g)).collect();

    let mut entry_by_name: HashMap<&str, &RoadmapEntry> = HashMap::with_capacity(entries.len());
    for entry in entries {
        let Some(gap) = gap_by_name.get(entry.kma_name.as_str()) else {
            return Err(invalid(entry, vec!["KMA is not part of the benchmark".into()]));
        };
        if entry_by_name.insert(entry.kma_name.as_str(), entry).is_some() {
            return Err(invalid(entry, vec!["KMA appears more than once".into()]));
        }
        let errors = window_errors(gap, entry, options);
        if !errors.is_empty() {
            return Err(invalid(entry, errors));
        }
    }

    if let Some(missing) = gaps
        .iter()
        .find(|g| !entry_by_name.contains_key(g.kma_name.as_str()))
    {
        return Err(RoadmapError::SchemaValidation {
            kma: missing.kma_name.clone(),
            errors: vec!["KMA is missing from the roadmap".into()],
        });
    }

    let graph = DependencyGraph::build(gaps);
    for (index, gap) in gaps.iter().enumerate() {
        if gap.level_gap == 0 {
            continue;
        }
        let entry = entry_by_name[gap.kma_name.as_str()];
        let late: Vec<String> = graph
            .prerequisites(index)
            .into_iter()
            .map(|p| entry_by_name[gaps[p].kma_name.as_str()])
            .filter(|prerequisite| entry.start_date < prerequisite.end_date)
            .map(|prerequisite| {
                format!(
                    "starts {} before prerequisite '{}' ends {}",
                    entry.start_date, prerequisite.kma_name, prerequisite.end_date
                )
            })
            .collect();
        if !late.is_empty() {
            return Err(invalid(entry, late));
        }
    }

    Ok(())
}

fn window_errors(gap: &GapEntry, entry: &RoadmapEntry, options: &ScheduleOptions) -> Vec<String> {
    let mut errors = Vec::new();
    if gap.level_gap == 0 {
        if entry.start_date != entry.end_date {
            errors.push("zero gap requires start_date == end_date".into());
        }
        if !entry.dependencies.is_empty() || !entry.actions.is_empty() || !entry.tools.is_empty() {
            errors.push("zero gap requires empty dependencies, actions and check_tools".into());
        }
        return errors;
    }

    if entry.start_date < options.epoch {
        errors.push(format!(
            "start_date {} is before the epoch {}",
            entry.start_date, options.epoch
        ));
    }
    match options.end_date(entry.start_date, gap.level_gap) {
        Some(expected) if expected == entry.end_date => {}
        Some(expected) => errors.push(format!(
            "end_date {} should be {expected} for a gap of {}",
            entry.end_date, gap.level_gap
        )),
        None => errors.push("end_date is out of range".into()),
    }
    if entry.dependencies != gap.dependencies {
        errors.push(format!(
            "dependencies {:?} should be {:?}",
            entry.dependencies, gap.dependencies
        ));
    }
    if entry.actions.len() != gap.actions.len() {
        errors.push(format!(
            "expected {} actions, found {}",
            gap.actions.len(),
            entry.actions.len()
        ));
    }
    errors
}

fn invalid(entry: &RoadmapEntry, errors: Vec<String>) -> RoadmapError {
    RoadmapError::SchemaValidation {
        kma: entry.kma_name.clone(),
        errors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::schedule;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn gaps() -> Vec<GapEntry> {
        vec![
            GapEntry {
                kma_name: "Permitting Software".into(),
                level_gap: 2,
                dependencies: vec![],
                actions: vec!["Purchase Software License".into()],
                tools: vec![],
            },
            GapEntry {
                kma_name: "Staff Training".into(),
                level_gap: 1,
                dependencies: vec!["Purchase Software License".into()],
                actions: vec!["Train staff".into()],
                tools: vec![],
            },
            GapEntry {
                kma_name: "Legal Review".into(),
                level_gap: 0,
                dependencies: vec![],
                actions: vec![],
                tools: vec![],
            },
        ]
    }

    fn errors_for(result: Result<(), RoadmapError>, kma: &str) -> Vec<String> {
        match result {
            Err(RoadmapError::SchemaValidation { kma: got, errors }) => {
                assert_eq!(got, kma);
                errors
            }
            other => panic!("expected validation failure, got {other:?}"),
        }
    }

    #[test]
    fn scheduler_output_is_valid() {
        let options = ScheduleOptions::default();
        let roadmap = schedule(&gaps(), &options).unwrap();
        assert!(validate_roadmap(&gaps(), &roadmap, &options).is_ok());
    }

    #[test]
    fn zero_gap_with_actions_is_rejected() {
        let options = ScheduleOptions::default();
        let mut roadmap = schedule(&gaps(), &options).unwrap();
        roadmap[2].actions.push("Review statutes".into());
        let errors = errors_for(validate_roadmap(&gaps(), &roadmap, &options), "Legal Review");
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn zero_gap_with_window_is_rejected() {
        let options = ScheduleOptions::default();
        let mut roadmap = schedule(&gaps(), &options).unwrap();
        roadmap[2].end_date = date(2025, 4, 1);
        errors_for(validate_roadmap(&gaps(), &roadmap, &options), "Legal Review");
    }

    #[test]
    fn wrong_duration_is_rejected() {
        let options = ScheduleOptions::default();
        let mut roadmap = schedule(&gaps(), &options).unwrap();
        roadmap[0].end_date = date(2025, 4, 1);
        let errors = errors_for(
            validate_roadmap(&gaps(), &roadmap, &options),
            "Permitting Software",
        );
        assert!(errors[0].contains("2025-07-01"));
    }

    #[test]
    fn dependent_starting_early_is_rejected() {
        let options = ScheduleOptions::default();
        let mut roadmap = schedule(&gaps(), &options).unwrap();
        roadmap[1].start_date = date(2025, 1, 1);
        roadmap[1].end_date = date(2025, 4, 1);
        errors_for(validate_roadmap(&gaps(), &roadmap, &options), "Staff Training");
    }

    #[test]
    fn start_before_epoch_is_rejected() {
        let options = ScheduleOptions::default();
        let mut roadmap = schedule(&gaps(), &options).unwrap();
        roadmap[0].start_date = date(2024, 10, 1);
        roadmap[0].end_date = date(2025, 4, 1);
        errors_for(
            validate_roadmap(&gaps(), &roadmap, &options),
            "Permitting Software",
        );
    }

    #[test]
    fn unknown_duplicate_and_missing_kmas_are_rejected() {
        let options = ScheduleOptions::default();
        let roadmap = schedule(&gaps(), &options).unwrap();

        let mut unknown = roadmap.clone();
        unknown.push(RoadmapEntry::settled("Invented", date(2025, 1, 1)));
        errors_for(validate_roadmap(&gaps(), &unknown, &options), "Invented");

        let mut duplicated = roadmap.clone();
        duplicated.push(roadmap[2].clone());
        errors_for(validate_roadmap(&gaps(), &duplicated, &options), "Legal Review");

        let missing = roadmap[..2].to_vec();
        errors_for(validate_roadmap(&gaps(), &missing, &options), "Legal Review");
    }

    #[test]
    fn emptied_dependencies_do_not_lift_ordering() {
        let options = ScheduleOptions::default();
        let mut roadmap = schedule(&gaps(), &options).unwrap();
        roadmap[1].dependencies.clear();
        roadmap[1].start_date = date(2025, 1, 1);
        roadmap[1].end_date = date(2025, 4, 1);

        let errors = errors_for(validate_roadmap(&gaps(), &roadmap, &options), "Staff Training");
        assert_eq!(
            errors,
            vec![r#"dependencies [] should be ["Purchase Software License"]"#]
        );
    }

    #[test]
    fn ordering_follows_gap_dependencies_not_entry_lists() {
        let options = ScheduleOptions::default();
        let mut roadmap = schedule(&gaps(), &options).unwrap();
        // Prerequisite renamed its action: the gap still links the two KMAs.
        roadmap[0].actions = vec!["Acheter une licence".into()];
        roadmap[1].start_date = date(2025, 1, 1);
        roadmap[1].end_date = date(2025, 4, 1);

        let errors = errors_for(validate_roadmap(&gaps(), &roadmap, &options), "Staff Training");
        assert_eq!(
            errors,
            vec!["starts 2025-01-01 before prerequisite 'Permitting Software' ends 2025-07-01"]
        );
    }

    #[test]
    fn translated_actions_are_accepted() {
        let options = ScheduleOptions::default();
        let mut roadmap = schedule(&gaps(), &options).unwrap();
        roadmap[1].actions = vec!["Personeel opleiden".into()];
        assert!(validate_roadmap(&gaps(), &roadmap, &options).is_ok());
    }

    #[test]
    fn missing_actions_are_rejected() {
        let options = ScheduleOptions::default();
        let mut roadmap = schedule(&gaps(), &options).unwrap();
        roadmap[0].actions.clear();
        let errors = errors_for(
            validate_roadmap(&gaps(), &roadmap, &options),
            "Permitting Software",
        );
        assert_eq!(errors, vec!["expected 1 actions, found 0"]);
    }
}
