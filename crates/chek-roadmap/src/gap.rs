//! Maturity gap calculation.

use std::collections::HashMap;
use std::fmt::Write as _;

use chek_core::NO_DEPENDENCY_SENTINEL;
use chek_core::entities::{GapEntry, KeyMaturityArea, MaturityScore};

use crate::catalog::Catalog;
use crate::error::RoadmapError;

/// Compare scores against the catalog and produce one gap entry per assessed KMA.
///
/// Entries come out in catalog order. Catalog KMAs without a score are skipped,
/// not zero-filled, and scores naming a KMA the catalog does not know are
/// ignored. If a KMA is scored twice, the first score wins.
///
/// # Errors
///
/// - `RoadmapError::NoData` if `scores` is empty.
/// - `RoadmapError::InvalidLevel` if any score lies outside `-1..=5`.
pub fn compute_gaps(
    scores: &[MaturityScore],
    catalog: &Catalog,
) -> Result<Vec<GapEntry>, RoadmapError> {
    if scores.is_empty() {
        return Err(RoadmapError::NoData);
    }

    let mut by_name: HashMap<&str, i32> = HashMap::with_capacity(scores.len());
    for score in scores {
        if !score.level_in_range() {
            return Err(RoadmapError::InvalidLevel {
                kma: score.kma_name.clone(),
                level: score.current_level,
            });
        }
        by_name
            .entry(score.kma_name.as_str())
            .or_insert(score.current_level);
    }

    let entries: Vec<GapEntry> = catalog
        .areas()
        .iter()
        .filter_map(|area| {
            by_name
                .get(area.name.as_str())
                .map(|&level| gap_entry(area, level))
        })
        .collect();

    tracing::debug!(
        scores = scores.len(),
        entries = entries.len(),
        "computed benchmark gaps"
    );
    Ok(entries)
}

fn gap_entry(area: &KeyMaturityArea, current_level: i32) -> GapEntry {
    let level_gap = u32::try_from(area.target_level - current_level).unwrap_or(0);
    GapEntry {
        kma_name: area.name.clone(),
        level_gap,
        dependencies: area
            .dependencies
            .iter()
            .filter(|dep| dep.as_str() != NO_DEPENDENCY_SENTINEL)
            .cloned()
            .collect(),
        actions: area.actions.clone(),
        tools: area.tools.clone(),
    }
}

/// Render gap entries as the plain-text block handed to a maturity advisor.
#[must_use]
pub fn render_gap_entries(entries: &[GapEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        let _ = writeln!(out, "KMA: {}", entry.kma_name);
        let _ = writeln!(out, "Level Difference: {}", entry.level_gap);
        let _ = writeln!(out, "Dependencies: {}", entry.dependencies.join(", "));
        let _ = writeln!(out, "Actions: {}", entry.actions.join(", "));
        let _ = writeln!(out, "Check Tools: {}", entry.tools.join(", "));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn catalog() -> Catalog {
        Catalog::from_json(
            r#"{"Key Maturity Areas": [
                {"kma": "Permitting Software", "check level": 3,
                 "dependencies": "No previous action needed",
                 "actions": "Purchase Software License", "check tools": "Vendor list"},
                {"kma": "Legal Review", "check level": 2, "dependencies": [], "actions": ["Review statutes"]},
                {"kma": "Data Standards", "check level": 4, "actions": ["Adopt IFC"]}
            ]}"#,
        )
        .unwrap()
    }

    #[test]
    fn gap_is_target_minus_current() {
        let gaps = compute_gaps(&[MaturityScore::new("Permitting Software", 1)], &catalog()).unwrap();
        assert_eq!(
            gaps,
            vec![GapEntry {
                kma_name: "Permitting Software".into(),
                level_gap: 2,
                dependencies: vec![],
                actions: vec!["Purchase Software License".into()],
                tools: vec!["Vendor list".into()],
            }]
        );
    }

    #[test]
    fn exceeding_target_clamps_to_zero() {
        let gaps = compute_gaps(&[MaturityScore::new("Legal Review", 4)], &catalog()).unwrap();
        assert_eq!(gaps[0].level_gap, 0);
    }

    #[test]
    fn unassessed_level_counts_from_minus_one() {
        let gaps = compute_gaps(&[MaturityScore::new("Legal Review", -1)], &catalog()).unwrap();
        assert_eq!(gaps[0].level_gap, 3);
    }

    #[test]
    fn unscored_kmas_are_skipped() {
        let scores = [
            MaturityScore::new("Legal Review", 1),
            MaturityScore::new("Permitting Software", 0),
        ];
        let gaps = compute_gaps(&scores, &catalog()).unwrap();
        let names: Vec<_> = gaps.iter().map(|g| g.kma_name.as_str()).collect();
        // catalog order, no "Data Standards"
        assert_eq!(names, vec!["Permitting Software", "Legal Review"]);
    }

    #[test]
    fn unknown_score_labels_are_ignored() {
        let scores = [
            MaturityScore::new("Legal Review", 1),
            MaturityScore::new("Not In Catalog", 0),
        ];
        assert_eq!(compute_gaps(&scores, &catalog()).unwrap().len(), 1);
    }

    #[test]
    fn first_duplicate_score_wins() {
        let scores = [
            MaturityScore::new("Legal Review", 0),
            MaturityScore::new("Legal Review", 2),
        ];
        assert_eq!(compute_gaps(&scores, &catalog()).unwrap()[0].level_gap, 2);
    }

    #[test]
    fn empty_scores_is_no_data() {
        let err = compute_gaps(&[], &catalog()).unwrap_err();
        assert!(err.is_no_data());
    }

    #[test]
    fn out_of_range_level_is_rejected() {
        let err = compute_gaps(&[MaturityScore::new("Legal Review", 7)], &catalog()).unwrap_err();
        assert!(matches!(err, RoadmapError::InvalidLevel { level: 7, .. }));

        let err = compute_gaps(&[MaturityScore::new("Legal Review", -2)], &catalog()).unwrap_err();
        assert!(matches!(err, RoadmapError::InvalidLevel { level: -2, .. }));
    }

    #[test]
    fn sentinel_is_dropped_but_real_dependencies_kept() {
        let catalog = Catalog::from_json(
            r#"{"Key Maturity Areas": [{"kma": "A", "check level": 2,
                "dependencies": ["No previous action needed", "Train staff"]}]}"#,
        )
        .unwrap();
        let gaps = compute_gaps(&[MaturityScore::new("A", 0)], &catalog).unwrap();
        assert_eq!(gaps[0].dependencies, vec!["Train staff"]);
    }

    #[test]
    fn recomputation_is_identical() {
        let scores = [
            MaturityScore::new("Legal Review", 1),
            MaturityScore::new("Permitting Software", 0),
        ];
        let first = serde_json::to_string(&compute_gaps(&scores, &catalog()).unwrap()).unwrap();
        let second = serde_json::to_string(&compute_gaps(&scores, &catalog()).unwrap()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn renders_advisor_text() {
        let gaps = compute_gaps(&[MaturityScore::new("Permitting Software", 1)], &catalog()).unwrap();
        assert_eq!(
            render_gap_entries(&gaps),
            "KMA: Permitting Software\n\
             Level Difference: 2\n\
             Dependencies: \n\
             Actions: Purchase Software License\n\
             Check Tools: Vendor list\n\n"
        );
    }
}
