//! Snapshot replacement through the public service API.
//!
//! Replacements for one project are last-commit-wins, and a replacement that
//! fails partway leaves the previously committed snapshot untouched.

use chek_core::entities::{GapEntry, RoadmapEntry};
use chek_db::service::ChekService;
use chrono::NaiveDate;
use pretty_assertions::assert_eq;

const USER: &str = "user-atomic";

fn gap(name: &str, level_gap: u32) -> GapEntry {
    GapEntry {
        kma_name: name.into(),
        level_gap,
        dependencies: Vec::new(),
        actions: vec![format!("{name} action")],
        tools: Vec::new(),
    }
}

async fn service_with_project() -> (ChekService, String) {
    let svc = ChekService::new_local(":memory:").await.unwrap();
    let project = svc.create_project(USER, "Gemeente Eindhoven", None).await.unwrap();
    (svc, project.id)
}

#[tokio::test]
async fn sequential_replacements_last_commit_wins() {
    let (svc, project_id) = service_with_project().await;

    let runs = [
        vec![gap("Permitting Software", 2), gap("Staff Training", 1)],
        vec![gap("Legal Review", 0)],
        vec![gap("Data Standards", 3), gap("Transparency", 1)],
    ];
    for run in &runs {
        svc.replace_gap_entries(&project_id, USER, run).await.unwrap();
    }

    assert_eq!(svc.list_gap_entries(&project_id).await.unwrap(), runs[2]);
}

#[tokio::test]
async fn failing_gap_replace_preserves_prior_snapshot() {
    let (svc, project_id) = service_with_project().await;
    let committed = vec![gap("Permitting Software", 2), gap("Staff Training", 1)];
    svc.replace_gap_entries(&project_id, USER, &committed)
        .await
        .unwrap();

    // The second row violates UNIQUE(project_id, kma) after the delete and
    // one insert have already run inside the transaction.
    let broken = [gap("Legal Review", 1), gap("Legal Review", 2)];
    assert!(
        svc.replace_gap_entries(&project_id, USER, &broken)
            .await
            .is_err()
    );

    assert_eq!(svc.list_gap_entries(&project_id).await.unwrap(), committed);
}

#[tokio::test]
async fn failing_roadmap_replace_keeps_flag_and_rows() {
    let (svc, project_id) = service_with_project().await;
    let epoch = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    let settled = RoadmapEntry::settled("Legal Review", epoch);

    let broken = [settled.clone(), settled];
    assert!(svc.replace_roadmap(&project_id, USER, &broken).await.is_err());

    assert!(svc.list_roadmap(&project_id).await.unwrap().is_empty());
    let project = svc.get_project(USER, &project_id).await.unwrap();
    assert!(!project.roadmap_created);
}

#[tokio::test]
async fn file_database_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("chek.db");
    let path = path.to_str().unwrap();

    let project_id = {
        let svc = ChekService::new_local(path).await.unwrap();
        let project = svc.create_project(USER, "Persisted", None).await.unwrap();
        svc.replace_gap_entries(&project.id, USER, &[gap("Transparency", 2)])
            .await
            .unwrap();
        project.id
    };

    let reopened = ChekService::new_local(path).await.unwrap();
    let entries = reopened.list_gap_entries(&project_id).await.unwrap();
    assert_eq!(entries, vec![gap("Transparency", 2)]);
}

fn roadmap(names: &[&str], start: NaiveDate) -> Vec<RoadmapEntry> {
    names
        .iter()
        .map(|name| RoadmapEntry {
            kma_name: (*name).into(),
            start_date: start,
            end_date: start + chrono::Months::new(6),
            dependencies: Vec::new(),
            actions: vec![format!("{name} action")],
            tools: vec!["Permit platform".into()],
        })
        .collect()
}

/// Whatever the interleaving, the stored snapshot is exactly one of the
/// inputs that committed, never rows from both.
fn assert_single_snapshot(
    stored: &[RoadmapEntry],
    first: (&[RoadmapEntry], bool),
    second: (&[RoadmapEntry], bool),
) {
    assert!(first.1 || second.1, "at least one replacement must commit");
    let matches_first = first.1 && stored == first.0;
    let matches_second = second.1 && stored == second.0;
    assert!(
        matches_first || matches_second,
        "stored snapshot is a mix of concurrent replacements: {stored:?}"
    );
}

#[tokio::test]
async fn concurrent_replacements_on_one_handle_never_mix() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("chek.db");
    let svc = ChekService::new_local(path.to_str().unwrap()).await.unwrap();
    let project = svc.create_project(USER, "Gemeente Tilburg", None).await.unwrap();

    let epoch = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    let a = roadmap(&["Permitting Software", "Staff Training", "Legal Review"], epoch);
    let b = roadmap(&["Data Standards", "Transparency"], epoch);

    let (ra, rb) = tokio::join!(
        svc.replace_roadmap(&project.id, USER, &a),
        svc.replace_roadmap(&project.id, USER, &b),
    );

    let stored = svc.list_roadmap(&project.id).await.unwrap();
    assert_single_snapshot(&stored, (&a, ra.is_ok()), (&b, rb.is_ok()));
}

#[tokio::test]
async fn concurrent_replacements_from_two_handles_never_mix() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("chek.db");
    let path = path.to_str().unwrap();

    let first = ChekService::new_local(path).await.unwrap();
    let project = first.create_project(USER, "Gemeente Breda", None).await.unwrap();
    let second = ChekService::new_local(path).await.unwrap();

    let epoch = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    let a = roadmap(&["Permitting Software", "Staff Training"], epoch);
    let b = roadmap(&["Legal Review", "Data Standards", "Transparency"], epoch);

    // A busy error on one side is acceptable; a blended snapshot is not.
    let (ra, rb) = tokio::join!(
        first.replace_roadmap(&project.id, USER, &a),
        second.replace_roadmap(&project.id, USER, &b),
    );

    let stored = first.list_roadmap(&project.id).await.unwrap();
    assert_single_snapshot(&stored, (&a, ra.is_ok()), (&b, rb.is_ok()));
    assert_eq!(second.list_roadmap(&project.id).await.unwrap(), stored);

    let project = first.get_project(USER, &project.id).await.unwrap();
    assert!(project.roadmap_created);
}
