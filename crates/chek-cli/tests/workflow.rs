use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use pretty_assertions::assert_eq;
use serde_json::Value;

fn fixture_catalog() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../chek-roadmap/tests/fixtures/benchmark.json")
}

fn chek(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_chek"))
        .args(args)
        .args(["--format", "raw"])
        .current_dir(dir)
        .env_clear()
        .env("HOME", dir)
        .env("CHEK_DATABASE__PATH", dir.join("chek.db"))
        .env("CHEK_ROADMAP__CATALOG_PATH", fixture_catalog())
        .output()
        .expect("chek binary should run")
}

fn chek_json(dir: &Path, args: &[&str]) -> Value {
    let out = chek(dir, args);
    assert!(
        out.status.success(),
        "chek {args:?} failed: {}",
        String::from_utf8_lossy(&out.stderr)
    );
    serde_json::from_slice(&out.stdout).expect("stdout should be JSON")
}

fn create_project(dir: &Path, name: &str) -> String {
    let project = chek_json(dir, &["project", "create", name]);
    project["id"].as_str().expect("project id").to_string()
}

#[test]
fn scores_to_roadmap() {
    let dir = tempfile::tempdir().unwrap();
    let id = create_project(dir.path(), "Ghent permits");

    let scores = dir.path().join("organisation.json");
    std::fs::write(
        &scores,
        r#"[
            {"label": "Permitting Software", "level": 1},
            {"label": "Staff Training", "level": 2, "justification": "ad hoc"}
        ]"#,
    )
    .unwrap();
    let imported = chek_json(
        dir.path(),
        &[
            "score",
            "import",
            &id,
            "--category",
            "organisation",
            scores.to_str().unwrap(),
        ],
    );
    assert_eq!(imported.as_array().map(Vec::len), Some(2));

    let benchmark = chek_json(dir.path(), &["benchmark", "evaluate", &id]);
    let gaps = benchmark["entries"].as_array().unwrap();
    assert_eq!(gaps.len(), 2);
    assert_eq!(gaps[0]["kma"], "Permitting Software");
    assert_eq!(gaps[0]["level_gap"], 2);
    assert_eq!(gaps[1]["level_gap"], 1);

    let roadmap = chek_json(dir.path(), &["roadmap", "evaluate", &id]);
    assert_eq!(roadmap["advisor"], "rule");
    let windows = roadmap["entries"]
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| {
            (
                entry["kma"].as_str().unwrap().to_string(),
                entry["start_date"].as_str().unwrap().to_string(),
                entry["end_date"].as_str().unwrap().to_string(),
            )
        })
        .collect::<Vec<_>>();
    assert_eq!(
        windows,
        vec![
            (
                "Permitting Software".to_string(),
                "2025-01-01".to_string(),
                "2025-07-01".to_string()
            ),
            (
                "Staff Training".to_string(),
                "2025-07-01".to_string(),
                "2025-10-01".to_string()
            ),
        ]
    );

    let stored = chek_json(dir.path(), &["roadmap", "get", &id]);
    assert_eq!(stored["roadmap_created"], true);
    assert_eq!(stored["entries"], roadmap["entries"]);
}

#[test]
fn benchmark_without_scores_reports_zero_entries() {
    let dir = tempfile::tempdir().unwrap();
    let id = create_project(dir.path(), "Empty");

    let benchmark = chek_json(dir.path(), &["benchmark", "evaluate", &id]);
    assert_eq!(benchmark["entries"], Value::Array(vec![]));
    assert!(benchmark["message"].as_str().unwrap().contains("0 entries"));
}

#[test]
fn chat_advisor_requires_api_key() {
    let dir = tempfile::tempdir().unwrap();
    let id = create_project(dir.path(), "Chat");
    chek_json(
        dir.path(),
        &["score", "set", &id, "--category", "technology", "--label", "Legal Review", "--level", "0"],
    );
    chek_json(dir.path(), &["benchmark", "evaluate", &id]);

    let out = chek(dir.path(), &["roadmap", "evaluate", &id, "--advisor", "chat"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("advisor is not configured"));
}

#[test]
fn projects_are_scoped_to_user() {
    let dir = tempfile::tempdir().unwrap();
    let id = create_project(dir.path(), "Private");

    let out = chek(dir.path(), &["project", "get", &id, "--user", "mallory"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("not found"));

    let listed = chek_json(dir.path(), &["project", "list"]);
    assert_eq!(listed.as_array().map(Vec::len), Some(1));
}

#[test]
fn catalog_show_lists_areas() {
    let dir = tempfile::tempdir().unwrap();
    let areas = chek_json(dir.path(), &["catalog", "show"]);
    assert_eq!(areas.as_array().map(Vec::len), Some(5));
    assert_eq!(areas[0]["kma"], "Permitting Software");
}

#[test]
fn information_import_is_all_or_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let id = create_project(dir.path(), "Atomic import");

    let scores = dir.path().join("information.json");
    std::fs::write(
        &scores,
        r#"[
            {"label": "Permitting Software", "level": 1},
            {"label": "Staff Training", "level": 9}
        ]"#,
    )
    .unwrap();
    let out = chek(
        dir.path(),
        &[
            "score",
            "import",
            &id,
            "--category",
            "information",
            scores.to_str().unwrap(),
        ],
    );
    assert!(!out.status.success());

    let listed = chek_json(dir.path(), &["score", "list", &id]);
    assert_eq!(listed, Value::Array(vec![]));
}
