//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run and verify outputs.

use std::path::Path;
use std::process::Command;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "fitplan-cli", "--quiet", "--"])
        .args(args)
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

fn write_inputs(dir: &Path) {
    std::fs::write(
        dir.join("activities.txt"),
        "- 15-minute walk — 2 pts\n- Rehab session — 4 pts\n",
    )
    .unwrap();
    std::fs::write(dir.join("rules.txt"), "Daily Total (activity points): 18\n").unwrap();
    std::fs::write(
        dir.join("schedule.json"),
        r#"{"challenge_start": "2026-01-12", "challenge_end": "2026-01-14",
            "events": [{"name": "Strength Class", "points": 5, "duration_minutes": 45,
                        "occurrences": [{"weekday": "Mon", "time": "17:30"}]}]}"#,
    )
    .unwrap();
}

#[test]
fn plan_generate_then_ics_export() {
    let dir = tempfile::tempdir().unwrap();
    write_inputs(dir.path());
    let plan = dir.path().join("plan.json");
    let ics = dir.path().join("fitplan.ics");

    let (stdout, stderr, code) = run_cli(&[
        "plan",
        "generate",
        "--activities",
        dir.path().join("activities.txt").to_str().unwrap(),
        "--rules",
        dir.path().join("rules.txt").to_str().unwrap(),
        "--schedule",
        dir.path().join("schedule.json").to_str().unwrap(),
        "--reservations",
        dir.path().join("none.json").to_str().unwrap(),
        "--out",
        plan.to_str().unwrap(),
    ]);
    assert_eq!(code, 0, "plan generate failed: {stderr}");
    assert!(stdout.contains("Wrote"));
    assert!(plan.exists());

    let parsed: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&plan).unwrap()).unwrap();
    assert_eq!(parsed["daily"].as_array().unwrap().len(), 3);

    let (stdout, stderr, code) = run_cli(&[
        "ics",
        "export",
        "--plan",
        plan.to_str().unwrap(),
        "--out",
        ics.to_str().unwrap(),
    ]);
    assert_eq!(code, 0, "ics export failed: {stderr}");
    assert!(stdout.contains("Wrote"));
    let text = std::fs::read_to_string(&ics).unwrap();
    assert!(text.starts_with("BEGIN:VCALENDAR"));
    assert!(text.contains("TRIGGER:-PT15M"));
}

#[test]
fn plan_generate_without_any_range_fails() {
    let dir = tempfile::tempdir().unwrap();
    // No schedule, no explicit range: usage error, no output written.
    let plan = dir.path().join("plan.json");
    let (_, stderr, code) = run_cli(&[
        "plan",
        "generate",
        "--config",
        dir.path().join("fitplan.toml").to_str().unwrap(),
        "--activities",
        dir.path().join("activities.txt").to_str().unwrap(),
        "--out",
        plan.to_str().unwrap(),
    ]);
    assert_ne!(code, 0);
    assert!(stderr.contains("error:"));
    assert!(!plan.exists());
}

#[test]
fn catalog_list_json() {
    let dir = tempfile::tempdir().unwrap();
    write_inputs(dir.path());
    let (stdout, stderr, code) = run_cli(&[
        "catalog",
        "list",
        "--activities",
        dir.path().join("activities.txt").to_str().unwrap(),
        "--json",
    ]);
    assert_eq!(code, 0, "catalog list failed: {stderr}");
    let entries: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(entries.as_array().unwrap().len(), 2);
}

#[test]
fn log_add_creates_and_appends() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("log.txt");
    let (stdout, stderr, code) = run_cli(&[
        "log",
        "add",
        "--date",
        "2026-01-12",
        "--log",
        log.to_str().unwrap(),
    ]);
    assert_eq!(code, 0, "log add failed: {stderr}");
    assert!(stdout.contains("Appended entry for 2026-01-12"));
    assert!(std::fs::read_to_string(&log).unwrap().contains("Date: 2026-01-12"));
}
