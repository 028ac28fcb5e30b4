// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for the `timeline` command: filtering, metadata extraction and
//! date fallbacks as seen from the command line.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;
use yare::parameterized;

// =============================================================================
// Helpers
// =============================================================================

const ISSUES: &str = r#"[
    {
        "iid": 10,
        "title": "Build timeline",
        "description": "---\nstart: 2024-08-05\nprogress: 50\n---\nDraw the bars.",
        "due_date": "2024-08-10",
        "state": "opened",
        "milestone": {"id": 1, "title": "v1"},
        "web_url": "https://gitlab.example.com/g/p/-/issues/10"
    },
    {
        "iid": 9,
        "title": "No metadata",
        "description": "Just text",
        "due_date": "2024-08-20",
        "state": "opened",
        "milestone": {"id": 1, "title": "v1"}
    },
    {
        "iid": 4,
        "title": "Shipped",
        "due_date": "2024-07-01",
        "state": "closed",
        "milestone": {"id": 1, "title": "v1"}
    },
    {
        "iid": 2,
        "title": "Unplanned",
        "due_date": "2024-08-01",
        "state": "opened",
        "milestone": null
    }
]"#;

fn labgantt(temp: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("labgantt");
    cmd.env("LABGANTT_CONFIG", temp.path().join("config.toml"))
        .current_dir(temp.path());
    cmd
}

fn setup() -> TempDir {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("issues.json"), ISSUES).unwrap();
    temp
}

fn timeline_ids(temp: &TempDir, extra: &[&str]) -> Vec<String> {
    let output = labgantt(temp)
        .arg("timeline")
        .arg("issues.json")
        .args(["--today", "2024-09-01"])
        .args(extra)
        .output()
        .unwrap();
    assert!(output.status.success());
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(|line| line.split_whitespace().next().unwrap().to_string())
        .collect()
}

// =============================================================================
// Filtering
// =============================================================================

#[parameterized(
    defaults = { &[], &["#10", "#9"] },
    closed = { &["--all"], &["#10", "#9", "#4"] },
    no_milestone = { &["--all-milestones"], &["#10", "#9", "#2"] },
    everything = { &["--all", "--all-milestones"], &["#10", "#9", "#4", "#2"] },
)]
fn timeline_filter_toggles(flags: &[&str], expected: &[&str]) {
    let temp = setup();
    assert_eq!(timeline_ids(&temp, flags), expected);
}

#[test]
fn timeline_saved_toggle_applies() {
    let temp = setup();
    labgantt(&temp)
        .args(["config", "set", "include-closed", "true"])
        .assert()
        .success();
    assert_eq!(timeline_ids(&temp, &[]), vec!["#10", "#9", "#4"]);
}

// =============================================================================
// Entries
// =============================================================================

#[test]
fn timeline_reads_metadata_block() {
    let temp = setup();
    labgantt(&temp)
        .args(["timeline", "issues.json", "--today", "2024-09-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "#10 2024-08-05 .. 2024-08-10   50%    6d  Build timeline",
        ))
        .stdout(predicate::str::contains(
            "#9  2024-08-20 .. 2024-08-20    0%    1d  No metadata",
        ));
}

#[test]
fn timeline_missing_due_date_uses_today() {
    let temp = TempDir::new().unwrap();
    std::fs::write(
        temp.path().join("issues.json"),
        r#"[{"iid": 1, "title": "Open ended", "state": "opened", "milestone": {"title": "v1"}}]"#,
    )
    .unwrap();
    labgantt(&temp)
        .args(["timeline", "issues.json", "--today", "2024-09-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-09-01 .. 2024-09-01"));
}

#[test]
fn timeline_invalid_due_date_warns() {
    let temp = TempDir::new().unwrap();
    std::fs::write(
        temp.path().join("issues.json"),
        r#"[{"iid": 3, "title": "Bad", "due_date": "soon", "state": "opened", "milestone": {"title": "v1"}}]"#,
    )
    .unwrap();
    labgantt(&temp)
        .args(["timeline", "issues.json", "--today", "2024-09-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-09-01 .. 2024-09-01"))
        .stderr(predicate::str::contains("invalid due date for issue 3"));
}

#[test]
fn timeline_json_output() {
    let temp = setup();
    let output = labgantt(&temp)
        .args(["timeline", "issues.json", "--today", "2024-09-01", "-o", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let entries = json["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["id"], "10");
    assert_eq!(entries[0]["progress"], 50);
    assert_eq!(
        entries[0]["link"],
        "https://gitlab.example.com/g/p/-/issues/10"
    );
    assert!(entries[1].get("link").is_none());
}

#[test]
fn timeline_reads_stdin() {
    let temp = TempDir::new().unwrap();
    labgantt(&temp)
        .args(["timeline", "-", "--today", "2024-09-01"])
        .write_stdin(ISSUES)
        .assert()
        .success()
        .stdout(predicate::str::contains("Build timeline"));
}

#[test]
fn timeline_empty_input() {
    let temp = TempDir::new().unwrap();
    labgantt(&temp)
        .args(["timeline", "-"])
        .write_stdin("[]")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn timeline_missing_file_fails() {
    let temp = TempDir::new().unwrap();
    labgantt(&temp)
        .args(["timeline", "nope.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read issues from nope.json"));
}

#[test]
fn timeline_malformed_json_fails() {
    let temp = TempDir::new().unwrap();
    labgantt(&temp)
        .args(["timeline", "-"])
        .write_stdin("{not json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected a JSON array"));
}
