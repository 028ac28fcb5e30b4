// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for sort keys: per-run `--sort` flags and the saved sort order
//! managed by `sort toggle` / `sort clear`.

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

fn issue(iid: u64, start: &str, due: &str) -> String {
    format!(
        r#"{{"iid": {iid}, "title": "Issue {iid}", "description": "---\nstart: {start}\n---", "due_date": "{due}", "state": "opened", "milestone": {{"title": "v1"}}}}"#
    )
}

fn labgantt(temp: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("labgantt");
    cmd.env("LABGANTT_CONFIG", temp.path().join("config.toml"))
        .current_dir(temp.path());
    cmd
}

fn setup() -> TempDir {
    let temp = TempDir::new().unwrap();
    let issues = [
        issue(3, "2024-08-01", "2024-08-10"),
        issue(12, "2024-08-05", "2024-08-10"),
        issue(7, "2024-08-01", "2024-08-20"),
    ];
    std::fs::write(
        temp.path().join("issues.json"),
        format!("[{}]", issues.join(",")),
    )
    .unwrap();
    temp
}

fn timeline_ids(temp: &TempDir, extra: &[&str]) -> Vec<String> {
    let output = labgantt(temp)
        .args(["timeline", "issues.json"])
        .args(extra)
        .output()
        .unwrap();
    assert!(output.status.success());
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(|line| line.split_whitespace().next().unwrap().to_string())
        .collect()
}

fn toggle(temp: &TempDir, key: &str) {
    labgantt(temp)
        .args(["sort", "toggle", key])
        .assert()
        .success();
}

// =============================================================================
// Per-run sort flags
// =============================================================================

#[parameterized(
    unsorted = { &[], &["#3", "#12", "#7"] },
    id_numeric = { &["-s", "id"], &["#3", "#7", "#12"] },
    id_desc = { &["-s", "id:desc"], &["#12", "#7", "#3"] },
    start_stable = { &["-s", "start"], &["#3", "#7", "#12"] },
    end_then_id_desc = { &["-s", "end", "-s", "id:desc"], &["#12", "#3", "#7"] },
    start_desc_then_end = { &["-s", "start:desc", "-s", "end"], &["#12", "#3", "#7"] },
)]
fn sort_flags_order_entries(flags: &[&str], expected: &[&str]) {
    let temp = setup();
    assert_eq!(timeline_ids(&temp, flags), expected);
}

#[test]
fn sort_flag_rejects_three_keys() {
    let temp = setup();
    labgantt(&temp)
        .args(["timeline", "issues.json", "-s", "id", "-s", "start", "-s", "end"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at most 2 sort keys"));
}

#[test]
fn sort_flag_rejects_unknown_key() {
    let temp = setup();
    labgantt(&temp)
        .args(["timeline", "issues.json", "-s", "title"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid sort key"));
}

// =============================================================================
// Saved sort order
// =============================================================================

#[test]
fn toggle_persists_between_runs() {
    let temp = setup();
    toggle(&temp, "id");
    assert_eq!(timeline_ids(&temp, &[]), vec!["#3", "#7", "#12"]);

    toggle(&temp, "id");
    assert_eq!(timeline_ids(&temp, &[]), vec!["#12", "#7", "#3"]);
}

#[test]
fn toggle_third_key_starts_over() {
    let temp = setup();
    toggle(&temp, "start");
    toggle(&temp, "id");
    labgantt(&temp)
        .args(["sort", "toggle", "end"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Due date    end    asc  (priority: 1)"))
        .stdout(predicate::str::contains("ID          id     -"));
}

#[test]
fn no_sort_ignores_saved_order() {
    let temp = setup();
    toggle(&temp, "id");
    assert_eq!(timeline_ids(&temp, &["--no-sort"]), vec!["#3", "#12", "#7"]);
}

#[test]
fn clear_removes_saved_order() {
    let temp = setup();
    toggle(&temp, "id");
    labgantt(&temp)
        .args(["sort", "clear"])
        .assert()
        .success()
        .stdout("No sorting\n");
    assert_eq!(timeline_ids(&temp, &[]), vec!["#3", "#12", "#7"]);
}

#[test]
fn show_json_lists_fields() {
    let temp = setup();
    toggle(&temp, "start");
    toggle(&temp, "start");
    let output = labgantt(&temp)
        .args(["sort", "show", "-o", "json"])
        .output()
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{"key": "start", "direction": "desc", "priority": 1}])
    );
}

#[test]
fn unknown_saved_key_is_skipped() {
    let temp = setup();
    std::fs::write(
        temp.path().join("config.toml"),
        "[[sort]]\nkey = \"title\"\ndirection = \"asc\"\npriority = 1\n\n\
         [[sort]]\nkey = \"id\"\ndirection = \"desc\"\npriority = 2\n",
    )
    .unwrap();
    assert_eq!(timeline_ids(&temp, &[]), vec!["#12", "#7", "#3"]);
}
