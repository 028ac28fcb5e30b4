// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for the `draft` command.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn labgantt(temp: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("labgantt");
    cmd.env("LABGANTT_CONFIG", temp.path().join("config.toml"))
        .current_dir(temp.path());
    cmd
}

fn draft_json(args: &[&str]) -> serde_json::Value {
    let temp = TempDir::new().unwrap();
    let output = labgantt(&temp).arg("draft").args(args).output().unwrap();
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn draft_embeds_start_date() {
    let json = draft_json(&[
        "Plan release",
        "-d",
        "Cut the branch.",
        "--start",
        "2024-09-02",
        "--due",
        "2024-09-13",
    ]);
    assert_eq!(json["title"], "Plan release");
    assert_eq!(
        json["description"],
        "---\nstart: 2024-09-02\nprogress: 0\n---\nCut the branch."
    );
    assert_eq!(json["due_date"], "2024-09-13");
}

#[test]
fn draft_defaults_start_to_today() {
    let json = draft_json(&["Quick fix", "--today", "2024-10-01"]);
    assert_eq!(json["description"], "---\nstart: 2024-10-01\nprogress: 0\n---\n");
    assert!(json.get("due_date").is_none());
}

#[test]
fn draft_round_trips_through_timeline() {
    let temp = TempDir::new().unwrap();
    let output = labgantt(&temp)
        .args(["draft", "Scheduled", "--start", "2024-09-02", "--due", "2024-09-06"])
        .output()
        .unwrap();
    let request: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();

    let issue = serde_json::json!([{
        "iid": 1,
        "title": request["title"],
        "description": request["description"],
        "due_date": request["due_date"],
        "state": "opened",
        "milestone": {"title": "v1"}
    }]);
    labgantt(&temp)
        .args(["timeline", "-"])
        .write_stdin(issue.to_string())
        .assert()
        .success()
        .stdout(predicate::str::contains("#1 2024-09-02 .. 2024-09-06    0%    5d  Scheduled"));
}

#[test]
fn draft_rejects_due_before_start() {
    let temp = TempDir::new().unwrap();
    labgantt(&temp)
        .args(["draft", "Backwards", "--start", "2024-09-10", "--due", "2024-09-01"])
        .assert()
        .failure();
}

#[test]
fn draft_rejects_long_title() {
    let temp = TempDir::new().unwrap();
    let title = "x".repeat(256);
    labgantt(&temp)
        .args(["draft", title.as_str()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("title is too long"));
}
