// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use serde::Serialize;
use std::io::Write;

use lg_core::{build_timeline, Clock, RawIssue, SortSpec, TimelineEntry, ViewOptions};

use crate::cli::{OutputFormat, ViewArgs};
use crate::config::Preferences;
use crate::display::{format_entry_line, id_width};
use crate::error::Result;
use crate::input::read_issues;

use super::{clock_for, load_preferences};

/// JSON output structure for the timeline command.
#[derive(Serialize)]
struct TimelineOutputJson<'a> {
    entries: &'a [TimelineEntry],
    include_closed: bool,
    include_no_milestone: bool,
    sort: &'a SortSpec,
}

pub fn run(
    input: &str,
    view: &ViewArgs,
    today: Option<chrono::NaiveDate>,
    format: OutputFormat,
) -> Result<()> {
    let prefs = load_preferences()?;
    let issues = read_issues(input)?;
    let clock = clock_for(today);
    let stdout = std::io::stdout();
    run_impl(&issues, &prefs, view, &clock, format, &mut stdout.lock())
}

/// Merge saved preferences with per-run flags.
pub(crate) fn resolve_options(prefs: &Preferences, view: &ViewArgs) -> Result<ViewOptions> {
    let mut options = prefs.view_options();
    if view.all {
        options.filter.include_closed = true;
    }
    if view.all_milestones {
        options.filter.include_no_milestone = true;
    }
    if view.no_sort {
        options.sort = SortSpec::new();
    } else if !view.sort.is_empty() {
        options.sort = view.sort.join(",").parse()?;
    }
    Ok(options)
}

pub(crate) fn run_impl<C: Clock, W: Write>(
    issues: &[RawIssue],
    prefs: &Preferences,
    view: &ViewArgs,
    clock: &C,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    let options = resolve_options(prefs, view)?;
    let entries = build_timeline(issues, &options, clock);

    match format {
        OutputFormat::Text => {
            let width = id_width(&entries);
            for entry in &entries {
                writeln!(out, "{}", format_entry_line(entry, width))?;
            }
        }
        OutputFormat::Json => {
            let output = TimelineOutputJson {
                entries: &entries,
                include_closed: options.filter.include_closed,
                include_no_milestone: options.filter.include_no_milestone,
                sort: &options.sort,
            };
            writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "timeline_tests.rs"]
mod tests;
