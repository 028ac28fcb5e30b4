// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The full issue-to-timeline pipeline: filter, normalize, sort.

use serde::{Deserialize, Serialize};

use crate::clock::Clock;
use crate::filter::ViewFilter;
use crate::issue::RawIssue;
use crate::sort::{sort_entries, SortSpec};
use crate::timeline::{normalize, TimelineEntry};

/// Everything that shapes one rendering of the timeline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewOptions {
    #[serde(flatten)]
    pub filter: ViewFilter,
    #[serde(default)]
    pub sort: SortSpec,
}

impl ViewOptions {
    pub fn new(filter: ViewFilter, sort: SortSpec) -> Self {
        ViewOptions { filter, sort }
    }
}

/// Turns raw issues into the ordered entries to display.
///
/// The output depends only on the arguments; `clock` supplies the fallback
/// date for issues without a usable due date.
pub fn build_timeline<C: Clock>(
    issues: &[RawIssue],
    options: &ViewOptions,
    clock: &C,
) -> Vec<TimelineEntry> {
    let visible = options.filter.apply(issues);
    tracing::debug!(total = issues.len(), visible = visible.len(), "filtered issues");

    let entries: Vec<TimelineEntry> = visible.iter().map(|issue| normalize(issue, clock)).collect();

    let sorted = sort_entries(&entries, &options.sort);
    tracing::debug!(sort = %options.sort, count = sorted.len(), "sorted timeline");
    sorted
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
