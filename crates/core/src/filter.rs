// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Status and milestone filtering of raw issues.
//!
//! Both predicates are independent and AND'd, so applying them in either
//! order keeps the same issues. Input order is preserved.

use serde::{Deserialize, Serialize};

use crate::issue::RawIssue;

/// The two visibility toggles of the timeline view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewFilter {
    /// Show closed issues too (otherwise only `opened`).
    pub include_closed: bool,
    /// Show issues without a milestone too.
    pub include_no_milestone: bool,
}

impl ViewFilter {
    pub fn new(include_closed: bool, include_no_milestone: bool) -> Self {
        ViewFilter {
            include_closed,
            include_no_milestone,
        }
    }

    /// Returns true if the issue passes both toggles.
    pub fn matches(&self, issue: &RawIssue) -> bool {
        matches_status(self.include_closed, issue)
            && matches_milestone(self.include_no_milestone, issue)
    }

    /// Returns the issues passing both toggles, in input order.
    pub fn apply(&self, issues: &[RawIssue]) -> Vec<RawIssue> {
        issues
            .iter()
            .filter(|issue| self.matches(issue))
            .cloned()
            .collect()
    }
}

/// Check if an issue passes the status toggle.
pub fn matches_status(include_closed: bool, issue: &RawIssue) -> bool {
    include_closed || issue.is_opened()
}

/// Check if an issue passes the milestone toggle.
pub fn matches_milestone(include_no_milestone: bool, issue: &RawIssue) -> bool {
    include_no_milestone || issue.has_milestone()
}

pub fn filter_by_status(issues: &[RawIssue], include_closed: bool) -> Vec<RawIssue> {
    issues
        .iter()
        .filter(|issue| matches_status(include_closed, issue))
        .cloned()
        .collect()
}

pub fn filter_by_milestone(issues: &[RawIssue], include_no_milestone: bool) -> Vec<RawIssue> {
    issues
        .iter()
        .filter(|issue| matches_milestone(include_no_milestone, issue))
        .cloned()
        .collect()
}

/// Filters by status, then by milestone presence.
pub fn filter_issues(
    issues: &[RawIssue],
    include_closed: bool,
    include_no_milestone: bool,
) -> Vec<RawIssue> {
    let by_status = filter_by_status(issues, include_closed);
    filter_by_milestone(&by_status, include_no_milestone)
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
