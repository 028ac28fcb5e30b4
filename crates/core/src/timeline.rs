// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Conversion of raw issues into timeline entries.
//!
//! Normalization never fails. Missing or malformed dates fall back to the
//! due date or to today so that one bad record cannot block the whole view.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::clock::Clock;
use crate::date::parse_date;
use crate::frontmatter::{self, EmbeddedMetadata, MetaValue};
use crate::issue::RawIssue;

/// One issue's schedule, ready to be drawn as a bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    /// Issue number rendered as text.
    pub id: String,
    pub title: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    /// Completion percentage. Passed through unclamped.
    pub progress: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl TimelineEntry {
    /// Returns the identifier as a number, if it is one.
    pub fn numeric_id(&self) -> Option<i64> {
        self.id.trim().parse().ok()
    }

    /// Length of the bar in days, counting both ends.
    pub fn duration_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

/// Returns the scheduling metadata of an issue, if it is usable.
///
/// Metadata counts only when the description opens with a block that sets
/// `start`. A block carrying only `progress` is ignored as a whole.
pub fn usable_metadata(issue: &RawIssue) -> Option<EmbeddedMetadata> {
    let text = issue.description_text()?;
    frontmatter::extract(text).filter(|meta| meta.start().is_some())
}

/// Maps one raw issue to its timeline entry.
pub fn normalize<C: Clock>(issue: &RawIssue, clock: &C) -> TimelineEntry {
    let metadata = usable_metadata(issue);

    let end = match issue.due() {
        Some(Ok(date)) => date,
        Some(Err(e)) => {
            tracing::warn!(issue = issue.iid, "invalid due date for issue {}: {}", issue.iid, e);
            clock.today()
        }
        None => clock.today(),
    };

    let start = metadata
        .as_ref()
        .and_then(|meta| meta.start())
        .and_then(MetaValue::as_text)
        .and_then(|s| parse_date(s).ok())
        .unwrap_or(end);

    let progress = metadata
        .as_ref()
        .and_then(EmbeddedMetadata::progress)
        .map(|p| p.round() as i64)
        .unwrap_or(0);

    TimelineEntry {
        id: issue.iid.to_string(),
        title: issue.title.clone(),
        start,
        end,
        progress,
        link: issue.web_url.clone(),
    }
}

#[cfg(test)]
#[path = "timeline_tests.rs"]
mod tests;
