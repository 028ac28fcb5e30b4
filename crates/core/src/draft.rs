// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! New issues carrying scheduling metadata.
//!
//! A draft becomes a create request whose description opens with a metadata
//! block, so the issue shows up on the timeline with the chosen start date.

use chrono::NaiveDate;
use serde::Serialize;

use crate::clock::Clock;
use crate::date::format_date;
use crate::error::{Error, Result};
use crate::frontmatter::{PROGRESS_KEY, START_KEY};

/// Longest title the tracker accepts.
pub const MAX_TITLE_LEN: usize = 255;

/// User input for a new issue.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssueDraft {
    pub title: String,
    pub description: String,
    /// Defaults to today.
    pub start: Option<NaiveDate>,
    pub due: Option<NaiveDate>,
}

/// Payload for the tracker's create-issue call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateIssueRequest {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
}

impl IssueDraft {
    pub fn new(title: impl Into<String>) -> Self {
        IssueDraft {
            title: title.into(),
            ..IssueDraft::default()
        }
    }

    /// Validates the draft and renders the request.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] for an empty or overlong title and
    /// [`Error::InvalidDateRange`] when the due date precedes the start date.
    pub fn into_request<C: Clock>(self, clock: &C) -> Result<CreateIssueRequest> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(Error::InvalidInput("title is required".to_string()));
        }
        if title.chars().count() > MAX_TITLE_LEN {
            return Err(Error::InvalidInput(format!(
                "title is too long (max {} characters)",
                MAX_TITLE_LEN
            )));
        }

        let start = self.start.unwrap_or_else(|| clock.today());
        if let Some(due) = self.due {
            if due < start {
                return Err(Error::InvalidDateRange {
                    start: format_date(start),
                    due: format_date(due),
                });
            }
        }

        Ok(CreateIssueRequest {
            title: title.to_string(),
            description: render_description(start, &self.description),
            due_date: self.due.map(format_date),
        })
    }
}

/// Prefixes `body` with a metadata block holding `start` and zero progress.
pub fn render_description(start: NaiveDate, body: &str) -> String {
    format!(
        "---\n{}: {}\n{}: 0\n---\n{}",
        START_KEY,
        format_date(start),
        PROGRESS_KEY,
        body
    )
}

#[cfg(test)]
#[path = "draft_tests.rs"]
mod tests;
