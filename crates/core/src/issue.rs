// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Issue records as delivered by the GitLab issues API.
//!
//! Only the fields the timeline reads are modeled; everything else in the
//! API payload is ignored during deserialization.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::date::parse_date;
use crate::error::Result;

/// State value GitLab reports for issues that are still open.
pub const STATE_OPENED: &str = "opened";

/// A milestone attached to an issue. Only its presence is used.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// An issue as fetched from the tracker. Read-only input to the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawIssue {
    /// Project-scoped issue number.
    pub iid: u64,
    /// Short description of the work.
    pub title: String,
    /// Markdown body, possibly carrying an embedded metadata block.
    #[serde(default)]
    pub description: Option<String>,
    /// Due date as sent by the API (normally `YYYY-MM-DD`).
    #[serde(default)]
    pub due_date: Option<String>,
    /// Workflow state, e.g. `opened` or `closed`.
    pub state: String,
    #[serde(default)]
    pub milestone: Option<Milestone>,
    /// Link to the issue in the tracker's web UI.
    #[serde(default)]
    pub web_url: Option<String>,
}

impl RawIssue {
    /// Creates an open issue with no description, due date or milestone.
    pub fn new(iid: u64, title: impl Into<String>) -> Self {
        RawIssue {
            iid,
            title: title.into(),
            description: None,
            due_date: None,
            state: STATE_OPENED.to_string(),
            milestone: None,
            web_url: None,
        }
    }

    /// Sets the description (builder pattern).
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the due date string (builder pattern).
    pub fn with_due_date(mut self, due_date: impl Into<String>) -> Self {
        self.due_date = Some(due_date.into());
        self
    }

    /// Sets the state (builder pattern).
    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = state.into();
        self
    }

    /// Attaches a milestone with the given title (builder pattern).
    pub fn with_milestone(mut self, title: impl Into<String>) -> Self {
        self.milestone = Some(Milestone {
            id: None,
            title: Some(title.into()),
        });
        self
    }

    /// Sets the web link (builder pattern).
    pub fn with_web_url(mut self, url: impl Into<String>) -> Self {
        self.web_url = Some(url.into());
        self
    }

    /// Returns true if the tracker reports this issue as open.
    pub fn is_opened(&self) -> bool {
        self.state == STATE_OPENED
    }

    /// Returns true if a milestone is assigned.
    pub fn has_milestone(&self) -> bool {
        self.milestone.is_some()
    }

    /// Returns the non-empty description, if any.
    pub fn description_text(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }

    /// Parses the due date.
    ///
    /// Returns `None` when no due date is set, and `Some(Err(_))` when one is
    /// set but malformed.
    pub fn due(&self) -> Option<Result<NaiveDate>> {
        self.due_date.as_deref().map(parse_date)
    }
}

#[cfg(test)]
#[path = "issue_tests.rs"]
mod tests;
