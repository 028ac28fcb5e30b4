// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Reading issue payloads saved from the GitLab issues API.

use std::fs;
use std::io::Read;

use lg_core::RawIssue;

use crate::error::{Error, Result};

/// Source name meaning "read from stdin".
pub const STDIN: &str = "-";

/// Read issues from a file path, or from stdin when `source` is `-`.
pub fn read_issues(source: &str) -> Result<Vec<RawIssue>> {
    let content = if source == STDIN {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(source).map_err(|e| Error::InvalidIssues {
            source_name: source.to_string(),
            reason: e.to_string(),
        })?
    };
    parse_issues(&content, source)
}

/// Parse a JSON array of issues.
pub fn parse_issues(content: &str, source_name: &str) -> Result<Vec<RawIssue>> {
    let issues: Vec<RawIssue> =
        serde_json::from_str(content).map_err(|e| Error::InvalidIssues {
            source_name: source_name.to_string(),
            reason: e.to_string(),
        })?;
    tracing::debug!("read {} issues from {}", issues.len(), source_name);
    Ok(issues)
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod tests;
