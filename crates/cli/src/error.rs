// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the lgrs library.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] lg_core::Error),

    #[error("config error: {0}")]
    Config(String),

    #[error("unknown setting: '{0}'\n  hint: valid settings are: include-closed, include-no-milestone, group, project")]
    UnknownSetting(String),

    #[error("invalid value for {setting}: '{value}'\n  hint: expected {expected}")]
    InvalidSettingValue {
        setting: String,
        value: String,
        expected: String,
    },

    #[error("failed to read issues from {source_name}: {reason}\n  hint: expected a JSON array of GitLab issues")]
    InvalidIssues { source_name: String, reason: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for lgrs operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
