// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.

use std::path::PathBuf;

/// Environment variable names read by the CLI.
pub mod vars {
    /// Overrides the preferences file location.
    pub const LABGANTT_CONFIG: &str = "LABGANTT_CONFIG";
}

/// Returns the value of `LABGANTT_CONFIG` if set and non-empty.
pub fn config_path() -> Option<PathBuf> {
    std::env::var(vars::LABGANTT_CONFIG)
        .ok()
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}
