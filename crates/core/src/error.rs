// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for lg-core operations.
//!
//! The timeline pipeline itself never fails; these errors come from parsing
//! user-supplied values (sort keys, dates) and from building issue drafts.

use thiserror::Error;

/// All possible errors that can occur in lg-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid sort key: '{0}'\n  hint: valid keys are: id, start, end")]
    InvalidSortKey(String),

    #[error("invalid sort direction: '{0}'\n  hint: valid directions are: asc, desc")]
    InvalidDirection(String),

    #[error("invalid sort spec: {0}")]
    InvalidSortSpec(String),

    #[error("invalid date: '{0}'\n  hint: use YYYY-MM-DD")]
    InvalidDate(String),

    #[error("due date {due} is before start date {start}")]
    InvalidDateRange { start: String, due: String },

    #[error("{0}")]
    InvalidInput(String),
}

/// A specialized Result type for lg-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
