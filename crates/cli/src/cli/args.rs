// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared argument structs for CLI commands.

use chrono::NaiveDate;
use clap::Args;

/// Parse a `YYYY-MM-DD` date argument.
pub fn parse_date_arg(s: &str) -> Result<NaiveDate, String> {
    lg_core::parse_date(s).map_err(|e| e.to_string())
}

/// Per-run overrides of the saved view preferences.
#[derive(Args, Clone, Debug, Default)]
pub struct ViewArgs {
    /// Include closed issues (default: open only)
    #[arg(long)]
    pub all: bool,

    /// Include issues without a milestone
    #[arg(long)]
    pub all_milestones: bool,

    /// Sort by KEY[:asc|desc], highest priority first (keys: id, start, end)
    #[arg(long, short, value_name = "KEY[:DIR]", conflicts_with = "no_sort")]
    pub sort: Vec<String>,

    /// Ignore the saved sort order and keep input order
    #[arg(long)]
    pub no_sort: bool,
}

/// Date used in place of "today" for fallbacks.
#[derive(Args, Clone, Debug, Default)]
pub struct TodayArgs {
    /// Use this date as today (YYYY-MM-DD)
    #[arg(long, value_name = "DATE", value_parser = parse_date_arg)]
    pub today: Option<NaiveDate>,
}
