// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use chrono::NaiveDate;
use std::io::Write;

use lg_core::{Clock, IssueDraft};

use crate::error::Result;

use super::clock_for;

pub fn run(
    title: String,
    description: String,
    start: Option<NaiveDate>,
    due: Option<NaiveDate>,
    today: Option<NaiveDate>,
) -> Result<()> {
    let draft = IssueDraft {
        title,
        description,
        start,
        due,
    };
    let stdout = std::io::stdout();
    run_impl(draft, &clock_for(today), &mut stdout.lock())
}

pub(crate) fn run_impl<C: Clock, W: Write>(draft: IssueDraft, clock: &C, out: &mut W) -> Result<()> {
    let request = draft.into_request(clock)?;
    writeln!(out, "{}", serde_json::to_string_pretty(&request)?)?;
    Ok(())
}

#[cfg(test)]
#[path = "draft_tests.rs"]
mod tests;
