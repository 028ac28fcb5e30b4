// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use lg_core::SortKey;

use crate::cli::{OutputFormat, SortCommand};
use crate::config::Preferences;
use crate::display::format_sort_spec;
use crate::error::Result;

use super::{load_preferences, save_preferences};

pub fn run(command: SortCommand) -> Result<()> {
    let mut prefs = load_preferences()?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match command {
        SortCommand::Show { output } => show(&prefs, output, &mut out),
        SortCommand::Toggle { key } => {
            toggle(&mut prefs, key, &mut out)?;
            save_preferences(&prefs)
        }
        SortCommand::Clear => {
            clear(&mut prefs, &mut out)?;
            save_preferences(&prefs)
        }
    }
}

pub(crate) fn show<W: Write>(prefs: &Preferences, format: OutputFormat, out: &mut W) -> Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "{}", format_sort_spec(&prefs.sort))?,
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&prefs.sort)?)?,
    }
    Ok(())
}

pub(crate) fn toggle<W: Write>(prefs: &mut Preferences, key: SortKey, out: &mut W) -> Result<()> {
    prefs.sort.toggle(key);
    tracing::debug!(key = %key, sort = %prefs.sort, "toggled sort key");
    writeln!(out, "{}", format_sort_spec(&prefs.sort))?;
    Ok(())
}

pub(crate) fn clear<W: Write>(prefs: &mut Preferences, out: &mut W) -> Result<()> {
    prefs.sort.clear();
    writeln!(out, "No sorting")?;
    Ok(())
}

#[cfg(test)]
#[path = "sort_tests.rs"]
mod tests;
