// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;
use std::path::Path;

use crate::cli::ConfigCommand;
use crate::config::{config_path, Preferences, Setting};
use crate::error::Result;

use super::{load_preferences, save_preferences};

pub fn run(command: ConfigCommand) -> Result<()> {
    let mut prefs = load_preferences()?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match command {
        ConfigCommand::Show => show(&prefs, &config_path(), &mut out),
        ConfigCommand::Set { name, value } => {
            set(&mut prefs, &name, &value, &mut out)?;
            save_preferences(&prefs)
        }
    }
}

pub(crate) fn show<W: Write>(prefs: &Preferences, path: &Path, out: &mut W) -> Result<()> {
    writeln!(out, "path: {}", path.display())?;
    for setting in Setting::ALL {
        if let Some(value) = prefs.get(setting) {
            writeln!(out, "{}: {}", setting.as_str(), value)?;
        }
    }
    writeln!(out, "sort: {}", prefs.sort)?;
    Ok(())
}

pub(crate) fn set<W: Write>(
    prefs: &mut Preferences,
    name: &str,
    value: &str,
    out: &mut W,
) -> Result<()> {
    let setting = Setting::parse(name)?;
    prefs.set(setting, value)?;
    let shown = prefs.get(setting).unwrap_or_else(|| "none".to_string());
    writeln!(out, "{}: {}", setting.as_str(), shown)?;
    Ok(())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
