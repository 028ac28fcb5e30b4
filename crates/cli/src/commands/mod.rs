// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod config;
pub mod draft;
pub mod sort;
pub mod timeline;

use chrono::NaiveDate;
use lg_core::{Clock, FixedClock, SystemClock};

use crate::config::{config_path, Preferences};
use crate::error::Result;

/// Helper to load preferences from the configured location.
pub fn load_preferences() -> Result<Preferences> {
    Preferences::load(&config_path())
}

/// Helper to persist preferences to the configured location.
pub fn save_preferences(prefs: &Preferences) -> Result<()> {
    let path = config_path();
    prefs.save(&path)?;
    tracing::debug!("saved preferences to {}", path.display());
    Ok(())
}

/// Clock for this run: pinned by `--today`, otherwise the system date.
pub fn clock_for(today: Option<NaiveDate>) -> FixedClock {
    FixedClock::new(today.unwrap_or_else(|| SystemClock.today()))
}
