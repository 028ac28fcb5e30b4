// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Display preferences management.
//!
//! Preferences are stored in `config.toml` under the user's config directory
//! (or at `$LABGANTT_CONFIG`) and include:
//! - `include_closed` / `include_no_milestone`: the two filter toggles
//! - `group_id` / `project_id`: the last selected group and project
//! - `sort`: the active sort fields
//!
//! The core pipeline never reads this file; commands load it and pass the
//! values in as plain arguments.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use lg_core::{SortSpec, ViewFilter, ViewOptions};

use crate::env;
use crate::error::{Error, Result};

const APP_DIR_NAME: &str = "labgantt";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Persisted display preferences.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    /// Show closed issues as well as open ones.
    pub include_closed: bool,
    /// Show issues that have no milestone.
    pub include_no_milestone: bool,
    /// Last selected group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    /// Last selected project.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    /// Active sort fields, highest priority first.
    pub sort: SortSpec,
}

/// A preference addressable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Setting {
    IncludeClosed,
    IncludeNoMilestone,
    Group,
    Project,
}

impl Setting {
    pub const ALL: [Setting; 4] = [
        Setting::IncludeClosed,
        Setting::IncludeNoMilestone,
        Setting::Group,
        Setting::Project,
    ];

    pub fn parse(name: &str) -> Result<Self> {
        match name.trim().to_lowercase().replace('_', "-").as_str() {
            "include-closed" => Ok(Setting::IncludeClosed),
            "include-no-milestone" => Ok(Setting::IncludeNoMilestone),
            "group" | "group-id" => Ok(Setting::Group),
            "project" | "project-id" => Ok(Setting::Project),
            _ => Err(Error::UnknownSetting(name.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Setting::IncludeClosed => "include-closed",
            Setting::IncludeNoMilestone => "include-no-milestone",
            Setting::Group => "group",
            Setting::Project => "project",
        }
    }

    /// Describes the accepted values, for error hints.
    pub fn expected(&self) -> &'static str {
        match self {
            Setting::IncludeClosed | Setting::IncludeNoMilestone => "true or false",
            Setting::Group | Setting::Project => "a numeric ID, or none to clear",
        }
    }

    fn invalid(&self, value: &str) -> Error {
        Error::InvalidSettingValue {
            setting: self.as_str().to_string(),
            value: value.to_string(),
            expected: self.expected().to_string(),
        }
    }
}

/// Parse a boolean setting value.
pub fn parse_bool(setting: Setting, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Ok(true),
        "false" | "off" | "no" | "0" => Ok(false),
        _ => Err(setting.invalid(value)),
    }
}

/// Parse a remembered group or project ID. `none` or an empty value clears it.
pub fn parse_selection(setting: Setting, value: &str) -> Result<Option<String>> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("none") {
        return Ok(None);
    }
    if trimmed.bytes().all(|b| b.is_ascii_digit()) {
        Ok(Some(trimmed.to_string()))
    } else {
        Err(setting.invalid(value))
    }
}

impl Preferences {
    /// Loads preferences from `path`.
    ///
    /// A missing file yields the defaults; a malformed one is an error.
    pub fn load(path: &Path) -> Result<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("no preferences at {}, using defaults", path.display());
                return Ok(Preferences::default());
            }
            Err(e) => return Err(Error::Config(format!("failed to read config: {}", e))),
        };
        let prefs: Preferences = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;
        Ok(prefs)
    }

    /// Saves preferences to `path`, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// The filter toggles as a core value.
    pub fn filter(&self) -> ViewFilter {
        ViewFilter::new(self.include_closed, self.include_no_milestone)
    }

    /// The full set of view options to hand to the pipeline.
    pub fn view_options(&self) -> ViewOptions {
        ViewOptions::new(self.filter(), self.sort.clone())
    }

    /// Current value of `setting` as text, or `None` when an ID is unset.
    pub fn get(&self, setting: Setting) -> Option<String> {
        match setting {
            Setting::IncludeClosed => Some(self.include_closed.to_string()),
            Setting::IncludeNoMilestone => Some(self.include_no_milestone.to_string()),
            Setting::Group => self.group_id.clone(),
            Setting::Project => self.project_id.clone(),
        }
    }

    /// Parses `value` for `setting` and stores it.
    pub fn set(&mut self, setting: Setting, value: &str) -> Result<()> {
        match setting {
            Setting::IncludeClosed => self.include_closed = parse_bool(setting, value)?,
            Setting::IncludeNoMilestone => {
                self.include_no_milestone = parse_bool(setting, value)?
            }
            Setting::Group => self.group_id = parse_selection(setting, value)?,
            Setting::Project => self.project_id = parse_selection(setting, value)?,
        }
        Ok(())
    }
}

/// Get the preferences file path.
///
/// `$LABGANTT_CONFIG` wins; otherwise `<config dir>/labgantt/config.toml`,
/// falling back to the current directory when no config dir is known.
pub fn config_path() -> PathBuf {
    if let Some(path) = env::config_path() {
        return path;
    }
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
