// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod args;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use lg_core::SortKey;

pub use args::{parse_date_arg, TodayArgs, ViewArgs};

/// Parse a string that must not be empty or whitespace-only.
fn non_empty_string(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        Err("cannot be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}

/// Parse a sort key argument.
fn sort_key(s: &str) -> Result<SortKey, String> {
    s.parse::<SortKey>().map_err(|e| e.to_string())
}

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "labgantt")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Show GitLab issues as a Gantt timeline")]
#[command(
    long_about = "Show GitLab issues as a Gantt timeline.\n\n\
    Start dates and progress are read from a metadata block at the top of each\n\
    issue description; end dates come from the issue's due date."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Build the timeline from a JSON dump of issues
    #[command(after_help = "\
Examples:
  labgantt timeline issues.json                   Open issues with a milestone
  labgantt timeline issues.json --all             Include closed issues
  labgantt timeline - -s start -s id:desc         Read stdin, sort by start then id
  labgantt timeline issues.json -o json           Output entries as JSON")]
    Timeline {
        /// Path to a JSON array of GitLab issues, or - for stdin
        input: String,

        #[command(flatten)]
        view: ViewArgs,

        #[command(flatten)]
        today: TodayArgs,

        /// Output format
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Show or change the saved sort order
    #[command(subcommand)]
    Sort(SortCommand),

    /// Show or change saved display preferences
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Print the create-issue payload for a new scheduled issue
    #[command(after_help = "\
Examples:
  labgantt draft \"Plan release\" --start 2024-09-02 --due 2024-09-13
  labgantt draft \"Quick fix\" -d \"Details here\"")]
    Draft {
        /// Issue title
        #[arg(value_parser = non_empty_string)]
        title: String,

        /// Description body placed after the metadata block
        #[arg(long, short, default_value = "")]
        description: String,

        /// Start date (default: today)
        #[arg(long, value_parser = parse_date_arg)]
        start: Option<NaiveDate>,

        /// Due date
        #[arg(long, value_parser = parse_date_arg)]
        due: Option<NaiveDate>,

        #[command(flatten)]
        today: TodayArgs,
    },
}

/// Sort order commands.
#[derive(Subcommand)]
pub enum SortCommand {
    /// Show every sort key with its direction and priority
    Show {
        /// Output format
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Toggle a sort key: add it, flip its direction, or start over at capacity
    #[command(arg_required_else_help = true)]
    Toggle {
        /// Sort key (id, start, end)
        #[arg(value_parser = sort_key)]
        key: SortKey,
    },

    /// Remove all sort keys
    Clear,
}

/// Preference commands.
#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show the preferences file location and current values
    Show,

    /// Set a filter toggle or the remembered group/project
    #[command(after_help = "\
Examples:
  labgantt config set include-closed true
  labgantt config set include-no-milestone off
  labgantt config set project 42
  labgantt config set group none")]
    Set {
        /// Setting name (include-closed, include-no-milestone, group, project)
        name: String,

        /// true/false for toggles, a numeric ID (or none) for group/project
        value: String,
    },
}

#[cfg(test)]
#[path = "../cli_tests.rs"]
mod tests;
