// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! lgrs - command-line front end for the GitLab Gantt timeline.
//!
//! This crate wires the `lg-core` pipeline to a CLI: it reads issue payloads,
//! loads display preferences and prints the resulting timeline.
//!
//! # Main Components
//!
//! - [`Cli`] - argument parsing
//! - [`Preferences`] - saved filter toggles, sort order and selections
//! - [`Error`] - error types for all operations

mod cli;
mod commands;
mod display;
mod env;
mod input;

pub mod config;
pub mod error;

pub use cli::{Cli, Command, ConfigCommand, OutputFormat, SortCommand};
pub use config::Preferences;
pub use error::{Error, Result};

/// Executes a parsed command.
pub fn run(command: Command) -> Result<()> {
    match command {
        Command::Timeline {
            input,
            view,
            today,
            output,
        } => commands::timeline::run(&input, &view, today.today, output),
        Command::Sort(cmd) => commands::sort::run(cmd),
        Command::Config(cmd) => commands::config::run(cmd),
        Command::Draft {
            title,
            description,
            start,
            due,
            today,
        } => commands::draft::run(title, description, start, due, today.today),
    }
}
