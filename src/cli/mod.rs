// envinject: Stage-aware .env injection
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for envinject using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! envinject [global options] <command>
//! show [--format text|json]
//! resolve
//! configs
//! version
//! ```

pub mod global;
pub mod show;

#[cfg(test)]
mod tests;

use crate::cli::global::GlobalOptions;
use crate::cli::show::ShowArgs;
use clap::{Parser, Subcommand};

/// Stage-aware .env injection.
///
/// Loads `.env.<stage>` (or `.env`) and merges it into the host configuration's
/// `provider.environment`.
#[derive(Debug, Parser)]
#[command(
    name = "envinject",
    author,
    version,
    about = "Stage-aware .env injection",
    long_about = "envinject Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Loads the env file for the current stage and merges its\n\
                  variables into the host configuration's provider.environment.\n\
                  The stage comes from NODE_ENV, then --env, then 'development'.",
    after_help = "CONFIG FILES:\n\n\
                  envinject reads `envinject.toml` from the current directory if it\n\
                  exists, then every file given with --config in order. Settings\n\
                  live under [custom.dotenv]; existing variables under\n\
                  [provider.environment]. ENVINJECT_CUSTOM__DOTENV__<KEY> variables\n\
                  override files, and command-line flags override everything."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    Version,

    /// Injects the env file and prints the resulting environment.
    Show(ShowArgs),

    /// Prints the resolved stage, env file and parser without loading.
    Resolve,

    /// Lists the configuration files in use.
    Configs,
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
