// envinject: Stage-aware .env injection
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments for the `show` command.

use clap::{Args, ValueEnum};

/// Arguments for `show`.
#[derive(Debug, Clone, Default, Args)]
pub struct ShowArgs {
    /// Output format for the resulting environment.
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// How `show` prints the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// `KEY=VALUE` lines, sorted by key.
    #[default]
    Text,
    /// A JSON object.
    Json,
}
