// envinject: Stage-aware .env injection
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Stage, file and parser resolution plus filtering.
//!
//! # Architecture
//!
//! ```text
//! environment::resolve()   NODE_ENV > option > "development"
//!        |
//!        v
//! paths::resolve_env_file() --> .env.<stage> | .env | settings.path
//! paths::resolve_parser()   --> ParserSource
//!        |
//!        v
//! parser::EnvParser::load() --> Option<EnvVars>
//!        |
//!        v
//! filter::filter()          include > exclude > all
//! ```

pub mod environment;
pub mod filter;
pub mod parser;
pub mod paths;
pub mod vars;


use std::path::PathBuf;

use crate::config::settings::PluginSettings;
use environment::EnvironmentName;
use parser::ParserSource;

/// Everything decided before a file is read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub environment: EnvironmentName,
    pub env_file: PathBuf,
    pub parser: ParserSource,
}

impl Resolution {
    /// Resolves stage, env file and parser source for `settings`.
    #[must_use]
    pub fn resolve(explicit_env: Option<&str>, settings: &PluginSettings) -> Self {
        Self::for_environment(environment::resolve(explicit_env), settings)
    }

    /// Resolves env file and parser source for a known stage.
    #[must_use]
    pub fn for_environment(environment: EnvironmentName, settings: &PluginSettings) -> Self {
        let env_file = paths::resolve_env_file(&environment, settings);
        let parser = paths::resolve_parser(settings);
        Self {
            environment,
            env_file,
            parser,
        }
    }

    /// Aligned `key = value` lines for display.
    #[must_use]
    pub fn format_lines(&self) -> Vec<String> {
        vec![
            format!("environment = {}", self.environment),
            format!("env_file    = {}", self.env_file.display()),
            format!("parser      = {}", self.parser),
        ]
    }
}
