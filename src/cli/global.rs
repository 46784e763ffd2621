// envinject: Stage-aware .env injection
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options available for all commands.
//!
//! # Option Precedence
//!
//! ```text
//! --config FILE      ← Additional host config files (can repeat)
//! --env NAME         ← Stage, unless NODE_ENV is set
//! --path FILE        ← custom.dotenv.path
//! --base-path DIR    ← custom.dotenv.base_path
//! --include KEY      ← custom.dotenv.include (can repeat)
//! --exclude KEY      ← custom.dotenv.exclude (can repeat)
//! --no-logging       ← custom.dotenv.logging = false
//! --log-level N      ← Console verbosity (0-6)
//!
//! Precedence: CLI flags > ENVINJECT_CUSTOM__DOTENV__* > --config > envinject.toml > defaults
//! ```

use clap::Args;
use std::path::PathBuf;

use crate::config::loader::ConfigLoader;
use crate::error::Result;

/// Host config file picked up from the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "envinject.toml";

/// Prefix for configuration environment variables.
pub const ENV_PREFIX: &str = "ENVINJECT";

/// Global options available for all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Path to additional host configuration file(s).
    /// Can be specified multiple times.
    #[arg(short = 'c', long = "config", value_name = "FILE", action = clap::ArgAction::Append)]
    pub configs: Vec<PathBuf>,

    /// Disables loading of `envinject.toml` from the current directory.
    #[arg(long = "no-default-config")]
    pub no_default_config: bool,

    /// Stage name, used when NODE_ENV is not set.
    #[arg(short = 'e', long = "env", value_name = "NAME")]
    pub env: Option<String>,

    /// Env file to load, bypassing stage-based lookup.
    #[arg(short = 'p', long = "path", value_name = "FILE")]
    pub path: Option<PathBuf>,

    /// Directory holding the env files.
    #[arg(short = 'b', long = "base-path", value_name = "DIR")]
    pub base_path: Option<PathBuf>,

    /// Only inject this key. Can be specified multiple times.
    #[arg(long = "include", value_name = "KEY", action = clap::ArgAction::Append)]
    pub include: Vec<String>,

    /// Never inject this key. Ignored when --include is given.
    #[arg(long = "exclude", value_name = "KEY", action = clap::ArgAction::Append)]
    pub exclude: Vec<String>,

    /// Suppresses the per-key log lines.
    #[arg(long = "no-logging")]
    pub no_logging: bool,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace, 6=dump).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Emits console logs as JSON lines.
    #[arg(long = "log-json")]
    pub log_json: bool,
}

impl GlobalOptions {
    /// Builds the config loader for these options, without overrides.
    #[must_use]
    pub fn config_loader(&self) -> ConfigLoader {
        let mut loader = ConfigLoader::new();
        if !self.no_default_config {
            loader = loader.add_toml_file_optional(DEFAULT_CONFIG_FILE);
        }
        for path in &self.configs {
            loader = loader.add_toml_file(path);
        }
        loader.with_env_prefix(ENV_PREFIX)
    }

    /// Applies the `custom.dotenv` flags as loader overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if an override cannot be set.
    pub fn apply_overrides(&self, mut loader: ConfigLoader) -> Result<ConfigLoader> {
        if let Some(path) = &self.path {
            loader = loader.set("custom.dotenv.path", path.display().to_string())?;
        }

        if let Some(base) = &self.base_path {
            loader = loader.set("custom.dotenv.base_path", base.display().to_string())?;
        }

        if !self.include.is_empty() {
            loader = loader.set("custom.dotenv.include", self.include.clone())?;
        }

        if !self.exclude.is_empty() {
            loader = loader.set("custom.dotenv.exclude", self.exclude.clone())?;
        }

        if self.no_logging {
            loader = loader.set("custom.dotenv.logging", false)?;
        }

        Ok(loader)
    }
}
