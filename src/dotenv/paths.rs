// envinject: Stage-aware .env injection
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Env file and parser lookup.
//!
//! ```text
//! settings.path set?  --yes-->  path (verbatim)
//!        | no
//!        v
//! base/.env.<stage> exists?  --yes-->  base/.env.<stage>
//!        | no
//!        v
//!    base/.env
//!
//! base/dotenv.config.toml exists?  --yes-->  ProjectLocal
//!        | no
//!        v
//!     Bundled
//! ```
//!
//! Nothing here fails: a missing env file is the parser's business.

use std::path::{Path, PathBuf};

use super::environment::EnvironmentName;
use super::parser::ParserSource;
use crate::config::settings::PluginSettings;

/// Name of the file used when no stage-specific file exists.
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Project-local parser configuration looked up under the base path.
pub const PARSER_CONFIG_FILE: &str = "dotenv.config.toml";

/// Directory that relative names resolve against.
///
/// A relative `base_path` is joined onto the working directory.
#[must_use]
pub fn base_path(settings: &PluginSettings) -> PathBuf {
    match settings.base_path.as_deref() {
        Some(base) if base.is_absolute() => base.to_path_buf(),
        Some(base) => current_dir().join(base),
        None => current_dir(),
    }
}

/// Picks the env file to load for `env`.
#[must_use]
pub fn resolve_env_file(env: &EnvironmentName, settings: &PluginSettings) -> PathBuf {
    if let Some(path) = &settings.path {
        return path.clone();
    }
    env_file_in(&base_path(settings), env)
}

/// Picks the parser: a project-local config if present, the bundled one otherwise.
#[must_use]
pub fn resolve_parser(settings: &PluginSettings) -> ParserSource {
    let candidate = base_path(settings).join(PARSER_CONFIG_FILE);
    if candidate.exists() {
        ParserSource::ProjectLocal(candidate)
    } else {
        ParserSource::Bundled
    }
}

fn env_file_in(base: &Path, env: &EnvironmentName) -> PathBuf {
    let staged = base.join(format!("{DEFAULT_ENV_FILE}.{env}"));
    if staged.exists() {
        staged
    } else {
        base.join(DEFAULT_ENV_FILE)
    }
}

fn current_dir() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "cannot read working directory, using '.'");
        PathBuf::from(".")
    })
}
