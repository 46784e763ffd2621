// envinject: Stage-aware .env injection
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration loading from multiple sources.
//!
//! # Loader Pipeline
//!
//! ```text
//! ConfigLoader::new()
//!   .add_toml_file(req)
//!   .add_toml_file_optional(opt)
//!   .add_toml_str()
//!   .with_env_prefix()
//!   .set()
//!        |
//!        v
//!    build() --> HostConfig
//! ```

use std::path::{Path, PathBuf};

use super::HostConfig;
use crate::error::{ConfigError, InjectError, Result};

/// Settings keys whose environment-variable values are comma-separated lists.
const LIST_KEYS: [&str; 2] = ["include", "exclude"];

/// Namespace the environment source is confined to.
const DOTENV_SECTION: &str = "custom.dotenv";

/// Spellings of `base_path` accepted in host files.
const BASE_PATH_ALIASES: [&str; 2] = ["basePath", "basepath"];

/// Builder for loading configuration from multiple sources.
pub struct ConfigLoader {
    builder: config::ConfigBuilder<config::builder::DefaultState>,
    env_prefix: Option<String>,
    files: Vec<(String, PathBuf)>,
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: config::Config::builder(),
            env_prefix: None,
            files: Vec::new(),
        }
    }

    /// Adds a TOML configuration file to the loader.
    ///
    /// The file will be read when `build()` is called. If the file doesn't exist
    /// or contains invalid TOML, `build()` will return an error.
    #[must_use]
    pub fn add_toml_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        use config::{File, FileFormat};
        let p = path.as_ref();
        self.builder = self.builder.add_source(Canonical::new(
            File::from(p).format(FileFormat::Toml).required(true),
        ));
        self.files.push(("file".to_string(), p.to_path_buf()));
        self
    }

    #[must_use]
    pub fn add_toml_file_optional<P: AsRef<Path>>(mut self, path: P) -> Self {
        use config::{File, FileFormat};
        let p = path.as_ref();
        self.builder = self.builder.add_source(Canonical::new(
            File::from(p).format(FileFormat::Toml).required(false),
        ));
        if p.exists() {
            self.files.push(("optional".to_string(), p.to_path_buf()));
        }
        self
    }

    #[must_use]
    pub fn add_toml_str(mut self, content: &str) -> Self {
        use config::{File, FileFormat};
        self.builder = self
            .builder
            .add_source(Canonical::new(File::from_str(content, FileFormat::Toml)));
        self.files
            .push(("string".to_string(), PathBuf::from("<string>")));
        self
    }

    /// Reads `<PREFIX>_CUSTOM__DOTENV__<KEY>` variables.
    ///
    /// Only the `custom.dotenv` settings are reachable this way; variables
    /// aimed at other sections are ignored.
    #[must_use]
    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = Some(prefix.to_string());
        self
    }

    /// Sets a configuration override.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is invalid or if the value cannot be converted
    /// to a configuration value.
    pub fn set<T: Into<config::Value>>(mut self, key: &str, value: T) -> Result<Self> {
        self.builder = self
            .builder
            .set_override(key, value)
            .map_err(|e| anyhow::anyhow!("Config error: {e}"))?;
        Ok(self)
    }

    /// Builds the configuration from all added sources.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Required configuration files are missing.
    /// - Configuration files have invalid TOML syntax.
    /// - The merged configuration cannot be deserialized into `HostConfig`.
    pub fn build(self) -> Result<HostConfig> {
        if let Some((_, path)) = self
            .files
            .iter()
            .find(|(source, path)| source == "file" && !path.exists())
        {
            let err = ConfigError::NotFound(path.display().to_string());
            return Err(InjectError::from(err).into());
        }

        let builder = match &self.env_prefix {
            Some(prefix) => {
                let env = LIST_KEYS.iter().fold(
                    config::Environment::with_prefix(&format!("{prefix}_CUSTOM__DOTENV"))
                        .prefix_separator("__")
                        .separator("__")
                        .list_separator(",")
                        .try_parsing(true),
                    |env, key| env.with_list_parse_key(key),
                );
                self.builder.add_source(Canonical::new(env).scoped(DOTENV_SECTION))
            }
            None => self.builder,
        };
        let config: HostConfig = builder
            .build()
            .and_then(|cfg| cfg.try_deserialize())
            .map_err(into_inject_error)?;
        tracing::debug!(
            sources = self.files.len(),
            dotenv = ?config.custom.dotenv,
            "host configuration loaded"
        );
        Ok(config)
    }

    #[must_use]
    pub fn loaded_files(&self) -> Vec<(String, PathBuf)> {
        self.files.clone()
    }

    #[must_use]
    pub fn format_loaded_files(&self) -> Vec<String> {
        self.files
            .iter()
            .enumerate()
            .map(|(i, (source, path))| format!("{}. [{}] {}", i + 1, source, path.display()))
            .collect()
    }
}

/// Source adapter that rewrites keys before they are merged.
///
/// Every spelling of a setting collapses to one key within the source.
#[derive(Debug, Clone)]
struct Canonical<S> {
    inner: S,
    scope: Option<&'static str>,
}

impl<S> Canonical<S> {
    const fn new(inner: S) -> Self {
        Self { inner, scope: None }
    }

    /// Nests every key under `scope`.
    const fn scoped(mut self, scope: &'static str) -> Self {
        self.scope = Some(scope);
        self
    }
}

impl<S> config::Source for Canonical<S>
where
    S: config::Source + Clone + Send + Sync + 'static,
{
    fn clone_into_box(&self) -> Box<dyn config::Source + Send + Sync> {
        Box::new(self.clone())
    }

    fn collect(
        &self,
    ) -> std::result::Result<config::Map<String, config::Value>, config::ConfigError> {
        let mut map = self.inner.collect()?;
        if let Some(scope) = self.scope {
            map = map
                .into_iter()
                .map(|(key, value)| (format!("{scope}.{key}"), value))
                .collect();
        }
        canonicalize(&mut map);
        Ok(map)
    }
}

// Handles both nested tables (files) and flat dotted keys (environment).
fn canonicalize(map: &mut config::Map<String, config::Value>) {
    for alias in BASE_PATH_ALIASES {
        if let Some(value) = map.remove(&format!("{DOTENV_SECTION}.{alias}")) {
            map.insert(format!("{DOTENV_SECTION}.base_path"), value);
        }
    }

    let Some(dotenv) = map
        .get_mut("custom")
        .and_then(|custom| table_mut(custom)?.get_mut("dotenv"))
        .and_then(table_mut)
    else {
        return;
    };
    for alias in BASE_PATH_ALIASES {
        if let Some(value) = dotenv.remove(alias) {
            dotenv.insert("base_path".to_string(), value);
        }
    }
}

fn table_mut(value: &mut config::Value) -> Option<&mut config::Map<String, config::Value>> {
    match &mut value.kind {
        config::ValueKind::Table(table) => Some(table),
        _ => None,
    }
}

fn into_inject_error(err: config::ConfigError) -> InjectError {
    let (path, message) = match err {
        config::ConfigError::FileParse { uri, cause } => {
            (uri.unwrap_or_else(|| "<string>".to_string()), cause.to_string())
        }
        other => ("<merged>".to_string(), other.to_string()),
    };
    ConfigError::ParseError { path, message }.into()
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
