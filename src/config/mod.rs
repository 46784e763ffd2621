// envinject: Stage-aware .env injection
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Host configuration tree.
//!
//! # Shape
//!
//! ```text
//! HostConfig
//!   provider.environment   <- shared map the injector writes into
//!   custom.dotenv          <- PluginSettings
//! ```
//!
//! # Sources
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. envinject.toml (cwd, optional)
//! 3. --config FILE (repeatable)
//! 4. ENVINJECT_CUSTOM__DOTENV__* env vars
//! 5. CLI overrides
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! ENVINJECT_CUSTOM__DOTENV__BASE_PATH=/srv  → custom.dotenv.base_path
//! ENVINJECT_CUSTOM__DOTENV__INCLUDE=A,B     → custom.dotenv.include = ["A", "B"]
//! ENVINJECT_CUSTOM__DOTENV__LOGGING=false   → custom.dotenv.logging = false
//! ```
//!
//! `provider.environment` is never read from the process environment.

pub mod loader;
pub mod settings;


use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::Result;

use loader::ConfigLoader;
use settings::PluginSettings;

/// The host tool's configuration, reduced to what the injector touches.
///
/// Unknown sections are ignored so a full host file can be loaded as-is.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    /// Provider section holding the deployed environment.
    pub provider: ProviderConfig,
    /// Plugin namespaces.
    pub custom: CustomConfig,
}

/// `provider` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Variables handed to the deployed functions.
    pub environment: BTreeMap<String, String>,
}

/// `custom` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomConfig {
    /// Settings for the dotenv injector.
    pub dotenv: PluginSettings,
}

impl HostConfig {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use envinject::config::HostConfig;
    ///
    /// let config = HostConfig::builder()
    ///     .add_toml_file_optional("envinject.toml")
    ///     .with_env_prefix("ENVINJECT")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `HostConfig` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `HostConfig` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Settings for the injector.
    #[must_use]
    pub const fn dotenv(&self) -> &PluginSettings {
        &self.custom.dotenv
    }

    /// The provider environment as `KEY=VALUE` lines, sorted by key.
    #[must_use]
    pub fn format_environment(&self) -> Vec<String> {
        self.provider
            .environment
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect()
    }
}
