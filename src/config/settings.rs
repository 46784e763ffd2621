// envinject: Stage-aware .env injection
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Plugin settings read from the host's `custom.dotenv` namespace.
//!
//! ```toml
//! [custom.dotenv]
//! path = "config/.env.ci"   # bypasses stage-based resolution
//! basePath = "deploy"       # default: current working directory
//! include = ["API_URL"]     # wins over exclude
//! exclude = ["SECRET"]
//! logging = true
//! ```

use bon::Builder;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Settings supplied to the injector at construction. Read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[serde(default, deny_unknown_fields)]
pub struct PluginSettings {
    /// Explicit env file, returned verbatim by path resolution.
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,

    /// Directory for `.env`, `.env.<stage>` and `dotenv.config.toml`.
    ///
    /// Host files may spell it `basePath`; the loader folds that into this key.
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_path: Option<PathBuf>,

    /// Keys to keep. An empty list is the same as no list.
    #[builder(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub include: Vec<String>,

    /// Keys to drop. Ignored when `include` is non-empty.
    #[builder(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub exclude: Vec<String>,

    /// Emit informational log lines.
    #[builder(default = true)]
    pub logging: bool,
}

impl Default for PluginSettings {
    fn default() -> Self {
        Self::builder().build()
    }
}
