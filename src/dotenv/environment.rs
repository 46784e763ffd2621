// envinject: Stage-aware .env injection
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Stage name resolution.
//!
//! ```text
//! NODE_ENV (process) > --env option > "development"
//! ```
//!
//! Empty strings count as unset at every level.

use std::fmt;

/// Process variable that forces the stage, overriding the caller's option.
pub const STAGE_VAR: &str = "NODE_ENV";

/// Stage used when nothing else names one.
pub const DEFAULT_STAGE: &str = "development";

/// Name of the active stage, e.g. `production`. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EnvironmentName(String);

impl EnvironmentName {
    /// Returns `None` for an empty name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        (!name.is_empty()).then_some(Self(name))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for EnvironmentName {
    fn default() -> Self {
        Self(DEFAULT_STAGE.to_string())
    }
}

impl fmt::Display for EnvironmentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for EnvironmentName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Resolves the stage from the process environment and `explicit`.
#[must_use]
pub fn resolve(explicit: Option<&str>) -> EnvironmentName {
    resolve_with(|key| std::env::var(key).ok(), explicit)
}

/// Resolves the stage using `lookup` in place of the process environment.
pub fn resolve_with<F>(lookup: F, explicit: Option<&str>) -> EnvironmentName
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(name) = lookup(STAGE_VAR).and_then(EnvironmentName::new) {
        tracing::debug!(stage = %name, source = STAGE_VAR, "stage resolved");
        return name;
    }

    if let Some(name) = explicit.and_then(EnvironmentName::new) {
        tracing::debug!(stage = %name, source = "option", "stage resolved");
        return name;
    }

    tracing::debug!(stage = DEFAULT_STAGE, source = "default", "stage resolved");
    EnvironmentName::default()
}
