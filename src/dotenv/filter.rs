// envinject: Stage-aware .env injection
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Include/exclude filtering.
//!
//! A non-empty include list wins outright; the exclude list is then ignored,
//! not combined.

use super::vars::EnvVars;

/// Which keys survive filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyFilter<'a> {
    /// Keep only these keys.
    Include(&'a [String]),
    /// Drop these keys.
    Exclude(&'a [String]),
    /// Keep everything.
    All,
}

impl<'a> KeyFilter<'a> {
    #[must_use]
    pub fn new(include: &'a [String], exclude: &'a [String]) -> Self {
        if !include.is_empty() {
            Self::Include(include)
        } else if !exclude.is_empty() {
            Self::Exclude(exclude)
        } else {
            Self::All
        }
    }

    #[must_use]
    pub fn keeps(&self, key: &str) -> bool {
        match self {
            Self::Include(keys) => keys.iter().any(|k| k == key),
            Self::Exclude(keys) => !keys.iter().any(|k| k == key),
            Self::All => true,
        }
    }

    /// Builds a new set holding the surviving entries, in their original order.
    #[must_use]
    pub fn apply(&self, vars: EnvVars) -> EnvVars {
        if matches!(self, Self::All) {
            return vars;
        }
        vars.into_iter().filter(|(key, _)| self.keeps(key)).collect()
    }
}

/// Filters `vars` by `include`, or by `exclude` when `include` is empty.
#[must_use]
pub fn filter(vars: EnvVars, include: &[String], exclude: &[String]) -> EnvVars {
    KeyFilter::new(include, exclude).apply(vars)
}
