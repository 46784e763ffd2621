// envinject: Stage-aware .env injection
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Env file parsers.
//!
//! # Selection
//!
//! ```text
//! ParserSource::ProjectLocal(base/dotenv.config.toml)
//!        |  ParserConfig { strategy, required }
//!        v
//! ParserSource::build() --> Box<dyn EnvParser>
//!        ^                    |
//! ParserSource::Bundled       +-- DotenvParser  (strategy = "dotenv", default)
//!   (ParserConfig::default)   +-- LiteralParser (strategy = "literal")
//! ```
//!
//! The source is resolved once per run. Hosts embedding the crate can skip
//! the lookup and hand the injector any [`EnvParser`] directly.
//!
//! # `dotenv.config.toml`
//!
//! ```toml
//! strategy = "literal"  # no quoting rules, no ${VAR} substitution
//! required = true       # a missing env file is an error, not "not found"
//! ```


use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

use super::vars::EnvVars;
use crate::error::ParseError;

/// Turns an env file into variables.
///
/// `Ok(None)` means there is nothing to load: the file is absent or defines
/// no variables.
pub trait EnvParser {
    /// Loads the variables defined in `path`.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] if the file is malformed or unreadable.
    fn load(&self, path: &Path) -> Result<Option<EnvVars>, ParseError>;
}

impl<F> EnvParser for F
where
    F: Fn(&Path) -> Result<Option<EnvVars>, ParseError>,
{
    fn load(&self, path: &Path) -> Result<Option<EnvVars>, ParseError> {
        self(path)
    }
}

/// Parsing strategy named in `dotenv.config.toml`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Full dotenv grammar via `dotenvy`.
    #[default]
    Dotenv,
    /// Plain `KEY=VALUE` lines.
    Literal,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dotenv => write!(f, "dotenv"),
            Self::Literal => write!(f, "literal"),
        }
    }
}

/// Contents of a project-local `dotenv.config.toml`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParserConfig {
    pub strategy: Strategy,
    /// Treat a missing env file as an error.
    pub required: bool,
}

impl ParserConfig {
    /// Reads a parser config file.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Config` if the file is missing, is not valid TOML,
    /// or has unknown keys.
    pub fn from_file(path: &Path) -> Result<Self, ParseError> {
        use config::{File, FileFormat};

        config::Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml).required(true))
            .build()
            .and_then(|cfg| cfg.try_deserialize())
            .map_err(|e| ParseError::Config {
                path: path.display().to_string(),
                message: e.to_string(),
            })
    }

    /// Instantiates the parser this config describes.
    #[must_use]
    pub fn into_parser(self) -> Box<dyn EnvParser> {
        match self.strategy {
            Strategy::Dotenv => Box::new(DotenvParser::new(self.required)),
            Strategy::Literal => Box::new(LiteralParser::new(self.required)),
        }
    }
}

/// Where the parser comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParserSource {
    /// A `dotenv.config.toml` found under the base path.
    ProjectLocal(PathBuf),
    /// Built-in defaults.
    Bundled,
}

impl ParserSource {
    /// Reads the source's config and builds the parser.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Config` if a project-local config cannot be loaded.
    pub fn build(&self) -> Result<Box<dyn EnvParser>, ParseError> {
        let config = match self {
            Self::ProjectLocal(path) => ParserConfig::from_file(path)?,
            Self::Bundled => ParserConfig::default(),
        };
        tracing::debug!(
            source = %self,
            strategy = %config.strategy,
            required = config.required,
            "parser selected"
        );
        Ok(config.into_parser())
    }
}

impl fmt::Display for ParserSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ProjectLocal(path) => write!(f, "{}", path.display()),
            Self::Bundled => write!(f, "bundled"),
        }
    }
}

/// Default parser backed by `dotenvy`.
///
/// Supports quoting, `export` prefixes, comments and `${VAR}` substitution
/// against earlier entries and the process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct DotenvParser {
    required: bool,
}

impl DotenvParser {
    #[must_use]
    pub const fn new(required: bool) -> Self {
        Self { required }
    }
}

impl EnvParser for DotenvParser {
    fn load(&self, path: &Path) -> Result<Option<EnvVars>, ParseError> {
        let iter = match dotenvy::from_path_iter(path) {
            Ok(iter) => iter,
            Err(dotenvy::Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                return not_found(path, self.required);
            }
            Err(e) => return Err(from_dotenvy(path, e, 0)),
        };

        let mut vars = EnvVars::new();
        for (index, item) in iter.enumerate() {
            let (key, value) = item.map_err(|e| from_dotenvy(path, e, index + 1))?;
            vars.insert(key, value);
        }

        tracing::trace!(path = %path.display(), count = vars.len(), "dotenv file parsed");
        Ok((!vars.is_empty()).then_some(vars))
    }
}

// Line contents are dropped: they may hold secrets.
fn from_dotenvy(path: &Path, err: dotenvy::Error, entry: usize) -> ParseError {
    let path = path.display().to_string();
    match err {
        dotenvy::Error::LineParse(_, column) => ParseError::Syntax {
            path,
            detail: format!("entry {entry}, column {column}"),
        },
        dotenvy::Error::Io(source) => ParseError::Io { path, source },
        other => ParseError::Syntax {
            path,
            detail: other.to_string(),
        },
    }
}

/// Plain `KEY=VALUE` parser.
///
/// Blank lines and `#` comments are skipped, an `export ` prefix is dropped,
/// and one pair of matching surrounding quotes is stripped from the value.
/// Values are taken literally otherwise.
#[derive(Debug, Clone, Copy, Default)]
pub struct LiteralParser {
    required: bool,
}

impl LiteralParser {
    #[must_use]
    pub const fn new(required: bool) -> Self {
        Self { required }
    }

    /// Parses env file content; `path` is only used in errors.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Syntax` for a line without `=` or with an empty key.
    pub fn parse_str(path: &Path, content: &str) -> Result<EnvVars, ParseError> {
        let mut vars = EnvVars::new();
        for (index, line) in content.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let syntax = || ParseError::Syntax {
                path: path.display().to_string(),
                detail: format!("line {}: expected KEY=VALUE", index + 1),
            };

            let (key, value) = trimmed.split_once('=').ok_or_else(syntax)?;
            let key = key.trim();
            let key = key.strip_prefix("export ").map_or(key, str::trim);
            if key.is_empty() {
                return Err(syntax());
            }
            vars.insert(key, unquote(value.trim()));
        }
        Ok(vars)
    }
}

impl EnvParser for LiteralParser {
    fn load(&self, path: &Path) -> Result<Option<EnvVars>, ParseError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return not_found(path, self.required);
            }
            Err(source) => {
                return Err(ParseError::Io {
                    path: path.display().to_string(),
                    source,
                });
            }
        };

        let vars = Self::parse_str(path, &content)?;
        Ok((!vars.is_empty()).then_some(vars))
    }
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2
            && let Some(inner) = value
                .strip_prefix(quote)
                .and_then(|v| v.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}

fn not_found(path: &Path, required: bool) -> Result<Option<EnvVars>, ParseError> {
    if required {
        Err(ParseError::Missing {
            path: path.display().to_string(),
        })
    } else {
        tracing::debug!(path = %path.display(), "env file not found");
        Ok(None)
    }
}
