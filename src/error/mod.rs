// envinject: Stage-aware .env injection
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!          InjectError (~24 bytes)
//!                  |
//!             +---------+
//!             |         |
//!             v         v
//!          Config     Other
//!           Box     Box<str>
//!
//! Sub-errors (unboxed internally):
//!   Config      ParseError, InvalidValue, NotFound
//!
//! Injector-local:
//!   ParseError  Syntax, Io, Missing, Config, Other
//! ```
//!
//! `ParseError` never leaves the injector: it is rendered into the diagnostic
//! block and swallowed. `InjectError` is what the CLI host sees.

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum InjectError {
    /// Host configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Generic error with message.
    #[error("{0}")]
    Other(Box<str>),
}

impl InjectError {
    /// Create an [`InjectError::Other`] from a message.
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other(message.into().into_boxed_str())
    }
}

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for InjectError {
                fn from(err: $error) -> Self {
                    InjectError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    ConfigError => Config,
}

// --- Config Errors ---

/// Host configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse or deserialize a configuration source.
    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: String, message: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },

    /// Configuration file not found.
    #[error("config file not found: {0}")]
    NotFound(String),
}

// --- Parse Errors ---

/// Errors raised while turning an env file into variables.
///
/// Messages never quote raw line contents, which may hold secrets.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The env file is malformed.
    #[error("invalid syntax in '{path}': {detail}")]
    Syntax { path: String, detail: String },

    /// The env file exists but could not be read.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The env file is absent and the parser config marks it as required.
    #[error("env file not found: {path}")]
    Missing { path: String },

    /// A project-local parser config could not be loaded.
    #[error("invalid parser config '{path}': {message}")]
    Config { path: String, message: String },

    /// Failure reported by a host-supplied parser.
    #[error("{0}")]
    Other(String),
}
