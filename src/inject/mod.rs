// envinject: Stage-aware .env injection
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The injector: load, filter, merge.
//!
//! ```text
//! run(stage, target)
//!   resolve_env_file --> resolve_parser --> load
//!                                             |
//!        +----------------+-------------------+
//!        v                v                   v
//!   Ok(Some(vars))     Ok(None)             Err(e)
//!   filter, merge,     "not found" line     red error block
//!   header + key lines
//!        |                |                   |
//!        v                v                   v
//!     Merged           NotFound            Errored
//! ```
//!
//! Every branch completes normally; the host keeps starting up. Loading and
//! filtering finish before `target` is touched.

pub mod sink;


use std::path::{Path, PathBuf};

use crate::config::settings::PluginSettings;
use crate::dotenv::environment::EnvironmentName;
use crate::dotenv::filter::KeyFilter;
use crate::dotenv::parser::EnvParser;
use crate::dotenv::paths;
use crate::dotenv::vars::EnvVars;
use crate::error::ParseError;

use sink::LogSink;

/// Logged when the parser finds nothing to load.
pub const NOT_FOUND_MESSAGE: &str = "DOTENV: Could not find .env file.";

const ERROR_BANNER: &str = " DOTENV Error --------------------------------------";

/// Terminal state of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Variables were written to the target.
    Merged { file: PathBuf, keys: Vec<String> },
    /// The parser had nothing to load.
    NotFound { file: PathBuf },
    /// Loading failed; the message was sent to the error sink.
    Errored { message: String },
}

/// Loads one env file into a host configuration map.
pub struct EnvInjector<S> {
    settings: PluginSettings,
    sink: S,
    parser: Option<Box<dyn EnvParser>>,
}

impl<S: LogSink> EnvInjector<S> {
    #[must_use]
    pub const fn new(settings: PluginSettings, sink: S) -> Self {
        Self {
            settings,
            sink,
            parser: None,
        }
    }

    /// Uses `parser` instead of looking one up under the base path.
    #[must_use]
    pub fn with_parser(mut self, parser: impl EnvParser + 'static) -> Self {
        self.parser = Some(Box::new(parser));
        self
    }

    #[must_use]
    pub const fn settings(&self) -> &PluginSettings {
        &self.settings
    }

    #[must_use]
    pub const fn sink(&self) -> &S {
        &self.sink
    }

    /// Loads the env file for `env` and merges the surviving variables into
    /// `target`, overwriting existing keys and leaving the rest alone.
    pub fn run<T>(&self, env: &EnvironmentName, target: &mut T) -> Outcome
    where
        T: Extend<(String, String)>,
    {
        let file = paths::resolve_env_file(env, &self.settings);
        tracing::debug!(stage = %env, file = %file.display(), "env file resolved");

        match self.load(&file) {
            Ok(Some(vars)) => self.merge(file, vars, target),
            Ok(None) => {
                self.info(NOT_FOUND_MESSAGE);
                Outcome::NotFound { file }
            }
            Err(err) => {
                tracing::debug!(error = %err, "env file rejected");
                let message = err.to_string();
                self.sink.error(&format_error_block(&message));
                Outcome::Errored { message }
            }
        }
    }

    fn load(&self, file: &Path) -> Result<Option<EnvVars>, ParseError> {
        if let Some(parser) = &self.parser {
            return parser.load(file);
        }
        let parser = paths::resolve_parser(&self.settings).build()?;
        parser.load(file)
    }

    fn merge<T>(&self, file: PathBuf, vars: EnvVars, target: &mut T) -> Outcome
    where
        T: Extend<(String, String)>,
    {
        let key_filter = KeyFilter::new(&self.settings.include, &self.settings.exclude);
        let loaded = vars.len();
        let vars = key_filter.apply(vars);
        tracing::debug!(loaded, kept = vars.len(), filter = ?key_filter, "variables filtered");

        self.info(&format!(
            "DOTENV: Loading environment variables from {}:",
            file.display()
        ));

        let mut keys = Vec::with_capacity(vars.len());
        for (key, value) in vars {
            self.info(&format!("\t - {key}"));
            target.extend(std::iter::once((key.clone(), value)));
            keys.push(key);
        }

        Outcome::Merged { file, keys }
    }

    fn info(&self, line: &str) {
        if self.settings.logging {
            self.sink.log(line);
        }
    }
}

/// The highlighted diagnostic written on failure.
#[must_use]
pub fn format_error_block(message: &str) -> String {
    format!("\n{ERROR_BANNER}\n\n  {message}\n")
}
