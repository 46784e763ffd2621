// envinject: Stage-aware .env injection
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Host logging capability handed to the injector.

use owo_colors::OwoColorize;
use std::cell::RefCell;

/// Where the injector writes its output.
///
/// `log` receives informational lines and is only called when logging is
/// enabled. `error` receives the diagnostic block and is always called.
pub trait LogSink {
    fn log(&self, line: &str);
    fn error(&self, text: &str);
}

impl<T: LogSink + ?Sized> LogSink for &T {
    fn log(&self, line: &str) {
        (**self).log(line);
    }

    fn error(&self, text: &str) {
        (**self).error(text);
    }
}

/// Info lines through `tracing`, errors in red on stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn log(&self, line: &str) {
        tracing::info!("{line}");
    }

    fn error(&self, text: &str) {
        eprintln!("{}", text.red());
    }
}

/// Keeps everything in memory, for hosts that render output themselves.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: RefCell<Vec<String>>,
    errors: RefCell<Vec<String>>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Informational lines received so far.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    /// Diagnostic blocks received so far.
    #[must_use]
    pub fn errors(&self) -> Vec<String> {
        self.errors.borrow().clone()
    }
}

impl LogSink for MemorySink {
    fn log(&self, line: &str) {
        self.lines.borrow_mut().push(line.to_string());
    }

    fn error(&self, text: &str) {
        self.errors.borrow_mut().push(text.to_string());
    }
}
