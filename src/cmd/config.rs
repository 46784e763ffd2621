// envinject: Stage-aware .env injection
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Config-related commands for envinject.

use crate::cli::global::GlobalOptions;
use crate::config::HostConfig;
use crate::dotenv::Resolution;

/// Display the resolved stage, env file and parser source.
pub fn run_resolve_command(global: &GlobalOptions, config: &HostConfig) {
    let resolution = Resolution::resolve(global.env.as_deref(), config.dotenv());
    for line in resolution.format_lines() {
        println!("{line}");
    }
}

/// Display loaded configuration files.
pub fn run_configs_command(config_files: &[String]) {
    if config_files.is_empty() {
        println!("No configuration files loaded");
    } else {
        for line in config_files {
            println!("{line}");
        }
    }
}
