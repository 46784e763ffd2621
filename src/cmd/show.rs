// envinject: Stage-aware .env injection
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The `show` command: inject, then print `provider.environment`.

use crate::cli::global::GlobalOptions;
use crate::cli::show::{OutputFormat, ShowArgs};
use crate::config::HostConfig;
use crate::dotenv::environment;
use crate::error::Result;
use crate::inject::EnvInjector;
use crate::inject::sink::TracingSink;

/// Runs the injector against `config` and prints the resulting environment.
///
/// Injection failures are reported by the injector and do not fail the command.
///
/// # Errors
///
/// Returns an error if the environment cannot be serialized to JSON.
pub fn run_show_command(
    args: &ShowArgs,
    global: &GlobalOptions,
    mut config: HostConfig,
) -> Result<()> {
    let stage = environment::resolve(global.env.as_deref());
    let injector = EnvInjector::new(config.custom.dotenv.clone(), TracingSink);
    let outcome = injector.run(&stage, &mut config.provider.environment);
    tracing::debug!(?outcome, "injection finished");

    print!("{}", render_environment(&config, args.format)?);
    Ok(())
}

/// Renders `provider.environment` in the requested format.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render_environment(config: &HostConfig, format: OutputFormat) -> Result<String> {
    let rendered = match format {
        OutputFormat::Text => config
            .format_environment()
            .into_iter()
            .map(|line| line + "\n")
            .collect(),
        OutputFormat::Json => {
            serde_json::to_string_pretty(&config.provider.environment)? + "\n"
        }
    };
    Ok(rendered)
}
