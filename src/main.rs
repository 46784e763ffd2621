// envinject: Stage-aware .env injection
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Logging --> Command Dispatch
//!   Show | Resolve | Configs | Version
//! ```

use std::process::ExitCode;

use envinject::cli::global::GlobalOptions;
use envinject::cli::{self, Command};
use envinject::cmd::config::{run_configs_command, run_resolve_command};
use envinject::cmd::show::run_show_command;
use envinject::config::HostConfig;
use envinject::error::InjectError;
use envinject::logging::init_logging;
use envinject::logging::{LogConfig, LogLevel};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    let cli = cli::parse();

    let log_config = match build_log_config(&cli.global) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e:#}");
            return ExitCode::FAILURE;
        }
    };
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli)
}

fn build_log_config(global: &GlobalOptions) -> envinject::error::Result<LogConfig> {
    let console_level = global
        .log_level
        .map(LogLevel::new)
        .transpose()
        .map_err(InjectError::from)?
        .unwrap_or_default();

    Ok(LogConfig::builder()
        .with_console_level(console_level)
        .maybe_with_log_file(global.log_file.as_ref().map(|p| p.display().to_string()))
        .with_json(global.log_json)
        .build())
}

fn dispatch_command(cli: &cli::Cli) -> ExitCode {
    let result = match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            Ok(())
        }
        Some(Command::Configs) => {
            run_configs_command(&cli.global.config_loader().format_loaded_files());
            Ok(())
        }
        Some(Command::Resolve) => {
            load_config(&cli.global).map(|config| run_resolve_command(&cli.global, &config))
        }
        Some(Command::Show(args)) => load_config(&cli.global)
            .and_then(|config| run_show_command(args, &cli.global, config)),
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            Err(InjectError::other("No command specified").into())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

fn load_config(global: &GlobalOptions) -> envinject::error::Result<HostConfig> {
    let loader = global.apply_overrides(global.config_loader())?;
    loader.build().map_err(|e| {
        eprintln!("Failed to load config: {e}");
        e
    })
}
