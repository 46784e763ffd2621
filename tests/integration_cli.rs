// envinject: Stage-aware .env injection
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for CLI parsing.

use clap::Parser;
use envinject::cli::global::{DEFAULT_CONFIG_FILE, GlobalOptions};
use envinject::cli::show::OutputFormat;
use envinject::cli::{Cli, Command};

#[test]
fn cli_no_command() {
    let cli = Cli::try_parse_from(["envinject"]).unwrap();
    assert!(cli.command.is_none());
}

#[test]
fn cli_show_defaults_to_text() {
    let cli = Cli::try_parse_from(["envinject", "show"]).unwrap();
    match cli.command {
        Some(Command::Show(args)) => assert_eq!(args.format, OutputFormat::Text),
        other => panic!("expected show, got {other:?}"),
    }
}

#[test]
fn cli_unknown_format_rejected() {
    assert!(Cli::try_parse_from(["envinject", "show", "--format", "yaml"]).is_err());
}

#[test]
fn cli_repeated_configs_keep_order() {
    let cli = Cli::try_parse_from([
        "envinject",
        "-c",
        "base.toml",
        "--config",
        "prod.toml",
        "configs",
    ])
    .unwrap();
    assert_eq!(cli.global.configs.len(), 2);
    assert!(cli.global.configs[0].ends_with("base.toml"));
    assert!(cli.global.configs[1].ends_with("prod.toml"));
}

#[test]
fn cli_config_loader_lists_sources() {
    let temp = tempfile::tempdir().unwrap();
    let extra = temp.path().join("extra.toml");
    std::fs::write(&extra, "").unwrap();

    let global = GlobalOptions {
        configs: vec![extra.clone()],
        no_default_config: true,
        ..GlobalOptions::default()
    };
    let files = global.config_loader().format_loaded_files();

    assert_eq!(files, vec![format!("1. [file] {}", extra.display())]);
    assert!(!files[0].contains(DEFAULT_CONFIG_FILE));
}

#[test]
fn cli_base_path_flag_over_camel_case_config() {
    let temp = tempfile::tempdir().unwrap();
    let file = temp.path().join("host.toml");
    std::fs::write(&file, "[custom.dotenv]\nbasePath = \"deploy\"\n").unwrap();

    let cli = Cli::try_parse_from([
        "envinject",
        "--no-default-config",
        "-c",
        file.to_str().unwrap(),
        "--base-path",
        "/srv",
        "resolve",
    ])
    .unwrap();
    let config = cli
        .global
        .apply_overrides(cli.global.config_loader())
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(
        config.dotenv().base_path,
        Some(std::path::PathBuf::from("/srv"))
    );
}
