// envinject: Stage-aware .env injection
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::cli::show::OutputFormat;
use crate::cli::{Cli, Command};
use crate::config::loader::ConfigLoader;
use clap::Parser;
use std::path::PathBuf;

#[test]
fn test_parse_version() {
    let cli = Cli::try_parse_from(["envinject", "version"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn test_parse_show_json() {
    let cli = Cli::try_parse_from(["envinject", "show", "--format", "json"]).unwrap();
    match cli.command {
        Some(Command::Show(args)) => assert_eq!(args.format, OutputFormat::Json),
        other => panic!("expected show, got {other:?}"),
    }
}

#[test]
fn test_parse_global_options() {
    let cli = Cli::try_parse_from([
        "envinject",
        "-e",
        "staging",
        "-b",
        "/srv/app",
        "--include",
        "A",
        "--include",
        "B",
        "--no-logging",
        "-l",
        "4",
        "resolve",
    ])
    .unwrap();

    assert_eq!(cli.global.env.as_deref(), Some("staging"));
    assert_eq!(cli.global.base_path, Some(PathBuf::from("/srv/app")));
    assert_eq!(cli.global.include, vec!["A", "B"]);
    assert!(cli.global.no_logging);
    assert_eq!(cli.global.log_level, Some(4));
    assert!(matches!(cli.command, Some(Command::Resolve)));
}

#[test]
fn test_log_level_out_of_range_rejected() {
    assert!(Cli::try_parse_from(["envinject", "-l", "7", "show"]).is_err());
}

#[test]
fn test_overrides_applied_to_settings() {
    let cli = Cli::try_parse_from([
        "envinject",
        "--path",
        "ci/.env",
        "--exclude",
        "SECRET",
        "--no-logging",
        "show",
    ])
    .unwrap();

    let loader = ConfigLoader::new().add_toml_str("[custom.dotenv]\nlogging = true\n");
    let config = cli.global.apply_overrides(loader).unwrap().build().unwrap();

    assert_eq!(config.dotenv().path, Some(PathBuf::from("ci/.env")));
    assert_eq!(config.dotenv().exclude, vec!["SECRET"]);
    assert!(!config.dotenv().logging);
}

#[test]
fn test_no_overrides_keeps_file_values() {
    let cli = Cli::try_parse_from(["envinject", "show"]).unwrap();

    let loader = ConfigLoader::new().add_toml_str("[custom.dotenv]\ninclude = [\"A\"]\n");
    let config = cli.global.apply_overrides(loader).unwrap().build().unwrap();

    assert_eq!(config.dotenv().include, vec!["A"]);
    assert!(config.dotenv().logging);
}
