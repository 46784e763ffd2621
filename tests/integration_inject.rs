// envinject: Stage-aware .env injection
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for end-to-end injection.
//!
//! Env files live in temp directories and go through the real parsers.

use std::collections::BTreeMap;
use std::path::Path;

use envinject::cli::show::OutputFormat;
use envinject::cmd::show::render_environment;
use envinject::config::HostConfig;
use envinject::config::settings::PluginSettings;
use envinject::dotenv::environment::{EnvironmentName, resolve_with};
use envinject::inject::sink::MemorySink;
use envinject::inject::{EnvInjector, NOT_FOUND_MESSAGE, Outcome};
use tempfile::TempDir;

fn project(files: &[(&str, &str)]) -> TempDir {
    let temp = tempfile::tempdir().expect("failed to create temp dir");
    for (name, content) in files {
        std::fs::write(temp.path().join(name), content).unwrap();
    }
    temp
}

fn settings_for(dir: &Path) -> PluginSettings {
    PluginSettings::builder().base_path(dir).build()
}

fn stage(name: &str) -> EnvironmentName {
    EnvironmentName::new(name).unwrap()
}

// =============================================================================
// Stage files
// =============================================================================

#[test]
fn inject_default_env_file() {
    let temp = project(&[(".env", "FOO=1\nBAR=2\n")]);
    let injector = EnvInjector::new(settings_for(temp.path()), MemorySink::new());
    let mut environment: BTreeMap<String, String> = BTreeMap::new();

    let outcome = injector.run(&stage("development"), &mut environment);

    assert_eq!(environment["FOO"], "1");
    assert_eq!(environment["BAR"], "2");
    assert!(matches!(outcome, Outcome::Merged { ref keys, .. } if keys.len() == 2));

    let lines = injector.sink().lines();
    assert_eq!(lines.len(), 3);
    assert_eq!(
        lines[0],
        format!(
            "DOTENV: Loading environment variables from {}:",
            temp.path().join(".env").display()
        )
    );
    assert_eq!(lines[1..], ["\t - FOO", "\t - BAR"]);
}

#[test]
fn inject_stage_file_over_default() {
    let temp = project(&[
        (".env", "STAGE=default\n"),
        (".env.production", "STAGE=production\n"),
    ]);
    let injector = EnvInjector::new(settings_for(temp.path()), MemorySink::new());
    let mut environment: BTreeMap<String, String> = BTreeMap::new();

    injector.run(&stage("production"), &mut environment);

    assert_eq!(environment["STAGE"], "production");
}

#[test]
fn inject_stage_from_process_variable() {
    let temp = project(&[
        (".env.staging", "STAGE=staging\n"),
        (".env.production", "STAGE=production\n"),
    ]);
    let env = resolve_with(
        |key| (key == "NODE_ENV").then(|| "production".to_string()),
        Some("staging"),
    );
    let injector = EnvInjector::new(settings_for(temp.path()), MemorySink::new());
    let mut environment: BTreeMap<String, String> = BTreeMap::new();

    injector.run(&env, &mut environment);

    assert_eq!(env.as_str(), "production");
    assert_eq!(environment["STAGE"], "production");
}

#[test]
fn inject_explicit_path() {
    let temp = project(&[(".env", "FROM=default\n"), ("ci.env", "FROM=ci\n")]);
    let settings = PluginSettings::builder()
        .base_path(temp.path())
        .path(temp.path().join("ci.env"))
        .build();
    let injector = EnvInjector::new(settings, MemorySink::new());
    let mut environment: BTreeMap<String, String> = BTreeMap::new();

    injector.run(&stage("development"), &mut environment);

    assert_eq!(environment["FROM"], "ci");
}

// =============================================================================
// Filtering
// =============================================================================

#[test]
fn inject_include_only() {
    let temp = project(&[(".env", "FOO=1\nBAR=2\n")]);
    let settings = PluginSettings::builder()
        .base_path(temp.path())
        .include(vec!["FOO".to_string()])
        .build();
    let injector = EnvInjector::new(settings, MemorySink::new());
    let mut environment: BTreeMap<String, String> = BTreeMap::new();

    injector.run(&stage("development"), &mut environment);

    assert_eq!(environment.len(), 1);
    assert_eq!(environment["FOO"], "1");
    assert_eq!(injector.sink().lines().len(), 2);
}

#[test]
fn inject_exclude() {
    let temp = project(&[(".env", "FOO=1\nBAR=2\nSECRET=x\n")]);
    let settings = PluginSettings::builder()
        .base_path(temp.path())
        .exclude(vec!["SECRET".to_string()])
        .build();
    let injector = EnvInjector::new(settings, MemorySink::new());
    let mut environment: BTreeMap<String, String> = BTreeMap::new();

    injector.run(&stage("development"), &mut environment);

    assert_eq!(environment.keys().collect::<Vec<_>>(), vec!["BAR", "FOO"]);
}

// =============================================================================
// Not found / errors
// =============================================================================

#[test]
fn inject_missing_file() {
    let temp = project(&[]);
    let injector = EnvInjector::new(settings_for(temp.path()), MemorySink::new());
    let mut environment = BTreeMap::from([("KEEP".to_string(), "1".to_string())]);

    let outcome = injector.run(&stage("development"), &mut environment);

    assert!(matches!(outcome, Outcome::NotFound { .. }));
    assert_eq!(environment.len(), 1);
    assert_eq!(injector.sink().lines(), vec![NOT_FOUND_MESSAGE.to_string()]);
}

#[test]
fn inject_malformed_file_is_reported_not_raised() {
    let temp = project(&[(".env", "OK=1\nthis is not valid\n")]);
    let injector = EnvInjector::new(settings_for(temp.path()), MemorySink::new());
    let mut environment: BTreeMap<String, String> = BTreeMap::new();

    let outcome = injector.run(&stage("development"), &mut environment);

    // load completes before merge, so nothing from the file leaks through
    assert!(environment.is_empty());
    assert!(matches!(outcome, Outcome::Errored { .. }));
    assert_eq!(injector.sink().errors().len(), 1);
    assert!(injector.sink().errors()[0].contains("invalid syntax"));
}

// =============================================================================
// Project-local parser config
// =============================================================================

#[test]
fn inject_with_literal_strategy() {
    let temp = project(&[
        ("dotenv.config.toml", "strategy = \"literal\"\n"),
        (".env", "TEMPLATE=${NOT_EXPANDED}\n"),
    ]);
    let injector = EnvInjector::new(settings_for(temp.path()), MemorySink::new());
    let mut environment: BTreeMap<String, String> = BTreeMap::new();

    injector.run(&stage("development"), &mut environment);

    assert_eq!(environment["TEMPLATE"], "${NOT_EXPANDED}");
}

#[test]
fn inject_required_file_missing_is_error() {
    let temp = project(&[("dotenv.config.toml", "required = true\n")]);
    let injector = EnvInjector::new(settings_for(temp.path()), MemorySink::new());
    let mut environment: BTreeMap<String, String> = BTreeMap::new();

    let outcome = injector.run(&stage("development"), &mut environment);

    assert!(matches!(outcome, Outcome::Errored { ref message } if message.contains("not found")));
    assert!(injector.sink().lines().is_empty());
}

#[test]
fn inject_broken_parser_config_is_error() {
    let temp = project(&[
        ("dotenv.config.toml", "strategy = [\n"),
        (".env", "FOO=1\n"),
    ]);
    let injector = EnvInjector::new(settings_for(temp.path()), MemorySink::new());
    let mut environment: BTreeMap<String, String> = BTreeMap::new();

    let outcome = injector.run(&stage("development"), &mut environment);

    assert!(matches!(outcome, Outcome::Errored { .. }));
    assert!(environment.is_empty());
}

// =============================================================================
// Host configuration round trip
// =============================================================================

#[test]
fn inject_into_host_config() {
    let temp = project(&[(".env.production", "API_URL=https://api.example.com\n")]);
    let toml = format!(
        "[provider.environment]\nregion = \"eu-west-1\"\n\n[custom.dotenv]\nbasePath = {:?}\nlogging = false\n",
        temp.path().display().to_string()
    );
    let mut config = HostConfig::parse(&toml).unwrap();

    let injector = EnvInjector::new(config.dotenv().clone(), MemorySink::new());
    injector.run(&stage("production"), &mut config.provider.environment);

    assert!(injector.sink().lines().is_empty());
    assert_eq!(
        render_environment(&config, OutputFormat::Text).unwrap(),
        "API_URL=https://api.example.com\nregion=eu-west-1\n"
    );

    let json: serde_json::Value =
        serde_json::from_str(&render_environment(&config, OutputFormat::Json).unwrap()).unwrap();
    assert_eq!(json["API_URL"], "https://api.example.com");
}
