// ABOUTME: Unit tests for config environment functionality
// ABOUTME: Validates environment parsing, output format selection, and CLI overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;
use std::path::PathBuf;

use serial_test::serial;
use skycast::config::environment::{Environment, LogLevel, OutputFormat, SkycastConfig};

fn clear_skycast_env() {
    env::remove_var("ENVIRONMENT");
    env::remove_var("SKYCAST_OUTPUT_FORMAT");
    env::remove_var("SKYCAST_RULES_FILE");
}

#[test]
fn test_log_level_parsing() {
    assert_eq!(LogLevel::from_str_or_default("error"), LogLevel::Error);
    assert_eq!(LogLevel::from_str_or_default("WARN"), LogLevel::Warn);
    assert_eq!(LogLevel::from_str_or_default("info"), LogLevel::Info);
    assert_eq!(LogLevel::from_str_or_default("Debug"), LogLevel::Debug);
    assert_eq!(LogLevel::from_str_or_default("trace"), LogLevel::Trace);
    assert_eq!(LogLevel::from_str_or_default("invalid"), LogLevel::Warn); // Default fallback
}

#[test]
fn test_environment_parsing() {
    assert_eq!(
        Environment::from_str_or_default("production"),
        Environment::Production
    );
    assert_eq!(
        Environment::from_str_or_default("PROD"),
        Environment::Production
    );
    assert_eq!(
        Environment::from_str_or_default("test"),
        Environment::Testing
    );
    assert_eq!(
        Environment::from_str_or_default("anything"),
        Environment::Development
    );
    assert!(Environment::Production.is_production());
    assert!(!Environment::Testing.is_production());
}

#[test]
fn test_output_format_parsing() {
    assert_eq!(OutputFormat::from_str_or_default("text"), OutputFormat::Text);
    assert_eq!(OutputFormat::from_str_or_default("PLAIN"), OutputFormat::Text);
    assert_eq!(OutputFormat::from_str_or_default("json"), OutputFormat::Json);
    assert_eq!(OutputFormat::from_str_or_default("xml"), OutputFormat::Json);
    assert_eq!(OutputFormat::Text.to_string(), "text");
}

#[test]
#[serial]
fn test_from_env_defaults() {
    clear_skycast_env();

    let config = SkycastConfig::from_env();
    assert_eq!(config, SkycastConfig::default());
    assert_eq!(config.output_format, OutputFormat::Json);
    assert!(config.rules_file.is_none());
}

#[test]
#[serial]
fn test_from_env_reads_variables() {
    clear_skycast_env();
    env::set_var("ENVIRONMENT", "production");
    env::set_var("SKYCAST_OUTPUT_FORMAT", "text");
    env::set_var("SKYCAST_RULES_FILE", "/etc/skycast/rules.json");

    let config = SkycastConfig::from_env();
    assert_eq!(config.environment, Environment::Production);
    assert_eq!(config.output_format, OutputFormat::Text);
    assert_eq!(
        config.rules_file,
        Some(PathBuf::from("/etc/skycast/rules.json"))
    );

    clear_skycast_env();
}

#[test]
#[serial]
fn test_blank_rules_file_is_ignored() {
    clear_skycast_env();
    env::set_var("SKYCAST_RULES_FILE", "  ");

    assert!(SkycastConfig::from_env().rules_file.is_none());

    clear_skycast_env();
}

#[test]
fn test_cli_overrides_win() {
    let config = SkycastConfig {
        environment: Environment::Development,
        output_format: OutputFormat::Text,
        rules_file: Some(PathBuf::from("env-rules.json")),
    }
    .with_overrides(Some(OutputFormat::Json), Some(PathBuf::from("cli-rules.json")));

    assert_eq!(config.output_format, OutputFormat::Json);
    assert_eq!(config.rules_file, Some(PathBuf::from("cli-rules.json")));
}

#[test]
fn test_absent_overrides_keep_environment_values() {
    let base = SkycastConfig {
        environment: Environment::Testing,
        output_format: OutputFormat::Text,
        rules_file: Some(PathBuf::from("env-rules.json")),
    };
    assert_eq!(base.clone().with_overrides(None, None), base);
}

#[test]
fn test_default_rules_without_file() {
    let rules = SkycastConfig::default().load_rules().unwrap();
    assert_eq!(rules.rule_count(), 16);
}
