// ABOUTME: Integration tests for loading classification rule sets from JSON files
// ABOUTME: Validates custom rules, partial documents, and rejection of invalid rule sets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::fs;
use std::path::PathBuf;

use serde_json::json;
use skycast::config::SkycastConfig;
use skycast::errors::{AppError, ErrorCode};
use skycast::intelligence::{ClassificationConfig, ConfigError, WeatherClassifier};
use skycast::models::{Category, Observation};
use tempfile::TempDir;

fn write_rules(dir: &TempDir, document: &serde_json::Value) -> PathBuf {
    let path = dir.path().join("rules.json");
    fs::write(&path, serde_json::to_string_pretty(document).unwrap()).unwrap();
    path
}

#[test]
fn test_default_rules_round_trip_through_file() {
    let dir = TempDir::new().unwrap();
    let document = serde_json::to_value(ClassificationConfig::default()).unwrap();
    let path = write_rules(&dir, &document);

    let loaded = ClassificationConfig::from_json_file(&path).unwrap();
    assert_eq!(loaded, ClassificationConfig::default());
}

#[test]
fn test_partial_rules_file_replaces_one_group() {
    let dir = TempDir::new().unwrap();
    let path = write_rules(
        &dir,
        &json!({
            "rainy": {
                "rules": [
                    { "metric": "humidity", "condition": { "kind": "above", "value": 50.0 }, "weight": 1.0 }
                ]
            }
        }),
    );

    let config = SkycastConfig {
        rules_file: Some(path),
        ..SkycastConfig::default()
    };
    let rules = config.load_rules().unwrap();
    assert_eq!(rules.rainy.rules.len(), 1);
    assert_eq!(rules.sunny, ClassificationConfig::default().sunny);

    let classifier = WeatherClassifier::new(rules).unwrap();
    let result = classifier
        .classify(&Observation::new(10.0, 55.0, 1000.0, 0.0))
        .unwrap();
    assert_eq!(result.category, Category::Rainy);
    assert!((result.confidence - 1.0).abs() < f64::EPSILON);
}

#[test]
fn test_invalid_weight_in_file_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_rules(
        &dir,
        &json!({
            "sunny": {
                "rules": [
                    { "metric": "temperature", "condition": { "kind": "above", "value": 25.0 }, "weight": 1.5 }
                ]
            }
        }),
    );

    let error = ClassificationConfig::from_json_file(&path).unwrap_err();
    assert!(matches!(
        error,
        ConfigError::InvalidWeight {
            category: Category::Sunny,
            index: 0,
            ..
        }
    ));

    let app_error = AppError::from(error);
    assert_eq!(app_error.code, ErrorCode::ConfigInvalid);
    assert_eq!(app_error.http_status(), 500);
}

#[test]
fn test_empty_interval_in_file_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_rules(
        &dir,
        &json!({
            "cloudy": {
                "rules": [
                    { "metric": "pressure", "condition": { "kind": "between", "lower": 1015.0, "upper": 1005.0 }, "weight": 0.3 }
                ]
            }
        }),
    );

    assert!(matches!(
        ClassificationConfig::from_json_file(&path),
        Err(ConfigError::EmptyInterval {
            category: Category::Cloudy,
            ..
        })
    ));
}

#[test]
fn test_malformed_rules_file_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("rules.json");
    fs::write(&path, "{ \"sunny\": [").unwrap();

    assert!(matches!(
        ClassificationConfig::from_json_file(&path),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn test_missing_rules_file_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    let config = SkycastConfig {
        rules_file: Some(dir.path().join("absent.json")),
        ..SkycastConfig::default()
    };

    assert!(matches!(config.load_rules(), Err(ConfigError::Io(_))));
}
