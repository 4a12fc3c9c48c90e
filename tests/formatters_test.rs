// ABOUTME: Integration tests for the formatters module
// ABOUTME: Tests JSON envelopes and text rendering for predictions, batches, rules, and errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{TimeZone, Utc};
use serde_json::{json, Value};
use skycast::config::OutputFormat;
use skycast::errors::{AppError, InvalidInputError};
use skycast::formatters::{
    render_batch, render_error, render_prediction, render_rules, BatchEntry, PredictionResponse,
};
use skycast::intelligence::{ClassificationConfig, WeatherClassifier};
use skycast::models::{Category, ClassificationResult, Observation, ObservationField};

fn fixed_time() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
}

#[test]
fn test_prediction_json_envelope() {
    let response = PredictionResponse::from_result(
        ClassificationResult::new(Category::PartlyCloudy, 0.8),
        fixed_time(),
    );
    let value: Value =
        serde_json::from_str(&render_prediction(&response, OutputFormat::Json).unwrap()).unwrap();

    assert_eq!(value["prediction"], "Partly Cloudy");
    assert_eq!(value["category"], "PartlyCloudy");
    assert_eq!(value["confidence"], json!(0.8));
    assert_eq!(value["timestamp"], "2025-06-01T12:00:00Z");
    assert!(value.get("scores").is_none());
    assert!(value.get("rules").is_none());
}

#[test]
fn test_explained_prediction_includes_scores_and_rules() {
    let report = WeatherClassifier::default()
        .explain(&Observation::new(30.0, 40.0, 1020.0, 5.0))
        .unwrap();
    let response = PredictionResponse::from_report(report, fixed_time());
    let value: Value =
        serde_json::from_str(&render_prediction(&response, OutputFormat::Json).unwrap()).unwrap();

    assert_eq!(value["prediction"], "Sunny");
    assert_eq!(value["scores"]["Sunny"], json!(1.0));
    assert_eq!(value["rules"].as_array().unwrap().len(), 16);
    assert_eq!(value["rules"][0]["condition"]["kind"], "above");
}

#[test]
fn test_prediction_text_uses_one_decimal_percent() {
    let response = PredictionResponse::from_result(
        ClassificationResult::new(Category::Rainy, 0.5),
        fixed_time(),
    );
    let text = render_prediction(&response, OutputFormat::Text).unwrap();
    assert!(text.contains("Weather Prediction: Rainy"));
    assert!(text.contains("Confidence: 50.0%"));
}

#[test]
fn test_zero_confidence_text_flags_default() {
    let response =
        PredictionResponse::from_result(ClassificationResult::no_evidence(), fixed_time());
    let text = render_prediction(&response, OutputFormat::Text).unwrap();
    assert!(text.contains("Confidence: 0.0%"));
    assert!(text.contains("No rule matched"));
}

#[test]
fn test_batch_entries_keep_index_and_errors() {
    let entries = vec![
        BatchEntry::new(0, Ok(ClassificationResult::new(Category::Sunny, 1.0))),
        BatchEntry::new(
            1,
            Err(InvalidInputError::MissingFields {
                fields: vec![ObservationField::Pressure],
            }
            .into()),
        ),
    ];

    let value: Value =
        serde_json::from_str(&render_batch(&entries, OutputFormat::Json).unwrap()).unwrap();
    assert_eq!(value[0]["index"], 0);
    assert_eq!(value[0]["result"]["category"], "Sunny");
    assert_eq!(value[1]["index"], 1);
    assert_eq!(value[1]["error"]["code"], "MISSING_REQUIRED_FIELD");

    let text = render_batch(&entries, OutputFormat::Text).unwrap();
    assert!(text.contains("#0: Sunny (100.0% confidence)"));
    assert!(text.contains("#1: error: Missing required weather parameters: pressure"));
}

#[test]
fn test_error_envelope() {
    let error: AppError = InvalidInputError::MissingFields {
        fields: vec![ObservationField::Pressure],
    }
    .into();
    let value: Value = serde_json::from_str(&render_error(error, OutputFormat::Json)).unwrap();

    assert_eq!(value["error"]["code"], "MISSING_REQUIRED_FIELD");
    assert_eq!(
        value["error"]["message"],
        "Missing required weather parameters: pressure"
    );
}

#[test]
fn test_rules_rendering_lists_every_group() {
    let config = ClassificationConfig::default();

    let text = render_rules(&config, OutputFormat::Text).unwrap();
    for category in Category::ALL {
        assert!(text.contains(category.label()), "missing {category}");
    }

    let value: Value =
        serde_json::from_str(&render_rules(&config, OutputFormat::Json).unwrap()).unwrap();
    assert_eq!(value["partly_cloudy"]["rules"].as_array().unwrap().len(), 4);
}
