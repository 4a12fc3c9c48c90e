// ABOUTME: Output rendering for classification results, batch outcomes, and rule tables
// ABOUTME: Produces the JSON prediction envelope and human-readable text views
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Output formatters
//!
//! The JSON envelope relays the classification result verbatim and adds a
//! human label and a timestamp:
//!
//! ```json
//! { "prediction": "Partly Cloudy", "category": "PartlyCloudy", "confidence": 0.8, "timestamp": "..." }
//! ```

use std::fmt::Write;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::config::OutputFormat;
use crate::errors::{AppError, AppResult, ErrorResponse};
use crate::intelligence::{ClassificationConfig, ClassificationReport, RuleOutcome, ScoreBoard};
use crate::models::{Category, ClassificationResult};

/// Prediction envelope handed to the presentation layer
#[derive(Debug, Clone, Serialize)]
pub struct PredictionResponse {
    /// Human-readable category label
    pub prediction: &'static str,
    /// Winning category
    pub category: Category,
    /// Confidence in [0, 1]
    pub confidence: f64,
    /// When the classification was produced
    pub timestamp: DateTime<Utc>,
    /// Per-category scores, present when an explanation was requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scores: Option<ScoreBoard>,
    /// Per-rule outcomes, present when an explanation was requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<Vec<RuleOutcome>>,
}

impl PredictionResponse {
    /// Envelope for a plain classification result
    #[must_use]
    pub fn from_result(result: ClassificationResult, timestamp: DateTime<Utc>) -> Self {
        Self {
            prediction: result.category.label(),
            category: result.category,
            confidence: result.confidence,
            timestamp,
            scores: None,
            rules: None,
        }
    }

    /// Envelope carrying the full explanation
    #[must_use]
    pub fn from_report(report: ClassificationReport, timestamp: DateTime<Utc>) -> Self {
        Self {
            scores: Some(report.scores),
            rules: Some(report.rules),
            ..Self::from_result(report.result, timestamp)
        }
    }

    /// The two-field classification result this envelope relays
    #[must_use]
    pub fn result(&self) -> ClassificationResult {
        ClassificationResult {
            category: self.category,
            confidence: self.confidence,
        }
    }
}

/// One entry of a batch classification
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum BatchEntry {
    /// Observation classified successfully
    Classified {
        /// Position in the input array
        index: usize,
        /// Classification result
        result: ClassificationResult,
    },
    /// Observation rejected
    Rejected {
        /// Position in the input array
        index: usize,
        /// Error envelope payload
        #[serde(flatten)]
        error: ErrorResponse,
    },
}

impl BatchEntry {
    /// Build an entry from a per-observation outcome
    #[must_use]
    pub fn new(index: usize, outcome: AppResult<ClassificationResult>) -> Self {
        match outcome {
            Ok(result) => Self::Classified { index, result },
            Err(error) => Self::Rejected {
                index,
                error: error.into(),
            },
        }
    }
}

/// Render a prediction in the requested format
///
/// # Errors
///
/// Returns `AppError` if JSON serialization fails
pub fn render_prediction(response: &PredictionResponse, format: OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(response)?),
        OutputFormat::Text => Ok(prediction_text(response)),
    }
}

fn prediction_text(response: &PredictionResponse) -> String {
    let result = response.result();
    let mut out = format!("Weather Prediction: {}\n", result.category.label());
    let _ = writeln!(out, "Confidence: {:.1}%", result.confidence_percent());
    if !result.has_evidence() {
        out.push_str(
            "No rule matched this observation; the category is a default, not evidence.\n",
        );
    }

    if let Some(scores) = &response.scores {
        out.push_str("\nScores:\n");
        for (category, score) in scores.iter() {
            let _ = writeln!(out, "  {:<14} {score:.1}", category.label());
        }
    }

    if let Some(rules) = &response.rules {
        out.push_str("\nRules:\n");
        for outcome in rules {
            let _ = writeln!(
                out,
                "  [{}] {:<14} {:<12} {} (reading {}, +{:.1})",
                if outcome.fired { "x" } else { " " },
                outcome.category.label(),
                outcome.metric.as_str(),
                outcome.condition,
                outcome.reading,
                outcome.weight
            );
        }
    }

    out
}

/// Render a batch of outcomes in the requested format
///
/// # Errors
///
/// Returns `AppError` if JSON serialization fails
pub fn render_batch(entries: &[BatchEntry], format: OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(entries)?),
        OutputFormat::Text => Ok(entries.iter().fold(String::new(), |mut out, entry| {
            let _ = match entry {
                BatchEntry::Classified { index, result } => writeln!(out, "#{index}: {result}"),
                BatchEntry::Rejected { index, error } => {
                    writeln!(out, "#{index}: error: {}", error.error.message)
                }
            };
            out
        })),
    }
}

/// Render the active rule set
///
/// # Errors
///
/// Returns `AppError` if JSON serialization fails
pub fn render_rules(config: &ClassificationConfig, format: OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(config).map_err(AppError::from),
        OutputFormat::Text => {
            let mut out = String::new();
            for (category, group) in config.groups() {
                let _ = writeln!(out, "{} (max {:.1})", category.label(), group.max_score());
                for rule in &group.rules {
                    let _ = writeln!(
                        out,
                        "  {:<12} {:<26} +{:.1}",
                        rule.metric.as_str(),
                        rule.condition.to_string(),
                        rule.weight
                    );
                }
            }
            Ok(out)
        }
    }
}

/// Render an error envelope
#[must_use]
pub fn render_error(error: AppError, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => {
            let response = ErrorResponse::from(error);
            serde_json::to_string_pretty(&response)
                .unwrap_or_else(|_| response.error.message.clone())
        }
        OutputFormat::Text => format!("error: {error}"),
    }
}
