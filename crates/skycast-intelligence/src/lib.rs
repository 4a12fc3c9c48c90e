// ABOUTME: Weather classification engine for the Skycast platform
// ABOUTME: Scores observations against per-category rule groups and selects a winner
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Skycast Intelligence
//!
//! Classifies an [`Observation`](skycast_core::models::Observation) into one of
//! four weather categories with a confidence score.
//!
//! Every category owns a rule group. Each rule compares one reading against a
//! threshold and adds its weight to the category's score when it fires. The
//! winner is the highest-scoring category, with ties resolved in canonical
//! order (Sunny, Rainy, Cloudy, Partly Cloudy). Confidence is the winning
//! score capped at 1.0.
//!
//! ```
//! use skycast_core::models::{Category, Observation};
//! use skycast_intelligence::classify;
//!
//! let result = classify(&Observation::new(30.0, 40.0, 1020.0, 5.0)).unwrap();
//! assert_eq!(result.category, Category::Sunny);
//! assert!((result.confidence - 1.0).abs() < f64::EPSILON);
//! ```

/// Rule set configuration and validation
pub mod config;

/// Classifier entry points
pub mod classifier;

/// Per-call category score accumulation and winner selection
pub mod scoreboard;

/// Rule-by-rule explanation of a classification
pub mod trace;

pub use classifier::{classify, classify_input, WeatherClassifier};
pub use config::{ClassificationConfig, Condition, ConfigError, Rule, RuleGroup};
pub use scoreboard::ScoreBoard;
pub use trace::{ClassificationReport, RuleOutcome};
