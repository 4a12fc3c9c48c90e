// ABOUTME: Configuration error types for rule set validation and loading
// ABOUTME: Defines error variants for invalid weights, thresholds, intervals, and file access
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration error types for rule set validation.

use std::io;

use skycast_core::errors::AppError;
use skycast_core::models::Category;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Rule weight outside [0, 1] or not finite
    #[error("Invalid weight {weight} for {category} rule #{index}: must be within [0, 1]")]
    InvalidWeight {
        /// Category owning the rule
        category: Category,
        /// Zero-based rule position within the group
        index: usize,
        /// Offending weight
        weight: f64,
    },

    /// Threshold is NaN or infinite
    #[error("Non-finite threshold for {category} rule #{index}")]
    NonFiniteThreshold {
        /// Category owning the rule
        category: Category,
        /// Zero-based rule position within the group
        index: usize,
    },

    /// Interval lower bound is not below its upper bound
    #[error("Empty interval ({lower}, {upper}) for {category} rule #{index}")]
    EmptyInterval {
        /// Category owning the rule
        category: Category,
        /// Zero-based rule position within the group
        index: usize,
        /// Lower bound
        lower: f64,
        /// Upper bound
        upper: f64,
    },

    /// Rules file could not be read
    #[error("Failed to read rules file: {0}")]
    Io(#[from] io::Error),

    /// Rules file is not valid JSON for a rule set
    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::config_invalid(error.to_string()).with_source(error)
    }
}
