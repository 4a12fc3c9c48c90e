// ABOUTME: Configuration module for skycast-intelligence crate
// ABOUTME: Re-exports rule set configuration and error types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Configuration error types
pub mod error;

/// Rule groups, conditions, and the default classification table
pub mod rules;

pub use error::ConfigError;
pub use rules::{ClassificationConfig, Condition, Rule, RuleGroup};
