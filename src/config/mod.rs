// ABOUTME: Configuration management module for runtime settings
// ABOUTME: Environment-only configuration for logging, output format, and rule set selection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module for Skycast
//!
//! Runtime settings come from environment variables; command-line flags
//! override them. The classification rule set itself is configured through
//! [`ClassificationConfig`](crate::intelligence::ClassificationConfig), either
//! the built-in table or a JSON rules file.

/// Environment and runtime configuration
pub mod environment;

pub use environment::{Environment, LogLevel, OutputFormat, SkycastConfig};
