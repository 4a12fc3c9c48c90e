// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles environment variables, output format selection, and rules file resolution
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration management

use std::env;
use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{info, Level};

use crate::intelligence::{ClassificationConfig, ConfigError};

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    #[default]
    Warn,
    /// Informational messages
    Info,
    /// Debug output, including per-classification events
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Convert to `tracing::Level`
    #[must_use]
    pub const fn to_tracing_level(&self) -> Level {
        match self {
            Self::Error => Level::ERROR,
            Self::Warn => Level::WARN,
            Self::Info => Level::INFO,
            Self::Debug => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }

    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "info" => Self::Info,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Warn,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// How classification output is rendered
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pretty-printed JSON envelope
    #[default]
    Json,
    /// Human-readable text
    Text,
}

impl OutputFormat {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "text" | "plain" => Self::Text,
            _ => Self::Json,
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Text => write!(f, "text"),
        }
    }
}

/// Runtime configuration for the Skycast CLI
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SkycastConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Default output format
    pub output_format: OutputFormat,
    /// Optional JSON rules file replacing the built-in rule set
    pub rules_file: Option<PathBuf>,
}

impl SkycastConfig {
    /// Load configuration from environment variables
    ///
    /// Reads `ENVIRONMENT`, `SKYCAST_OUTPUT_FORMAT`, and `SKYCAST_RULES_FILE`.
    #[must_use]
    pub fn from_env() -> Self {
        let config = Self {
            environment: Environment::from_str_or_default(&env_var_or(
                "ENVIRONMENT",
                "development",
            )),
            output_format: OutputFormat::from_str_or_default(&env_var_or(
                "SKYCAST_OUTPUT_FORMAT",
                "json",
            )),
            rules_file: env::var("SKYCAST_RULES_FILE")
                .ok()
                .filter(|path| !path.trim().is_empty())
                .map(PathBuf::from),
        };

        info!(
            environment = %config.environment,
            output_format = %config.output_format,
            rules_file = ?config.rules_file,
            "Runtime configuration loaded"
        );

        config
    }

    /// Apply command-line overrides
    #[must_use]
    pub fn with_overrides(
        mut self,
        output_format: Option<OutputFormat>,
        rules_file: Option<PathBuf>,
    ) -> Self {
        if let Some(format) = output_format {
            self.output_format = format;
        }
        if rules_file.is_some() {
            self.rules_file = rules_file;
        }
        self
    }

    /// Resolve the classification rule set
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the rules file cannot be read, parsed, or validated
    pub fn load_rules(&self) -> Result<ClassificationConfig, ConfigError> {
        match &self.rules_file {
            Some(path) => {
                info!(path = %path.display(), "Loading rule set from file");
                ClassificationConfig::from_json_file(path)
            }
            None => Ok(ClassificationConfig::default()),
        }
    }
}

/// Read an environment variable, falling back to `default`
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}
