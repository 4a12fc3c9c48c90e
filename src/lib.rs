// ABOUTME: Main library entry point for the Skycast weather classifier
// ABOUTME: Wires the classification engine to logging, configuration, input parsing, and output formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Skycast
//!
//! Classifies a current atmospheric observation (temperature, humidity,
//! pressure, wind speed) into Sunny, Rainy, Cloudy, or Partly Cloudy with a
//! confidence score.
//!
//! The decision logic lives in [`skycast_intelligence`]; shared types live in
//! [`skycast_core`]. This crate adds the application shell used by the
//! `skycast` binary: structured logging, environment configuration, JSON
//! observation parsing, and output formatting.
//!
//! ## Example
//!
//! ```rust
//! use skycast::models::{Category, Observation};
//! use skycast::intelligence::classify;
//!
//! let result = classify(&Observation::new(15.0, 85.0, 1000.0, 30.0)).unwrap();
//! assert_eq!(result.category, Category::Rainy);
//! ```

/// Environment-based runtime configuration
pub mod config;

/// Output rendering for classification results and rule tables
pub mod formatters;

/// Logging configuration and structured logging setup
pub mod logging;

/// Observation source adapter for JSON payloads
pub mod observation;

/// Re-export core error types
pub use skycast_core::errors;

/// Re-export core data models
pub use skycast_core::models;

/// Re-export default rule constants
pub use skycast_core::constants;

/// Re-export the classification engine
pub use skycast_intelligence as intelligence;
