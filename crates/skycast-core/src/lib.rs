// ABOUTME: Core types and constants for the Skycast weather classifier
// ABOUTME: Foundation crate with observation models, categories, error handling, and rule constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Skycast Core
//!
//! Foundation crate providing shared types and constants for the Skycast
//! weather classifier. The classification engine and the application shell
//! both build on these types, so this crate is designed to change infrequently.
//!
//! ## Modules
//!
//! - **errors**: `InvalidInputError` for observation validation, `AppError` and `ErrorCode`
//! - **models**: `Observation`, `ObservationInput`, `Category`, `ClassificationResult`
//! - **constants**: Default rule thresholds and weights organized by category

/// Unified error handling with observation validation errors and standard error codes
pub mod errors;

/// Core data models (observations, categories, classification results)
pub mod models;

/// Default rule thresholds, weights, and service identifiers
pub mod constants;
