// ABOUTME: Core data models for atmospheric observations and classification output
// ABOUTME: Re-exports observation, category, and classification result types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Weather categories and their canonical ordering
pub mod category;

/// Classification result returned to the presentation layer
pub mod classification;

/// Atmospheric observation input and boundary validation
pub mod observation;

pub use category::Category;
pub use classification::ClassificationResult;
pub use observation::{Observation, ObservationField, ObservationInput};
