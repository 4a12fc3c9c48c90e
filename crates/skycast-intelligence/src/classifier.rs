// ABOUTME: Weather classifier entry points for single, explained, and batch classification
// ABOUTME: Validates observations, scores them against the rule set, and reports the winner
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Weather classifier
//!
//! [`WeatherClassifier`] is immutable after construction and holds no per-call
//! state, so a single instance can be shared freely across threads.

use std::sync::OnceLock;

use rayon::prelude::*;
use skycast_core::errors::InvalidInputError;
use skycast_core::models::{ClassificationResult, Observation, ObservationInput};
use tracing::debug;

use crate::config::{ClassificationConfig, ConfigError};
use crate::scoreboard::ScoreBoard;
use crate::trace::ClassificationReport;

static DEFAULT_CLASSIFIER: OnceLock<WeatherClassifier> = OnceLock::new();

/// Rule-based weather classifier
#[derive(Debug, Clone, Default)]
pub struct WeatherClassifier {
    config: ClassificationConfig,
}

impl WeatherClassifier {
    /// Create a classifier from a validated rule set
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the rule set fails validation
    pub fn new(config: ClassificationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Shared classifier using the default rule set
    #[must_use]
    pub fn global() -> &'static Self {
        DEFAULT_CLASSIFIER.get_or_init(Self::default)
    }

    /// Rule set in use
    #[must_use]
    pub const fn config(&self) -> &ClassificationConfig {
        &self.config
    }

    /// Score every category without selecting a winner
    ///
    /// # Errors
    ///
    /// Returns `InvalidInputError::NotANumber` if any reading is NaN
    pub fn score(&self, observation: &Observation) -> Result<ScoreBoard, InvalidInputError> {
        observation.validate()?;
        Ok(ScoreBoard::tally(&self.config, observation))
    }

    /// Classify an observation
    ///
    /// # Errors
    ///
    /// Returns `InvalidInputError::NotANumber` if any reading is NaN
    pub fn classify(
        &self,
        observation: &Observation,
    ) -> Result<ClassificationResult, InvalidInputError> {
        let board = self.score(observation)?;
        let result = board.result();

        debug!(
            category = result.category.as_str(),
            confidence = result.confidence,
            contenders = board.contenders().len(),
            "Observation classified"
        );

        Ok(result)
    }

    /// Check an observation for completeness, then classify it
    ///
    /// # Errors
    ///
    /// Returns `InvalidInputError::MissingFields` naming every absent reading,
    /// or `InvalidInputError::NotANumber` if any reading is NaN
    pub fn classify_input(
        &self,
        input: &ObservationInput,
    ) -> Result<ClassificationResult, InvalidInputError> {
        let observation = Observation::try_from(*input)?;
        self.classify(&observation)
    }

    /// Classify an observation and report the evidence for the decision
    ///
    /// The report's `result` is always identical to [`Self::classify`].
    ///
    /// # Errors
    ///
    /// Returns `InvalidInputError::NotANumber` if any reading is NaN
    pub fn explain(
        &self,
        observation: &Observation,
    ) -> Result<ClassificationReport, InvalidInputError> {
        observation.validate()?;
        Ok(ClassificationReport::build(&self.config, observation))
    }

    /// Classify many independent observations in parallel
    ///
    /// Results are returned in input order; an invalid observation only
    /// affects its own entry.
    #[must_use]
    pub fn classify_batch(
        &self,
        observations: &[Observation],
    ) -> Vec<Result<ClassificationResult, InvalidInputError>> {
        observations
            .par_iter()
            .map(|observation| self.classify(observation))
            .collect()
    }
}

/// Classify an observation with the default rule set
///
/// # Errors
///
/// Returns `InvalidInputError::NotANumber` if any reading is NaN
pub fn classify(observation: &Observation) -> Result<ClassificationResult, InvalidInputError> {
    WeatherClassifier::global().classify(observation)
}

/// Check an observation for completeness, then classify it with the default rule set
///
/// # Errors
///
/// Returns `InvalidInputError` if a reading is missing or NaN
pub fn classify_input(input: &ObservationInput) -> Result<ClassificationResult, InvalidInputError> {
    WeatherClassifier::global().classify_input(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use skycast_core::models::ObservationField;

    #[test]
    fn test_nan_reading_rejected_before_scoring() {
        let observation = Observation::new(20.0, f64::NAN, 1010.0, 5.0);
        assert_eq!(
            classify(&observation),
            Err(InvalidInputError::NotANumber {
                field: ObservationField::Humidity
            })
        );
    }

    #[test]
    fn test_custom_config_must_validate() {
        let mut config = ClassificationConfig::default();
        config.sunny.rules[1].weight = -0.1;
        assert!(WeatherClassifier::new(config).is_err());
    }

    #[test]
    fn test_classifier_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<WeatherClassifier>();
    }
}
