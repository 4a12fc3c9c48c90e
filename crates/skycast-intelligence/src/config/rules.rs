// ABOUTME: Weather classification rule set configuration
// ABOUTME: Defines per-category rule groups, threshold conditions, defaults, and validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Rule Set Configuration
//!
//! Each category owns a [`RuleGroup`]. A [`Rule`] compares one observation
//! field against a [`Condition`] and contributes its weight when the condition
//! holds. The default configuration is the canonical classification table.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use skycast_core::constants::{
    cloudy, partly_cloudy, rainy,
    rule_weights::{STRONG, SUPPORTING},
    sunny,
};
use skycast_core::models::{Category, Observation, ObservationField};

use super::ConfigError;

/// Threshold test applied to a single reading; all comparisons are strict
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Condition {
    /// Reading must be greater than `value`
    Above {
        /// Exclusive lower bound
        value: f64,
    },
    /// Reading must be less than `value`
    Below {
        /// Exclusive upper bound
        value: f64,
    },
    /// Reading must lie strictly between `lower` and `upper`
    Between {
        /// Exclusive lower bound
        lower: f64,
        /// Exclusive upper bound
        upper: f64,
    },
}

impl Condition {
    /// Whether `reading` satisfies this condition
    #[must_use]
    pub fn matches(&self, reading: f64) -> bool {
        match *self {
            Self::Above { value } => reading > value,
            Self::Below { value } => reading < value,
            Self::Between { lower, upper } => reading > lower && reading < upper,
        }
    }

    /// Create a `Between` condition from a `(lower, upper)` pair
    #[must_use]
    pub const fn between((lower, upper): (f64, f64)) -> Self {
        Self::Between { lower, upper }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Above { value } => write!(f, "> {value}"),
            Self::Below { value } => write!(f, "< {value}"),
            Self::Between { lower, upper } => write!(f, "between {lower} and {upper}"),
        }
    }
}

/// One weighted threshold check
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    /// Observation field the rule reads
    pub metric: ObservationField,
    /// Threshold test
    pub condition: Condition,
    /// Score contributed when the condition holds (0.0-1.0)
    pub weight: f64,
}

impl Rule {
    /// Create a rule
    #[must_use]
    pub const fn new(metric: ObservationField, condition: Condition, weight: f64) -> Self {
        Self {
            metric,
            condition,
            weight,
        }
    }

    /// Whether the rule fires for `observation`
    #[must_use]
    pub fn fires(&self, observation: &Observation) -> bool {
        self.condition.matches(observation.get(self.metric))
    }

    /// Weight contributed to the category score for `observation`
    #[must_use]
    pub fn contribution(&self, observation: &Observation) -> f64 {
        if self.fires(observation) {
            self.weight
        } else {
            0.0
        }
    }

    fn validate(&self, category: Category, index: usize) -> Result<(), ConfigError> {
        if !self.weight.is_finite() || !(0.0..=1.0).contains(&self.weight) {
            return Err(ConfigError::InvalidWeight {
                category,
                index,
                weight: self.weight,
            });
        }

        match self.condition {
            Condition::Above { value } | Condition::Below { value } if !value.is_finite() => {
                Err(ConfigError::NonFiniteThreshold { category, index })
            }
            Condition::Between { lower, upper } if !lower.is_finite() || !upper.is_finite() => {
                Err(ConfigError::NonFiniteThreshold { category, index })
            }
            Condition::Between { lower, upper } if lower >= upper => {
                Err(ConfigError::EmptyInterval {
                    category,
                    index,
                    lower,
                    upper,
                })
            }
            _ => Ok(()),
        }
    }
}

/// Rules that contribute to a single category
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleGroup {
    /// Rules evaluated in order; weights are summed in this order
    pub rules: Vec<Rule>,
}

impl RuleGroup {
    /// Create a group from its rules
    #[must_use]
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Sum of the weights of every rule that fires, accumulated in rule order
    #[must_use]
    pub fn score(&self, observation: &Observation) -> f64 {
        self.rules
            .iter()
            .fold(0.0, |total, rule| total + rule.contribution(observation))
    }

    /// Highest score the group can produce
    #[must_use]
    pub fn max_score(&self) -> f64 {
        self.rules
            .iter()
            .fold(0.0, |total, rule| total + rule.weight)
    }
}

/// Complete classification rule set, one group per category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassificationConfig {
    /// Rules scoring `Sunny`
    pub sunny: RuleGroup,
    /// Rules scoring `Rainy`
    pub rainy: RuleGroup,
    /// Rules scoring `Cloudy`
    pub cloudy: RuleGroup,
    /// Rules scoring `PartlyCloudy`
    pub partly_cloudy: RuleGroup,
}

impl Default for ClassificationConfig {
    fn default() -> Self {
        use ObservationField::{Humidity, Pressure, Temperature, WindSpeed};

        Self {
            sunny: RuleGroup::new(vec![
                Rule::new(
                    Temperature,
                    Condition::Above {
                        value: sunny::MIN_TEMPERATURE,
                    },
                    STRONG,
                ),
                Rule::new(
                    Humidity,
                    Condition::Below {
                        value: sunny::MAX_HUMIDITY,
                    },
                    SUPPORTING,
                ),
                Rule::new(
                    Pressure,
                    Condition::Above {
                        value: sunny::MIN_PRESSURE,
                    },
                    SUPPORTING,
                ),
                Rule::new(
                    WindSpeed,
                    Condition::Below {
                        value: sunny::MAX_WIND_SPEED,
                    },
                    STRONG,
                ),
            ]),
            rainy: RuleGroup::new(vec![
                Rule::new(
                    Humidity,
                    Condition::Above {
                        value: rainy::MIN_HUMIDITY,
                    },
                    STRONG,
                ),
                Rule::new(
                    Pressure,
                    Condition::Below {
                        value: rainy::MAX_PRESSURE,
                    },
                    STRONG,
                ),
                Rule::new(
                    Temperature,
                    Condition::Below {
                        value: rainy::MAX_TEMPERATURE,
                    },
                    SUPPORTING,
                ),
                Rule::new(
                    WindSpeed,
                    Condition::Above {
                        value: rainy::MIN_WIND_SPEED,
                    },
                    SUPPORTING,
                ),
            ]),
            cloudy: RuleGroup::new(vec![
                Rule::new(Humidity, Condition::between(cloudy::HUMIDITY), STRONG),
                Rule::new(Pressure, Condition::between(cloudy::PRESSURE), STRONG),
                Rule::new(
                    Temperature,
                    Condition::between(cloudy::TEMPERATURE),
                    SUPPORTING,
                ),
                Rule::new(
                    WindSpeed,
                    Condition::between(cloudy::WIND_SPEED),
                    SUPPORTING,
                ),
            ]),
            partly_cloudy: RuleGroup::new(vec![
                Rule::new(
                    Humidity,
                    Condition::between(partly_cloudy::HUMIDITY),
                    STRONG,
                ),
                Rule::new(
                    Pressure,
                    Condition::between(partly_cloudy::PRESSURE),
                    STRONG,
                ),
                Rule::new(
                    Temperature,
                    Condition::between(partly_cloudy::TEMPERATURE),
                    SUPPORTING,
                ),
                Rule::new(
                    WindSpeed,
                    Condition::between(partly_cloudy::WIND_SPEED),
                    SUPPORTING,
                ),
            ]),
        }
    }
}

impl ClassificationConfig {
    /// Rule group owned by `category`
    #[must_use]
    pub const fn group(&self, category: Category) -> &RuleGroup {
        match category {
            Category::Sunny => &self.sunny,
            Category::Rainy => &self.rainy,
            Category::Cloudy => &self.cloudy,
            Category::PartlyCloudy => &self.partly_cloudy,
        }
    }

    /// Rule groups paired with their category, in canonical order
    pub fn groups(&self) -> impl Iterator<Item = (Category, &RuleGroup)> {
        Category::ALL
            .into_iter()
            .map(move |category| (category, self.group(category)))
    }

    /// Total number of rules across all groups
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.groups().map(|(_, group)| group.rules.len()).sum()
    }

    /// Validate weights and thresholds
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for the first rule with a weight outside [0, 1],
    /// a non-finite threshold, or an empty interval
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (category, group) in self.groups() {
            for (index, rule) in group.rules.iter().enumerate() {
                rule.validate(category, index)?;
            }
        }
        Ok(())
    }

    /// Parse and validate a rule set from JSON
    ///
    /// Groups missing from the document keep their default rules.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed JSON or a validation error
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a rule set from a JSON file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Io` if the file cannot be read, otherwise the
    /// errors of [`Self::from_json_str`]
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }
}
