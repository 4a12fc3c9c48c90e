// ABOUTME: Weather category enumeration produced by the classifier
// ABOUTME: Defines the closed category set, canonical ordering, parsing, and display labels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Weather categories the classifier can output
///
/// The set is closed. Declaration order is the canonical order used for
/// tie-breaking: when two categories share the highest score, the one
/// declared first wins.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    /// Clear, warm, dry conditions
    Sunny,
    /// Humid, low-pressure, cool or windy conditions
    Rainy,
    /// Mid-range humidity and pressure
    Cloudy,
    /// Mild conditions between sunny and cloudy
    #[serde(alias = "Partly Cloudy")]
    PartlyCloudy,
}

impl Category {
    /// All categories in canonical (tie-break) order
    pub const ALL: [Self; 4] = [Self::Sunny, Self::Rainy, Self::Cloudy, Self::PartlyCloudy];

    /// Category reported when no rule fires
    pub const NO_EVIDENCE: Self = Self::Sunny;

    /// Stable identifier, identical to the serialized form
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sunny => "Sunny",
            Self::Rainy => "Rainy",
            Self::Cloudy => "Cloudy",
            Self::PartlyCloudy => "PartlyCloudy",
        }
    }

    /// Human-readable label for presentation
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::PartlyCloudy => "Partly Cloudy",
            other => other.as_str(),
        }
    }

    /// Position of this category in the canonical order
    #[must_use]
    pub const fn canonical_index(&self) -> usize {
        match self {
            Self::Sunny => 0,
            Self::Rainy => 1,
            Self::Cloudy => 2,
            Self::PartlyCloudy => 3,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "sunny" => Ok(Self::Sunny),
            "rainy" => Ok(Self::Rainy),
            "cloudy" => Ok(Self::Cloudy),
            "partlycloudy" => Ok(Self::PartlyCloudy),
            _ => Err(AppError::invalid_input(format!(
                "Unknown weather category: {s}"
            ))),
        }
    }
}
