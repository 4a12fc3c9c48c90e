// ABOUTME: Atmospheric observation models consumed by the classifier
// ABOUTME: Validates optional boundary input into complete, numeric observations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::InvalidInputError;

/// The four readings an observation is made of
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum ObservationField {
    /// Air temperature in the caller's unit system
    Temperature,
    /// Relative humidity percentage
    Humidity,
    /// Barometric pressure in hPa
    Pressure,
    /// Wind speed in the caller's unit system
    WindSpeed,
}

impl ObservationField {
    /// All fields in the order they are validated and reported
    pub const ALL: [Self; 4] = [
        Self::Temperature,
        Self::Humidity,
        Self::Pressure,
        Self::WindSpeed,
    ];

    /// Wire name of the field
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Temperature => "temperature",
            Self::Humidity => "humidity",
            Self::Pressure => "pressure",
            Self::WindSpeed => "windSpeed",
        }
    }
}

impl fmt::Display for ObservationField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A complete set of atmospheric readings
///
/// Units are fixed by the caller: temperature and wind speed must come from
/// the same unit system (for example Fahrenheit and mph). Values are not
/// range-checked; out-of-range readings simply fail the classifier's rules.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Observation {
    /// Air temperature
    pub temperature: f64,
    /// Relative humidity percentage, expected in [0, 100]
    pub humidity: f64,
    /// Barometric pressure in hPa, realistically around [950, 1050]
    pub pressure: f64,
    /// Wind speed
    #[serde(alias = "wind_speed")]
    pub wind_speed: f64,
}

impl Observation {
    /// Create an observation from its four readings
    #[must_use]
    pub const fn new(temperature: f64, humidity: f64, pressure: f64, wind_speed: f64) -> Self {
        Self {
            temperature,
            humidity,
            pressure,
            wind_speed,
        }
    }

    /// Read a single field
    #[must_use]
    pub const fn get(&self, field: ObservationField) -> f64 {
        match field {
            ObservationField::Temperature => self.temperature,
            ObservationField::Humidity => self.humidity,
            ObservationField::Pressure => self.pressure,
            ObservationField::WindSpeed => self.wind_speed,
        }
    }

    /// Ensure every reading is a number
    ///
    /// Infinite values are accepted; only NaN is rejected.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInputError::NotANumber` naming the first NaN field
    pub fn validate(&self) -> Result<(), InvalidInputError> {
        ObservationField::ALL
            .into_iter()
            .find(|field| self.get(*field).is_nan())
            .map_or(Ok(()), |field| Err(InvalidInputError::NotANumber { field }))
    }
}

/// Observation as received from an observation source, with every field optional
///
/// JSON `null` and absent keys both deserialize to `None`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ObservationInput {
    /// Air temperature
    pub temperature: Option<f64>,
    /// Relative humidity percentage
    pub humidity: Option<f64>,
    /// Barometric pressure in hPa
    pub pressure: Option<f64>,
    /// Wind speed
    #[serde(alias = "wind_speed")]
    pub wind_speed: Option<f64>,
}

impl ObservationInput {
    /// Read a single optional field
    #[must_use]
    pub const fn get(&self, field: ObservationField) -> Option<f64> {
        match field {
            ObservationField::Temperature => self.temperature,
            ObservationField::Humidity => self.humidity,
            ObservationField::Pressure => self.pressure,
            ObservationField::WindSpeed => self.wind_speed,
        }
    }

    /// Fields that are absent, in canonical field order
    #[must_use]
    pub fn missing_fields(&self) -> Vec<ObservationField> {
        ObservationField::ALL
            .into_iter()
            .filter(|field| self.get(*field).is_none())
            .collect()
    }
}

impl From<Observation> for ObservationInput {
    fn from(observation: Observation) -> Self {
        Self {
            temperature: Some(observation.temperature),
            humidity: Some(observation.humidity),
            pressure: Some(observation.pressure),
            wind_speed: Some(observation.wind_speed),
        }
    }
}

impl TryFrom<ObservationInput> for Observation {
    type Error = InvalidInputError;

    fn try_from(input: ObservationInput) -> Result<Self, Self::Error> {
        match (
            input.temperature,
            input.humidity,
            input.pressure,
            input.wind_speed,
        ) {
            (Some(temperature), Some(humidity), Some(pressure), Some(wind_speed)) => {
                let observation = Self::new(temperature, humidity, pressure, wind_speed);
                observation.validate()?;
                Ok(observation)
            }
            _ => Err(InvalidInputError::MissingFields {
                fields: input.missing_fields(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_readings_are_present() {
        let input = ObservationInput {
            temperature: Some(0.0),
            humidity: Some(0.0),
            pressure: Some(0.0),
            wind_speed: Some(0.0),
        };
        assert!(input.missing_fields().is_empty());
        assert!(Observation::try_from(input).is_ok());
    }

    #[test]
    fn test_missing_fields_reported_in_field_order() {
        let input = ObservationInput {
            temperature: Some(20.0),
            ..ObservationInput::default()
        };
        assert_eq!(
            input.missing_fields(),
            vec![
                ObservationField::Humidity,
                ObservationField::Pressure,
                ObservationField::WindSpeed
            ]
        );
    }

    #[test]
    fn test_infinite_reading_is_well_formed() {
        let observation = Observation::new(f64::INFINITY, 50.0, 1000.0, f64::NEG_INFINITY);
        assert!(observation.validate().is_ok());
    }
}
