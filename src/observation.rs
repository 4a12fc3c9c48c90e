// ABOUTME: Observation source adapter turning JSON payloads into validated observations
// ABOUTME: Distinguishes missing readings from non-numeric ones before classification
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! JSON observation parsing
//!
//! Payloads look like
//! `{ "temperature": 72, "humidity": 65, "pressure": 1012, "windSpeed": 8 }`.
//! `wind_speed` is accepted in place of `windSpeed`. Absent and `null`
//! readings are reported together as missing; any other non-number is
//! reported as not a number.

use serde_json::{Map, Value};

use crate::errors::{AppError, AppResult, InvalidInputError};
use crate::models::{Observation, ObservationField, ObservationInput};

/// Snake-case alias accepted for a field, if any
const fn alias(field: ObservationField) -> Option<&'static str> {
    match field {
        ObservationField::WindSpeed => Some("wind_speed"),
        _ => None,
    }
}

/// Raw JSON value for a field, honoring aliases; `null` counts as absent
fn lookup(object: &Map<String, Value>, field: ObservationField) -> Option<&Value> {
    object
        .get(field.as_str())
        .or_else(|| alias(field).and_then(|name| object.get(name)))
        .filter(|value| !value.is_null())
}

/// Convert a JSON object into a complete observation
///
/// # Errors
///
/// Returns `InvalidInputError::MissingFields` naming every absent reading,
/// otherwise `InvalidInputError::NotANumber` for the first non-numeric one
pub fn observation_from_object(
    object: &Map<String, Value>,
) -> Result<Observation, InvalidInputError> {
    merge_observation(object, &ObservationInput::default())
}

/// Combine a JSON object with readings supplied out of band
///
/// Readings present in `overrides` win over the object's values; this is how
/// command-line flags fill in or replace fields of an input file.
///
/// # Errors
///
/// Same as [`observation_from_object`]
pub fn merge_observation(
    object: &Map<String, Value>,
    overrides: &ObservationInput,
) -> Result<Observation, InvalidInputError> {
    let missing: Vec<ObservationField> = ObservationField::ALL
        .into_iter()
        .filter(|field| overrides.get(*field).is_none() && lookup(object, *field).is_none())
        .collect();
    if !missing.is_empty() {
        return Err(InvalidInputError::MissingFields { fields: missing });
    }

    let mut input = ObservationInput::default();
    for field in ObservationField::ALL {
        let reading = match overrides.get(field) {
            Some(reading) => reading,
            None => lookup(object, field)
                .and_then(Value::as_f64)
                .ok_or(InvalidInputError::NotANumber { field })?,
        };
        match field {
            ObservationField::Temperature => input.temperature = Some(reading),
            ObservationField::Humidity => input.humidity = Some(reading),
            ObservationField::Pressure => input.pressure = Some(reading),
            ObservationField::WindSpeed => input.wind_speed = Some(reading),
        }
    }

    Observation::try_from(input)
}

/// Convert a JSON value into a complete observation
///
/// # Errors
///
/// Returns `AppError` with `INVALID_FORMAT` if the value is not an object,
/// otherwise the mapped [`InvalidInputError`]
pub fn observation_from_value(value: &Value) -> AppResult<Observation> {
    let object = value
        .as_object()
        .ok_or_else(|| AppError::invalid_format("Observation payload must be a JSON object"))?;
    Ok(observation_from_object(object)?)
}

/// Parse a JSON document into a complete observation
///
/// # Errors
///
/// Returns `AppError` if the document is not valid JSON or not a complete observation
pub fn parse_observation(json: &str) -> AppResult<Observation> {
    let value: Value = serde_json::from_str(json)
        .map_err(|e| AppError::invalid_format(format!("Invalid observation JSON: {e}")))?;
    observation_from_value(&value)
}
