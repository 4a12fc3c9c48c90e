// ABOUTME: Observation validation errors raised before any rule is evaluated
// ABOUTME: Single error kind covering missing and non-numeric readings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::models::ObservationField;

/// An observation could not be classified because it is incomplete or non-numeric
///
/// No classification result is ever produced alongside this error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidInputError {
    /// One or more readings are absent
    #[error("Missing required weather parameters: {}", join_fields(.fields))]
    MissingFields {
        /// Absent fields, in canonical field order
        fields: Vec<ObservationField>,
    },

    /// A reading is present but is not a number
    #[error("Weather parameter '{field}' is not a number")]
    NotANumber {
        /// Field holding the NaN value
        field: ObservationField,
    },
}

impl InvalidInputError {
    /// Fields implicated by this error
    #[must_use]
    pub fn fields(&self) -> Vec<ObservationField> {
        match self {
            Self::MissingFields { fields } => fields.clone(),
            Self::NotANumber { field } => vec![*field],
        }
    }
}

fn join_fields(fields: &[ObservationField]) -> String {
    fields
        .iter()
        .map(ObservationField::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_message_lists_every_field() {
        let error = InvalidInputError::MissingFields {
            fields: vec![ObservationField::Pressure, ObservationField::WindSpeed],
        };
        assert_eq!(
            error.to_string(),
            "Missing required weather parameters: pressure, windSpeed"
        );
    }

    #[test]
    fn test_not_a_number_message() {
        let error = InvalidInputError::NotANumber {
            field: ObservationField::Humidity,
        };
        assert_eq!(error.to_string(), "Weather parameter 'humidity' is not a number");
        assert_eq!(error.fields(), vec![ObservationField::Humidity]);
    }
}
