// ABOUTME: Default rule thresholds and weights for weather classification
// ABOUTME: Organized by category so each rule group reads as one table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Default classifier constants
//!
//! Temperatures and wind speeds share the caller's unit system. Humidity is a
//! percentage and pressure is in hPa. Every comparison is strict.

/// Service identifiers used in structured logs
pub mod service_names {
    /// Application service name
    pub const SKYCAST: &str = "skycast";
}

/// Rule weights shared by the rule groups
pub mod rule_weights {
    /// Strong signal
    pub const STRONG: f64 = 0.3;
    /// Supporting signal
    pub const SUPPORTING: f64 = 0.2;
}

/// Upper bound on reported confidence
pub const MAX_CONFIDENCE: f64 = 1.0;

/// Sunny: warm, dry, high pressure, calm
pub mod sunny {
    /// Temperature must exceed this
    pub const MIN_TEMPERATURE: f64 = 25.0;
    /// Humidity must stay below this
    pub const MAX_HUMIDITY: f64 = 60.0;
    /// Pressure must exceed this (hPa)
    pub const MIN_PRESSURE: f64 = 1015.0;
    /// Wind speed must stay below this
    pub const MAX_WIND_SPEED: f64 = 15.0;
}

/// Rainy: humid, low pressure, cool, windy
pub mod rainy {
    /// Humidity must exceed this
    pub const MIN_HUMIDITY: f64 = 70.0;
    /// Pressure must stay below this (hPa)
    pub const MAX_PRESSURE: f64 = 1010.0;
    /// Temperature must stay below this
    pub const MAX_TEMPERATURE: f64 = 20.0;
    /// Wind speed must exceed this
    pub const MIN_WIND_SPEED: f64 = 20.0;
}

/// Cloudy: open intervals around mid-range readings
pub mod cloudy {
    /// Humidity interval (exclusive)
    pub const HUMIDITY: (f64, f64) = (60.0, 80.0);
    /// Pressure interval in hPa (exclusive)
    pub const PRESSURE: (f64, f64) = (1005.0, 1015.0);
    /// Temperature interval (exclusive)
    pub const TEMPERATURE: (f64, f64) = (15.0, 25.0);
    /// Wind speed interval (exclusive)
    pub const WIND_SPEED: (f64, f64) = (10.0, 25.0);
}

/// Partly cloudy: open intervals around mild readings
pub mod partly_cloudy {
    /// Humidity interval (exclusive)
    pub const HUMIDITY: (f64, f64) = (50.0, 70.0);
    /// Pressure interval in hPa (exclusive)
    pub const PRESSURE: (f64, f64) = (1010.0, 1020.0);
    /// Temperature interval (exclusive)
    pub const TEMPERATURE: (f64, f64) = (20.0, 30.0);
    /// Wind speed interval (exclusive)
    pub const WIND_SPEED: (f64, f64) = (5.0, 20.0);
}
