//! Validation utilities for dashboard data
//!
//! The fixture collections are versioned literals; these checks guard them
//! (and any future replacement data) against out-of-range values.

use rust_decimal::Decimal;

use crate::models::{DailyForecast, RegionalPrediction, RegionalWeather};
use crate::types::GeoCoordinates;

// ============================================================================
// Field Validations
// ============================================================================

/// Validate a percentage field is within 0-100
pub fn validate_percent(value: i32) -> Result<(), &'static str> {
    if !(0..=100).contains(&value) {
        return Err("Percentage must be between 0 and 100");
    }
    Ok(())
}

/// Check whether a precipitation probability makes rain the likely outcome
pub fn is_rain_likely(precipitation_percent: i32) -> bool {
    precipitation_percent >= 50
}

/// Validate one forecast-strip entry
pub fn validate_daily_forecast(forecast: &DailyForecast) -> Result<(), &'static str> {
    validate_percent(forecast.precipitation_percent)?;
    validate_percent(forecast.humidity_percent)?;
    if forecast.day.is_empty() {
        return Err("Forecast day label cannot be empty");
    }
    Ok(())
}

/// Validate a regional weather snapshot and its forecast strip
pub fn validate_snapshot(snapshot: &RegionalWeather) -> Result<(), &'static str> {
    validate_percent(snapshot.humidity_percent)?;
    if snapshot.rainfall_mm < Decimal::ZERO {
        return Err("Rainfall depth cannot be negative");
    }
    for entry in &snapshot.forecast {
        validate_daily_forecast(entry)?;
    }
    Ok(())
}

/// Validate a model-generated prediction
pub fn validate_prediction(prediction: &RegionalPrediction) -> Result<(), &'static str> {
    validate_percent(prediction.confidence_percent)?;
    validate_percent(prediction.precipitation_percent)?;
    validate_percent(prediction.humidity_percent)?;
    if !prediction.temperature.is_valid() {
        return Err("Temperature range minimum exceeds maximum");
    }
    if prediction.wind_speed_kmh < Decimal::ZERO {
        return Err("Wind speed cannot be negative");
    }
    Ok(())
}

/// Validate a multi-day outlook covers strictly increasing dates
pub fn validate_forecast_sequence(forecast: &[RegionalPrediction]) -> Result<(), &'static str> {
    for pair in forecast.windows(2) {
        if pair[1].forecast_date <= pair[0].forecast_date {
            return Err("Forecast dates must be strictly increasing");
        }
    }
    Ok(())
}

// ============================================================================
// Served-Region Validations
// ============================================================================

/// Validate coordinates fall inside the served region (south-west India,
/// approximately 8.0°N to 21.0°N, 70.0°E to 80.0°E)
pub fn validate_region_coordinates(coords: &GeoCoordinates) -> Result<(), &'static str> {
    if coords.latitude < Decimal::from(8) || coords.latitude > Decimal::from(21) {
        return Err("Latitude is outside the served region");
    }
    if coords.longitude < Decimal::from(70) || coords.longitude > Decimal::from(80) {
        return Err("Longitude is outside the served region");
    }
    Ok(())
}
