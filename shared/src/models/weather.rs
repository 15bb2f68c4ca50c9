//! Regional weather models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{CompassPoint, GeoCoordinates};

/// A location's current weather snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionalWeather {
    /// Lookup key, e.g. "mangaluru"
    pub key: String,
    /// Display name, e.g. "Mangaluru, Karnataka"
    pub location_name: String,
    pub location: GeoCoordinates,
    pub temperature_celsius: Decimal,
    pub feels_like_celsius: Decimal,
    pub condition: String,
    pub rainfall_mm: Decimal,
    pub humidity_percent: i32,
    pub wind_speed_kmh: Decimal,
    pub wind_direction: CompassPoint,
    pub pressure_hpa: i32,
    pub forecast: Vec<DailyForecast>,
    pub alerts: Vec<WeatherAlert>,
}

impl RegionalWeather {
    /// Icon category for the current conditions. Rainfall depth is reported
    /// in mm; the icon thresholds apply to precipitation probability, which
    /// today's forecast entry carries.
    pub fn icon(&self) -> WeatherIconKey {
        match self.forecast.first() {
            Some(today) => select_weather_icon(&self.condition, today.precipitation_percent),
            None => select_weather_icon(&self.condition, 0),
        }
    }
}

/// One day in the five-day forecast strip
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyForecast {
    /// Label as displayed, e.g. "Today", "Tomorrow", "Wednesday"
    pub day: String,
    pub temp_celsius: i32,
    pub condition: String,
    pub precipitation_percent: i32,
    pub humidity_percent: i32,
}

impl DailyForecast {
    /// Icon category for this forecast day
    pub fn icon(&self) -> WeatherIconKey {
        select_weather_icon(&self.condition, self.precipitation_percent)
    }
}

/// An issued weather alert
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherAlert {
    pub title: String,
    pub description: String,
    pub severity: AlertSeverity,
    pub issued_at: DateTime<Utc>,
}

/// Severity scale for issued weather alerts
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AlertSeverity {
    High,
    Moderate,
    Low,
}

impl std::fmt::Display for AlertSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlertSeverity::High => write!(f, "High"),
            AlertSeverity::Moderate => write!(f, "Moderate"),
            AlertSeverity::Low => write!(f, "Low"),
        }
    }
}

/// Icon category shown for a weather observation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WeatherIconKey {
    Thunderstorm,
    Snow,
    HeavyRain,
    Cloudy,
    Clear,
}

impl std::fmt::Display for WeatherIconKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WeatherIconKey::Thunderstorm => write!(f, "Thunderstorm"),
            WeatherIconKey::Snow => write!(f, "Snow"),
            WeatherIconKey::HeavyRain => write!(f, "Heavy Rain"),
            WeatherIconKey::Cloudy => write!(f, "Cloudy"),
            WeatherIconKey::Clear => write!(f, "Clear"),
        }
    }
}

/// Choose the display icon for a condition description and precipitation
/// probability. Keyword matches win over the precipitation thresholds, and
/// the thresholds are strict: exactly 70% falls to Cloudy, exactly 30% to
/// Clear.
pub fn select_weather_icon(condition: &str, precipitation_percent: i32) -> WeatherIconKey {
    let condition = condition.to_lowercase();
    if condition.contains("thunderstorm") {
        WeatherIconKey::Thunderstorm
    } else if condition.contains("snow") {
        WeatherIconKey::Snow
    } else if precipitation_percent > 70 {
        WeatherIconKey::HeavyRain
    } else if precipitation_percent > 30 {
        WeatherIconKey::Cloudy
    } else {
        WeatherIconKey::Clear
    }
}
