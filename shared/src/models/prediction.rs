//! AI forecast models and ensemble insights

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{select_weather_icon, WeatherIconKey};
use crate::types::{CompassPoint, TemperatureRange};

/// Profile of one forecast model in the ensemble
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelProfile {
    pub name: String,
    pub description: String,
    pub specialization: String,
    /// Historical accuracy where measured
    pub accuracy_percent: Option<i32>,
}

/// One model-generated regional prediction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionalPrediction {
    pub location: String,
    pub region: String,
    /// Free-text conditions summary
    pub summary: String,
    pub confidence_percent: i32,
    pub temperature: TemperatureRange,
    pub precipitation_percent: i32,
    pub humidity_percent: i32,
    pub wind_speed_kmh: Decimal,
    pub wind_direction: CompassPoint,
    pub alerts: Vec<String>,
    pub model: ModelProfile,
    pub updated_at: DateTime<Utc>,
    pub forecast_date: NaiveDate,
}

impl RegionalPrediction {
    /// Icon category for this prediction's conditions
    pub fn icon(&self) -> WeatherIconKey {
        select_weather_icon(&self.summary, self.precipitation_percent)
    }
}

/// Aggregate metadata for the forecasting ensemble
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelInsights {
    pub primary_model: ModelProfile,
    /// Historical records analyzed during training
    pub data_points: u64,
    pub confidence_overall_percent: i32,
    pub last_trained: DateTime<Utc>,
    pub key_factors: Vec<String>,
}

/// The full prediction payload for the weather intelligence screen
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionDataset {
    pub current: Vec<RegionalPrediction>,
    /// Multi-day outlook, ordered by forecast date
    pub forecast: Vec<RegionalPrediction>,
    pub insights: ModelInsights,
    pub generated_at: DateTime<Utc>,
}

impl PredictionDataset {
    /// Current prediction for a location, falling back to the first entry
    /// when the location is not covered
    pub fn prediction_for(&self, location: &str) -> Option<&RegionalPrediction> {
        self.current
            .iter()
            .find(|p| p.location == location)
            .or_else(|| self.current.first())
    }
}
