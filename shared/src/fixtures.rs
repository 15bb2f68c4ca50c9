//! Seed data for the dashboard screens
//!
//! The fire and weather screens render these collections directly. They are
//! versioned literals, not a data-access layer: construction is cheap, the
//! records are immutable once built, and alert issue times are offsets from
//! the construction instant.

use chrono::{Duration, Utc};
use rust_decimal::Decimal;

use crate::models::{
    AlertSeverity, DailyForecast, FireIncident, ModelInsights, ModelProfile, PredictionDataset,
    RegionalPrediction, RegionalWeather, RiskLevel, WeatherAlert,
};
use crate::types::{CompassPoint, GeoCoordinates, TemperatureRange};

/// Fire-safety guidance shown beneath the incident list
pub const FIRE_SAFETY_TIPS: &[&str] = &[
    "Create a defensible space around your home by clearing vegetation.",
    "Have an emergency evacuation plan and practice it with your family.",
    "Keep emergency supplies, important documents, and medications ready to go.",
    "If ordered to evacuate, do so immediately. Don't wait to see how the fire develops.",
];

/// Narrative shown with the current risk gauge
pub const RISK_SUMMARY: &str = "Current conditions indicate a high fire risk in forested regions \
    of Karnataka due to prolonged dry weather, high temperatures, and low humidity. Extreme \
    caution is advised.";

/// Current regional fire risk shown on the fire screen
pub fn current_risk_level() -> RiskLevel {
    RiskLevel::High
}

/// Active fire incidents across the monitored region
pub fn active_fires() -> Vec<FireIncident> {
    vec![
        FireIncident {
            id: 1,
            name: "Bandipur Forest Fire".to_string(),
            location: "Karnataka".to_string(),
            status: "Active".to_string(),
            size_acres: 350,
            containment: "40%".to_string(),
        },
        FireIncident {
            id: 2,
            name: "Nagarahole Tiger Reserve Fire".to_string(),
            location: "Karnataka".to_string(),
            status: "Active (New)".to_string(),
            size_acres: 500,
            containment: "15%".to_string(),
        },
        FireIncident {
            id: 3,
            name: "MM Hills Wildlife Sanctuary Fire".to_string(),
            location: "Karnataka".to_string(),
            status: "Active".to_string(),
            size_acres: 120,
            containment: "75%".to_string(),
        },
    ]
}

/// Weather snapshots for the served locations
pub fn regional_weather() -> Vec<RegionalWeather> {
    vec![mangaluru_weather(), bangalore_weather(), mumbai_weather()]
}

/// Snapshot for one location key, e.g. "mangaluru"
pub fn weather_for(key: &str) -> Option<RegionalWeather> {
    regional_weather().into_iter().find(|w| w.key == key)
}

fn forecast_entry(
    day: &str,
    temp_celsius: i32,
    condition: &str,
    precipitation_percent: i32,
    humidity_percent: i32,
) -> DailyForecast {
    DailyForecast {
        day: day.to_string(),
        temp_celsius,
        condition: condition.to_string(),
        precipitation_percent,
        humidity_percent,
    }
}

fn mangaluru_weather() -> RegionalWeather {
    RegionalWeather {
        key: "mangaluru".to_string(),
        location_name: "Mangaluru, Karnataka".to_string(),
        location: GeoCoordinates::new(Decimal::new(129141, 4), Decimal::new(74856, 3)),
        temperature_celsius: Decimal::from(29),
        feels_like_celsius: Decimal::from(32),
        condition: "Heavy Monsoon Rain".to_string(),
        rainfall_mm: Decimal::from(35),
        humidity_percent: 85,
        wind_speed_kmh: Decimal::from(18),
        wind_direction: CompassPoint::SouthWest,
        pressure_hpa: 1008,
        forecast: vec![
            forecast_entry("Today", 29, "Heavy Rain", 85, 92),
            forecast_entry("Tomorrow", 28, "Thunderstorms", 75, 88),
            forecast_entry("Wednesday", 30, "Scattered Showers", 60, 85),
            forecast_entry("Thursday", 27, "Heavy Rain", 90, 95),
            forecast_entry("Friday", 29, "Light Rain", 50, 80),
        ],
        alerts: vec![
            WeatherAlert {
                title: "Heavy Rainfall Warning".to_string(),
                description: "Heavy rainfall expected in coastal Karnataka over the next 48 \
                    hours. Potential for flash flooding in low-lying areas."
                    .to_string(),
                severity: AlertSeverity::High,
                issued_at: Utc::now() - Duration::hours(2),
            },
            WeatherAlert {
                title: "Thunderstorm Alert".to_string(),
                description: "Severe thunderstorms with lightning expected in Mangaluru and \
                    surrounding areas."
                    .to_string(),
                severity: AlertSeverity::Moderate,
                issued_at: Utc::now() - Duration::hours(5),
            },
        ],
    }
}

fn bangalore_weather() -> RegionalWeather {
    RegionalWeather {
        key: "bangalore".to_string(),
        location_name: "Bangalore, Karnataka".to_string(),
        location: GeoCoordinates::new(Decimal::new(129716, 4), Decimal::new(775946, 4)),
        temperature_celsius: Decimal::from(24),
        feels_like_celsius: Decimal::from(26),
        condition: "Light Rain".to_string(),
        rainfall_mm: Decimal::from(15),
        humidity_percent: 70,
        wind_speed_kmh: Decimal::from(12),
        wind_direction: CompassPoint::NorthEast,
        pressure_hpa: 1010,
        forecast: vec![
            forecast_entry("Today", 24, "Light Rain", 40, 70),
            forecast_entry("Tomorrow", 25, "Partly Cloudy", 20, 65),
            forecast_entry("Wednesday", 26, "Mostly Sunny", 10, 60),
            forecast_entry("Thursday", 25, "Scattered Showers", 30, 68),
            forecast_entry("Friday", 24, "Light Rain", 45, 72),
        ],
        alerts: Vec::new(),
    }
}

fn mumbai_weather() -> RegionalWeather {
    RegionalWeather {
        key: "mumbai".to_string(),
        location_name: "Mumbai, Maharashtra".to_string(),
        location: GeoCoordinates::new(Decimal::new(19076, 3), Decimal::new(728777, 4)),
        temperature_celsius: Decimal::from(31),
        feels_like_celsius: Decimal::from(34),
        condition: "Thunderstorms".to_string(),
        rainfall_mm: Decimal::from(25),
        humidity_percent: 78,
        wind_speed_kmh: Decimal::from(22),
        wind_direction: CompassPoint::SouthWest,
        pressure_hpa: 1005,
        forecast: vec![
            forecast_entry("Today", 31, "Thunderstorms", 65, 78),
            forecast_entry("Tomorrow", 30, "Heavy Rain", 80, 82),
            forecast_entry("Wednesday", 29, "Thunderstorms", 70, 80),
            forecast_entry("Thursday", 30, "Scattered Showers", 50, 75),
            forecast_entry("Friday", 31, "Partly Cloudy", 30, 72),
        ],
        alerts: vec![WeatherAlert {
            title: "Coastal Flooding Alert".to_string(),
            description: "High tides combined with heavy rainfall may cause coastal flooding \
                in low-lying areas of Mumbai."
                .to_string(),
            severity: AlertSeverity::High,
            issued_at: Utc::now() - Duration::hours(3),
        }],
    }
}

/// Models making up the forecasting ensemble
pub fn ensemble_models() -> Vec<ModelProfile> {
    vec![
        model_profile(
            "DeepWeather-CNN",
            "Convolutional Neural Network trained on 50 years of meteorological data",
            "Precipitation patterns and intensity",
            None,
        ),
        model_profile(
            "AtmosLSTM",
            "Long Short-Term Memory network for temporal weather pattern analysis",
            "Temperature and humidity forecasting",
            None,
        ),
        model_profile(
            "GeoTransformer",
            "Transformer-based model incorporating geographical and topographical features",
            "Region-specific weather events",
            None,
        ),
        model_profile(
            "EnsembleClimate",
            "Ensemble model combining multiple prediction algorithms",
            "Overall weather pattern prediction",
            None,
        ),
    ]
}

fn model_profile(
    name: &str,
    description: &str,
    specialization: &str,
    accuracy_percent: Option<i32>,
) -> ModelProfile {
    ModelProfile {
        name: name.to_string(),
        description: description.to_string(),
        specialization: specialization.to_string(),
        accuracy_percent,
    }
}

/// Full prediction payload for the weather intelligence screen
pub fn prediction_dataset() -> PredictionDataset {
    let generated_at = Utc::now();
    let today = generated_at.date_naive();

    let current = vec![
        RegionalPrediction {
            location: "Mangaluru".to_string(),
            region: "Dakshina Kannada".to_string(),
            summary: "Heavy monsoon downpour with frequent lightning and thunder. Waterlogging \
                reported in several low-lying areas. Visibility is reduced."
                .to_string(),
            confidence_percent: 85,
            temperature: TemperatureRange::new(24, 28),
            precipitation_percent: 90,
            humidity_percent: 94,
            wind_speed_kmh: Decimal::from(19),
            wind_direction: CompassPoint::SouthWest,
            alerts: vec![
                "Orange Alert: Forecast of heavy to very heavy rainfall (115-200mm) for \
                    coastal Karnataka over the next 24 hours."
                    .to_string(),
                "High risk of flash floods in low-lying urban areas of Mangaluru and along \
                    riverbanks."
                    .to_string(),
            ],
            model: model_profile(
                "DeepWeather-CNN",
                "Convolutional Neural Network trained on regional data",
                "Coastal weather patterns",
                Some(92),
            ),
            updated_at: generated_at,
            forecast_date: today,
        },
        RegionalPrediction {
            location: "Udupi".to_string(),
            region: "Udupi District".to_string(),
            summary: "Moderate to heavy rainfall with strong winds along the coast. High \
                humidity levels expected."
                .to_string(),
            confidence_percent: 89,
            temperature: TemperatureRange::new(23, 28),
            precipitation_percent: 75,
            humidity_percent: 90,
            wind_speed_kmh: Decimal::from(20),
            wind_direction: CompassPoint::SouthWest,
            alerts: vec!["Strong wind advisory for coastal areas".to_string()],
            model: model_profile(
                "AtmosLSTM",
                "Long Short-Term Memory network for temporal patterns",
                "Rainfall intensity prediction",
                Some(89),
            ),
            updated_at: generated_at,
            forecast_date: today,
        },
        RegionalPrediction {
            location: "Karwar".to_string(),
            region: "Uttara Kannada".to_string(),
            summary: "Heavy rainfall with occasional breaks. Rough sea conditions expected \
                along the coast."
                .to_string(),
            confidence_percent: 87,
            temperature: TemperatureRange::new(24, 30),
            precipitation_percent: 80,
            humidity_percent: 88,
            wind_speed_kmh: Decimal::from(22),
            wind_direction: CompassPoint::SouthWest,
            alerts: vec!["Rough sea warning for fishermen".to_string()],
            model: model_profile(
                "GeoTransformer",
                "Transformer model with geographical features",
                "Coastal weather events",
                Some(87),
            ),
            updated_at: generated_at,
            forecast_date: today,
        },
        RegionalPrediction {
            location: "Bangalore".to_string(),
            region: "Bangalore Urban".to_string(),
            summary: "Partly cloudy with occasional showers. Moderate humidity and mild \
                temperatures."
                .to_string(),
            confidence_percent: 90,
            temperature: TemperatureRange::new(21, 28),
            precipitation_percent: 40,
            humidity_percent: 75,
            wind_speed_kmh: Decimal::from(12),
            wind_direction: CompassPoint::West,
            alerts: Vec::new(),
            model: model_profile(
                "AtmosLSTM",
                "Long Short-Term Memory network for temporal patterns",
                "Urban weather patterns",
                Some(90),
            ),
            updated_at: generated_at,
            forecast_date: today,
        },
        RegionalPrediction {
            location: "Mysuru".to_string(),
            region: "Mysuru District".to_string(),
            summary: "Mild temperatures with light rainfall. Increasing cloud cover expected."
                .to_string(),
            confidence_percent: 88,
            temperature: TemperatureRange::new(22, 29),
            precipitation_percent: 30,
            humidity_percent: 70,
            wind_speed_kmh: Decimal::from(10),
            wind_direction: CompassPoint::West,
            alerts: Vec::new(),
            model: model_profile(
                "GeoTransformer",
                "Transformer model with geographical features",
                "Regional weather patterns",
                Some(88),
            ),
            updated_at: generated_at,
            forecast_date: today,
        },
    ];

    let outlook = [
        ("Heavy monsoon rain", 85, (24, 28), 90, 94, 19, 92),
        ("Continued heavy rain", 80, (24, 29), 85, 92, 18, 87),
        ("Moderate rain with breaks", 75, (25, 29), 65, 88, 16, 82),
        ("Light to moderate showers", 70, (25, 30), 55, 85, 14, 78),
        ("Scattered showers with sunny spells", 70, (25, 31), 40, 75, 10, 72),
    ];
    let forecast = outlook
        .iter()
        .enumerate()
        .map(
            |(offset, &(summary, confidence, (min, max), precipitation, humidity, wind, accuracy))| {
                RegionalPrediction {
                    location: "Mangaluru".to_string(),
                    region: "Dakshina Kannada".to_string(),
                    summary: summary.to_string(),
                    confidence_percent: confidence,
                    temperature: TemperatureRange::new(min, max),
                    precipitation_percent: precipitation,
                    humidity_percent: humidity,
                    wind_speed_kmh: Decimal::from(wind),
                    wind_direction: CompassPoint::SouthWest,
                    alerts: Vec::new(),
                    model: model_profile(
                        "EnsembleClimate",
                        "Ensemble model for forecasting",
                        "Overall prediction",
                        Some(accuracy),
                    ),
                    updated_at: generated_at,
                    forecast_date: today + Duration::days(offset as i64 + 1),
                }
            },
        )
        .collect();

    PredictionDataset {
        current,
        forecast,
        insights: ModelInsights {
            primary_model: model_profile(
                "KarnatakaWeatherNet",
                "Specialized ensemble model for Karnataka coastal regions",
                "Monsoon patterns and coastal weather",
                Some(91),
            ),
            data_points: 1_250_000,
            confidence_overall_percent: 91,
            last_trained: generated_at - Duration::days(7),
            key_factors: vec![
                "Western Ghats orographic effect".to_string(),
                "Arabian Sea moisture transport".to_string(),
                "Coastal convergence zones".to_string(),
                "Monsoon low-pressure systems".to_string(),
                "Sea surface temperature anomalies".to_string(),
                "Upper-level wind patterns".to_string(),
                "Historical precipitation patterns".to_string(),
                "Local topographical features".to_string(),
            ],
        },
        generated_at,
    }
}
