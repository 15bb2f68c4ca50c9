//! WebAssembly module for the Fire & Weather Dashboard
//!
//! Provides client-side computation for:
//! - Fire risk gauge classification
//! - Weather icon selection
//! - Fire incident severity tiers
//! - Seed data for both dashboard screens

use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::fixtures;
pub use shared::models::*;
pub use shared::types::*;
pub use shared::validation::*;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    // Set up panic hook for better error messages in browser console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Gauge fill percentage for a risk label
#[wasm_bindgen]
pub fn risk_gauge_percent(level: &str) -> Result<i32, JsValue> {
    let level: RiskLevel = level
        .parse()
        .map_err(|e: ClassifyError| JsValue::from_str(&e.to_string()))?;
    Ok(classify_risk(level).gauge_percent)
}

/// Full gauge descriptor for a risk label, as JSON
#[wasm_bindgen]
pub fn classify_risk_label(level: &str) -> Result<String, JsValue> {
    let level: RiskLevel = level
        .parse()
        .map_err(|e: ClassifyError| JsValue::from_str(&e.to_string()))?;
    let descriptor = classify_risk(level);
    serde_json::to_string(&descriptor).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Icon category for a condition description and precipitation probability
#[wasm_bindgen]
pub fn weather_icon(condition: &str, precipitation_percent: i32) -> String {
    format!("{}", select_weather_icon(condition, precipitation_percent))
}

/// Severity tier for a fire incident's status and containment figure
#[wasm_bindgen]
pub fn fire_severity(status: &str, containment: &str) -> Result<String, JsValue> {
    let severity = classify_fire_severity(status, containment)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(format!("{}", severity))
}

/// Border color token for a fire incident card
#[wasm_bindgen]
pub fn fire_severity_color(status: &str, containment: &str) -> Result<String, JsValue> {
    let severity = classify_fire_severity(status, containment)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(severity.color_token().to_string())
}

/// Active fire incidents for the fire screen, as JSON
#[wasm_bindgen]
pub fn active_fires_json() -> Result<String, JsValue> {
    serde_json::to_string(&fixtures::active_fires()).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Regional weather snapshots for the weather screen, as JSON
#[wasm_bindgen]
pub fn regional_weather_json() -> Result<String, JsValue> {
    serde_json::to_string(&fixtures::regional_weather())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// AI prediction payload for the weather screen, as JSON
#[wasm_bindgen]
pub fn prediction_dataset_json() -> Result<String, JsValue> {
    serde_json::to_string(&fixtures::prediction_dataset())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Current prediction for a location (falling back to the first covered
/// location), as JSON
#[wasm_bindgen]
pub fn prediction_for_location(location: &str) -> Result<String, JsValue> {
    let dataset = fixtures::prediction_dataset();
    let prediction = dataset
        .prediction_for(location)
        .ok_or_else(|| JsValue::from_str("No predictions available"))?;
    serde_json::to_string(prediction).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Fire-safety tips for the fire screen, as JSON
#[wasm_bindgen]
pub fn fire_safety_tips_json() -> Result<String, JsValue> {
    serde_json::to_string(fixtures::FIRE_SAFETY_TIPS)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
