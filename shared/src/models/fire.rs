//! Fire risk and incident models

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Errors raised by the classification core
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClassifyError {
    /// Risk label outside the enumerated set
    #[error("unknown risk level: {0}")]
    UnknownRiskLevel(String),

    /// Containment figure is not a "%"-suffixed integer
    #[error("invalid containment percentage: {0}")]
    InvalidContainment(String),
}

/// Regional fire danger rating
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
    Extreme,
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "Low"),
            RiskLevel::Moderate => write!(f, "Moderate"),
            RiskLevel::High => write!(f, "High"),
            RiskLevel::Extreme => write!(f, "Extreme"),
        }
    }
}

impl FromStr for RiskLevel {
    type Err = ClassifyError;

    /// Parse a risk label as displayed on the gauge. Labels outside the
    /// enumerated set are a caller error, never a silent default.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Low" => Ok(RiskLevel::Low),
            "Moderate" => Ok(RiskLevel::Moderate),
            "High" => Ok(RiskLevel::High),
            "Extreme" => Ok(RiskLevel::Extreme),
            other => Err(ClassifyError::UnknownRiskLevel(other.to_string())),
        }
    }
}

/// Visual urgency tier backing the risk gauge
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RiskTier {
    Safe,
    Caution,
    Warning,
    Danger,
}

impl RiskTier {
    /// Color token used for the gauge chip and fill
    pub fn color_token(&self) -> &'static str {
        match self {
            RiskTier::Safe => "green",
            RiskTier::Caution => "amber",
            RiskTier::Warning => "orange",
            RiskTier::Danger => "red",
        }
    }
}

impl std::fmt::Display for RiskTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskTier::Safe => write!(f, "Safe"),
            RiskTier::Caution => write!(f, "Caution"),
            RiskTier::Warning => write!(f, "Warning"),
            RiskTier::Danger => write!(f, "Danger"),
        }
    }
}

/// Display-ready descriptor for a risk level
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RiskDescriptor {
    pub level: RiskLevel,
    /// Gauge fill, 0-100
    pub gauge_percent: i32,
    pub tier: RiskTier,
}

/// Map a risk level to its gauge descriptor
pub fn classify_risk(level: RiskLevel) -> RiskDescriptor {
    let (gauge_percent, tier) = match level {
        RiskLevel::Low => (20, RiskTier::Safe),
        RiskLevel::Moderate => (50, RiskTier::Caution),
        RiskLevel::High => (75, RiskTier::Warning),
        RiskLevel::Extreme => (95, RiskTier::Danger),
    };
    RiskDescriptor {
        level,
        gauge_percent,
        tier,
    }
}

/// An active fire incident record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FireIncident {
    pub id: u32,
    pub name: String,
    pub location: String,
    /// Status as reported, e.g. "Active", "Active (New)", "Contained"
    pub status: String,
    pub size_acres: i32,
    /// Containment figure as reported, e.g. "40%"
    pub containment: String,
}

impl FireIncident {
    /// Severity tier for this incident's card border
    pub fn severity(&self) -> Result<IncidentSeverity, ClassifyError> {
        classify_fire_severity(&self.status, &self.containment)
    }
}

/// Visual urgency tier for a fire incident card
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum IncidentSeverity {
    Critical,
    Elevated,
    Controlled,
}

impl IncidentSeverity {
    /// Color token used for the incident card border
    pub fn color_token(&self) -> &'static str {
        match self {
            IncidentSeverity::Critical => "red",
            IncidentSeverity::Elevated => "amber",
            IncidentSeverity::Controlled => "green",
        }
    }
}

impl std::fmt::Display for IncidentSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IncidentSeverity::Critical => write!(f, "Critical"),
            IncidentSeverity::Elevated => write!(f, "Elevated"),
            IncidentSeverity::Controlled => write!(f, "Controlled"),
        }
    }
}

/// Parse a "%"-suffixed containment figure, e.g. "40%" -> 40
pub fn parse_containment_percent(text: &str) -> Result<i32, ClassifyError> {
    let digits = text
        .strip_suffix('%')
        .ok_or_else(|| ClassifyError::InvalidContainment(text.to_string()))?;
    digits
        .parse::<i32>()
        .map_err(|_| ClassifyError::InvalidContainment(text.to_string()))
}

/// Decide the severity tier for a fire incident from its reported status
/// and containment figure. Only a status of exactly "Active" counts as
/// active; variants such as "Active (New)" are treated as controlled.
pub fn classify_fire_severity(
    status: &str,
    containment: &str,
) -> Result<IncidentSeverity, ClassifyError> {
    let contained_percent = parse_containment_percent(containment)?;
    if status == "Active" {
        if contained_percent < 50 {
            Ok(IncidentSeverity::Critical)
        } else {
            Ok(IncidentSeverity::Elevated)
        }
    } else {
        Ok(IncidentSeverity::Controlled)
    }
}
