//! Tests for the classification core
//!
//! Covers the risk gauge mapping, weather icon selection, and fire incident
//! severity rules, including the exact boundary behavior the dashboard
//! depends on.

use shared::{
    classify_fire_severity, classify_risk, parse_containment_percent, select_weather_icon,
    ClassifyError, IncidentSeverity, RiskLevel, RiskTier, WeatherIconKey,
};

// =============================================================================
// Risk Gauge Mapping Tests
// Verifies the fixed level -> (gauge percent, tier) table
// =============================================================================

mod risk_classification {
    use super::*;

    #[test]
    fn low_maps_to_safe_twenty() {
        let descriptor = classify_risk(RiskLevel::Low);
        assert_eq!(descriptor.gauge_percent, 20);
        assert_eq!(descriptor.tier, RiskTier::Safe);
    }

    #[test]
    fn moderate_maps_to_caution_fifty() {
        let descriptor = classify_risk(RiskLevel::Moderate);
        assert_eq!(descriptor.gauge_percent, 50);
        assert_eq!(descriptor.tier, RiskTier::Caution);
    }

    #[test]
    fn high_maps_to_warning_seventy_five() {
        let descriptor = classify_risk(RiskLevel::High);
        assert_eq!(descriptor.gauge_percent, 75);
        assert_eq!(descriptor.tier, RiskTier::Warning);
    }

    #[test]
    fn extreme_maps_to_danger_ninety_five() {
        let descriptor = classify_risk(RiskLevel::Extreme);
        assert_eq!(descriptor.gauge_percent, 95);
        assert_eq!(descriptor.tier, RiskTier::Danger);
    }

    #[test]
    fn descriptor_echoes_its_level() {
        for level in [
            RiskLevel::Low,
            RiskLevel::Moderate,
            RiskLevel::High,
            RiskLevel::Extreme,
        ] {
            assert_eq!(classify_risk(level).level, level);
        }
    }

    #[test]
    fn tier_color_tokens() {
        assert_eq!(RiskTier::Safe.color_token(), "green");
        assert_eq!(RiskTier::Caution.color_token(), "amber");
        assert_eq!(RiskTier::Warning.color_token(), "orange");
        assert_eq!(RiskTier::Danger.color_token(), "red");
    }

    #[test]
    fn severity_ordering() {
        assert!(RiskLevel::Low < RiskLevel::Moderate);
        assert!(RiskLevel::Moderate < RiskLevel::High);
        assert!(RiskLevel::High < RiskLevel::Extreme);
    }
}

// =============================================================================
// Risk Label Parsing Tests
// Labels outside the enumerated set must error, never default
// =============================================================================

mod risk_parsing {
    use super::*;

    #[test]
    fn known_labels_round_trip() {
        for level in [
            RiskLevel::Low,
            RiskLevel::Moderate,
            RiskLevel::High,
            RiskLevel::Extreme,
        ] {
            let parsed: RiskLevel = level.to_string().parse().unwrap();
            assert_eq!(parsed, level);
        }
    }

    #[test]
    fn unknown_label_is_rejected() {
        let err = "Severe".parse::<RiskLevel>().unwrap_err();
        assert_eq!(err, ClassifyError::UnknownRiskLevel("Severe".to_string()));
    }

    #[test]
    fn parsing_is_case_sensitive() {
        assert!("low".parse::<RiskLevel>().is_err());
        assert!("HIGH".parse::<RiskLevel>().is_err());
    }

    #[test]
    fn empty_label_is_rejected() {
        assert!("".parse::<RiskLevel>().is_err());
    }
}

// =============================================================================
// Weather Icon Selection Tests
// Keyword matches win over precipitation thresholds; thresholds are strict
// =============================================================================

mod weather_icon {
    use super::*;

    #[test]
    fn thunderstorm_keyword_beats_low_precipitation() {
        assert_eq!(
            select_weather_icon("Severe Thunderstorms", 10),
            WeatherIconKey::Thunderstorm
        );
    }

    #[test]
    fn thunderstorm_keyword_beats_snow_keyword() {
        assert_eq!(
            select_weather_icon("Thunderstorm with snow", 0),
            WeatherIconKey::Thunderstorm
        );
    }

    #[test]
    fn snow_keyword_beats_heavy_precipitation() {
        assert_eq!(select_weather_icon("Snow Flurries", 95), WeatherIconKey::Snow);
    }

    #[test]
    fn keyword_match_is_case_insensitive() {
        assert_eq!(
            select_weather_icon("THUNDERSTORM warning", 0),
            WeatherIconKey::Thunderstorm
        );
        assert_eq!(select_weather_icon("Light SNOW", 0), WeatherIconKey::Snow);
    }

    #[test]
    fn heavy_rain_above_seventy() {
        assert_eq!(select_weather_icon("Clear skies", 71), WeatherIconKey::HeavyRain);
        assert_eq!(select_weather_icon("Overcast", 100), WeatherIconKey::HeavyRain);
    }

    #[test]
    fn cloudy_between_thresholds() {
        assert_eq!(select_weather_icon("Overcast", 31), WeatherIconKey::Cloudy);
        assert_eq!(select_weather_icon("Overcast", 50), WeatherIconKey::Cloudy);
    }

    #[test]
    fn clear_at_or_below_thirty() {
        assert_eq!(select_weather_icon("Sunny", 5), WeatherIconKey::Clear);
        assert_eq!(select_weather_icon("Sunny", 0), WeatherIconKey::Clear);
    }

    #[test]
    fn boundary_seventy_falls_to_cloudy() {
        // 70 is not > 70, so it falls through to the 30-threshold branch
        assert_eq!(select_weather_icon("Clear skies", 70), WeatherIconKey::Cloudy);
    }

    #[test]
    fn boundary_thirty_falls_to_clear() {
        // 30 is not > 30
        assert_eq!(select_weather_icon("Clear skies", 30), WeatherIconKey::Clear);
    }
}

// =============================================================================
// Fire Incident Severity Tests
// Exact "Active" status match, 50% containment split, "%"-suffixed parsing
// =============================================================================

mod fire_severity {
    use super::*;

    #[test]
    fn active_below_fifty_is_critical() {
        assert_eq!(
            classify_fire_severity("Active", "40%").unwrap(),
            IncidentSeverity::Critical
        );
    }

    #[test]
    fn active_at_fifty_is_elevated() {
        // Exactly 50 is not < 50
        assert_eq!(
            classify_fire_severity("Active", "50%").unwrap(),
            IncidentSeverity::Elevated
        );
    }

    #[test]
    fn active_above_fifty_is_elevated() {
        assert_eq!(
            classify_fire_severity("Active", "60%").unwrap(),
            IncidentSeverity::Elevated
        );
    }

    #[test]
    fn contained_is_controlled() {
        assert_eq!(
            classify_fire_severity("Contained", "100%").unwrap(),
            IncidentSeverity::Controlled
        );
    }

    #[test]
    fn active_new_is_not_exactly_active() {
        // "Active (New)" fails the exact match and is treated as controlled
        assert_eq!(
            classify_fire_severity("Active (New)", "15%").unwrap(),
            IncidentSeverity::Controlled
        );
    }

    #[test]
    fn unparseable_containment_is_rejected() {
        let err = classify_fire_severity("Active", "abc%").unwrap_err();
        assert_eq!(err, ClassifyError::InvalidContainment("abc%".to_string()));
    }

    #[test]
    fn missing_percent_suffix_is_rejected() {
        assert!(classify_fire_severity("Active", "40").is_err());
        assert!(classify_fire_severity("Active", "").is_err());
    }

    #[test]
    fn containment_parsing() {
        assert_eq!(parse_containment_percent("0%").unwrap(), 0);
        assert_eq!(parse_containment_percent("40%").unwrap(), 40);
        assert_eq!(parse_containment_percent("100%").unwrap(), 100);
        assert!(parse_containment_percent("forty%").is_err());
        assert!(parse_containment_percent("%").is_err());
    }

    #[test]
    fn severity_color_tokens() {
        assert_eq!(IncidentSeverity::Critical.color_token(), "red");
        assert_eq!(IncidentSeverity::Elevated.color_token(), "amber");
        assert_eq!(IncidentSeverity::Controlled.color_token(), "green");
    }
}

// =============================================================================
// Display Tests
// =============================================================================

mod display {
    use super::*;

    #[test]
    fn risk_level_display_strings() {
        assert_eq!(format!("{}", RiskLevel::Low), "Low");
        assert_eq!(format!("{}", RiskLevel::Moderate), "Moderate");
        assert_eq!(format!("{}", RiskLevel::High), "High");
        assert_eq!(format!("{}", RiskLevel::Extreme), "Extreme");
    }

    #[test]
    fn icon_display_strings() {
        assert_eq!(format!("{}", WeatherIconKey::Thunderstorm), "Thunderstorm");
        assert_eq!(format!("{}", WeatherIconKey::Snow), "Snow");
        assert_eq!(format!("{}", WeatherIconKey::HeavyRain), "Heavy Rain");
        assert_eq!(format!("{}", WeatherIconKey::Cloudy), "Cloudy");
        assert_eq!(format!("{}", WeatherIconKey::Clear), "Clear");
    }

    #[test]
    fn severity_display_strings() {
        assert_eq!(format!("{}", IncidentSeverity::Critical), "Critical");
        assert_eq!(format!("{}", IncidentSeverity::Elevated), "Elevated");
        assert_eq!(format!("{}", IncidentSeverity::Controlled), "Controlled");
    }
}

// =============================================================================
// Property Tests
// The classifiers are total, deterministic, and never panic
// =============================================================================

mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn icon_selection_is_total_and_deterministic(
            condition in ".*",
            precipitation in -1000i32..1000i32,
        ) {
            let first = select_weather_icon(&condition, precipitation);
            let second = select_weather_icon(&condition, precipitation);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn thunderstorm_keyword_always_wins(
            prefix in "[a-zA-Z ]{0,12}",
            suffix in "[a-zA-Z ]{0,12}",
            precipitation in 0i32..=100i32,
        ) {
            let condition = format!("{}thunderstorm{}", prefix, suffix);
            prop_assert_eq!(
                select_weather_icon(&condition, precipitation),
                WeatherIconKey::Thunderstorm
            );
        }

        #[test]
        fn keyword_free_conditions_follow_thresholds(precipitation in 0i32..=100i32) {
            let icon = select_weather_icon("Overcast", precipitation);
            let expected = if precipitation > 70 {
                WeatherIconKey::HeavyRain
            } else if precipitation > 30 {
                WeatherIconKey::Cloudy
            } else {
                WeatherIconKey::Clear
            };
            prop_assert_eq!(icon, expected);
        }

        #[test]
        fn containment_parsing_never_panics(text in ".*") {
            let _ = parse_containment_percent(&text);
        }

        #[test]
        fn valid_containment_round_trips(percent in 0i32..=100i32) {
            let text = format!("{}%", percent);
            prop_assert_eq!(parse_containment_percent(&text).unwrap(), percent);
        }

        #[test]
        fn severity_is_deterministic(
            status in "[a-zA-Z ()]{0,16}",
            percent in 0i32..=100i32,
        ) {
            let containment = format!("{}%", percent);
            let first = classify_fire_severity(&status, &containment).unwrap();
            let second = classify_fire_severity(&status, &containment).unwrap();
            prop_assert_eq!(first, second);
        }
    }

    #[test]
    fn risk_mapping_is_idempotent() {
        for level in [
            RiskLevel::Low,
            RiskLevel::Moderate,
            RiskLevel::High,
            RiskLevel::Extreme,
        ] {
            assert_eq!(classify_risk(level), classify_risk(level));
        }
    }
}
