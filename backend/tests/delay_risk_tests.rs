//! Delay-risk estimator tests
//!
//! Covers the ordered predicate groups:
//! - severe condition keywords or wind above 25 mph yield high
//! - moderate condition keywords or wind above 15 mph yield medium
//! - calm, clear conditions yield low

use proptest::prelude::*;
use shared::{assess_delay_risk, RiskLevel, WeatherObservation};

fn observation(condition: &str, wind_mph: f64) -> WeatherObservation {
    WeatherObservation {
        condition_text: condition.to_string(),
        wind_mph,
        temp_f: 60.0,
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[test]
fn test_severe_condition_keywords_yield_high() {
    let severe = [
        "Thunderstorm",
        "Heavy rain",
        "Heavy snow",
        "Blizzard",
        "Fog",
        "Ice",
        "Sleet",
        "Storm",
        "Hurricane",
        "Tornado",
    ];
    for condition in severe {
        assert_eq!(
            assess_delay_risk(&observation(condition, 0.0)),
            RiskLevel::High,
            "condition {:?} should be high risk",
            condition
        );
    }
}

#[test]
fn test_moderate_condition_keywords_yield_medium() {
    let moderate = [
        "Moderate rain",
        "Moderate snow",
        "Light snow",
        "Overcast",
        "Drizzle",
        "Mist",
        "Light rain",
    ];
    for condition in moderate {
        assert_eq!(
            assess_delay_risk(&observation(condition, 0.0)),
            RiskLevel::Medium,
            "condition {:?} should be medium risk",
            condition
        );
    }
}

#[test]
fn test_calm_clear_conditions_yield_low() {
    assert_eq!(assess_delay_risk(&observation("Sunny", 5.0)), RiskLevel::Low);
    assert_eq!(
        assess_delay_risk(&observation("Partly cloudy", 10.0)),
        RiskLevel::Low
    );
}

#[test]
fn test_severe_keyword_inside_longer_text() {
    // Substring containment, not exact match
    assert_eq!(
        assess_delay_risk(&observation("Patches of freezing fog nearby", 2.0)),
        RiskLevel::High
    );
}

#[test]
fn test_wind_boundaries() {
    assert_eq!(assess_delay_risk(&observation("Clear", 15.0)), RiskLevel::Low);
    assert_eq!(
        assess_delay_risk(&observation("Clear", 16.0)),
        RiskLevel::Medium
    );
    assert_eq!(
        assess_delay_risk(&observation("Clear", 25.0)),
        RiskLevel::Medium
    );
    assert_eq!(assess_delay_risk(&observation("Clear", 26.0)), RiskLevel::High);
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Wind above 25 mph is always high, regardless of condition text
    #[test]
    fn prop_gale_force_wind_is_always_high(
        condition in "[a-zA-Z ]{0,30}",
        wind in 25.0f64..200.0,
    ) {
        prop_assume!(wind > 25.0);
        prop_assert_eq!(
            assess_delay_risk(&observation(&condition, wind)),
            RiskLevel::High
        );
    }

    /// Fog in any casing or surrounding text is always high
    #[test]
    fn prop_fog_is_always_high(
        prefix in "[a-z ]{0,10}",
        suffix in "[a-z ]{0,10}",
        wind in 0.0f64..10.0,
    ) {
        let condition = format!("{}Fog{}", prefix, suffix);
        prop_assert_eq!(
            assess_delay_risk(&observation(&condition, wind)),
            RiskLevel::High
        );
    }

    /// Neutral condition with wind in (15, 25] is exactly medium
    #[test]
    fn prop_neutral_condition_with_fresh_wind_is_medium(wind in 15.0f64..=25.0) {
        prop_assume!(wind > 15.0);
        prop_assert_eq!(
            assess_delay_risk(&observation("Sunny", wind)),
            RiskLevel::Medium
        );
    }

    /// Calm clear weather never raises the risk above low
    #[test]
    fn prop_calm_clear_is_low(wind in 0.0f64..=15.0) {
        prop_assert_eq!(
            assess_delay_risk(&observation("Clear", wind)),
            RiskLevel::Low
        );
    }
}
