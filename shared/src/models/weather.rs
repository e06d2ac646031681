//! Weather observations and delay-risk estimation

use std::fmt;

use serde::{Deserialize, Serialize};

/// The weather fields the delay-risk estimator consumes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherObservation {
    pub condition_text: String,
    pub wind_mph: f64,
    pub temp_f: f64,
}

/// Delay risk derived from current weather conditions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "low"),
            RiskLevel::Medium => write!(f, "medium"),
            RiskLevel::High => write!(f, "high"),
        }
    }
}

/// Conditions that indicate a high delay risk on their own
const SEVERE_CONDITIONS: [&str; 10] = [
    "thunderstorm",
    "heavy rain",
    "heavy snow",
    "blizzard",
    "fog",
    "ice",
    "sleet",
    "storm",
    "hurricane",
    "tornado",
];

/// Conditions that indicate a moderate delay risk
const MODERATE_CONDITIONS: [&str; 7] = [
    "moderate rain",
    "moderate snow",
    "light snow",
    "overcast",
    "drizzle",
    "mist",
    "light rain",
];

const HIGH_WIND_MPH: f64 = 25.0;
const MODERATE_WIND_MPH: f64 = 15.0;

/// Estimate delivery delay risk from a weather observation
///
/// Predicate groups are evaluated in precedence order, first true wins:
/// severe condition keyword or wind above 25 mph is high, moderate keyword
/// or wind above 15 mph is medium, anything else is low. Keyword matching
/// is case-insensitive substring containment.
pub fn assess_delay_risk(observation: &WeatherObservation) -> RiskLevel {
    let conditions = observation.condition_text.to_lowercase();

    if SEVERE_CONDITIONS.iter().any(|c| conditions.contains(c))
        || observation.wind_mph > HIGH_WIND_MPH
    {
        RiskLevel::High
    } else if MODERATE_CONDITIONS.iter().any(|c| conditions.contains(c))
        || observation.wind_mph > MODERATE_WIND_MPH
    {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn observation(condition: &str, wind_mph: f64) -> WeatherObservation {
        WeatherObservation {
            condition_text: condition.to_string(),
            wind_mph,
            temp_f: 55.0,
        }
    }

    #[test]
    fn test_severe_keyword_wins_over_wind() {
        // "Fog" is severe even with no wind at all
        assert_eq!(assess_delay_risk(&observation("Fog", 0.0)), RiskLevel::High);
    }

    #[test]
    fn test_keyword_matching_is_case_insensitive() {
        assert_eq!(
            assess_delay_risk(&observation("HEAVY RAIN", 5.0)),
            RiskLevel::High
        );
        assert_eq!(
            assess_delay_risk(&observation("light Drizzle", 5.0)),
            RiskLevel::Medium
        );
    }

    #[test]
    fn test_wind_thresholds_are_exclusive() {
        assert_eq!(assess_delay_risk(&observation("Sunny", 25.0)), RiskLevel::Medium);
        assert_eq!(assess_delay_risk(&observation("Sunny", 25.1)), RiskLevel::High);
        assert_eq!(assess_delay_risk(&observation("Sunny", 15.0)), RiskLevel::Low);
        assert_eq!(assess_delay_risk(&observation("Sunny", 15.1)), RiskLevel::Medium);
    }

    #[test]
    fn test_risk_level_serializes_lowercase() {
        assert_eq!(serde_json::to_value(RiskLevel::High).unwrap(), "high");
        assert_eq!(RiskLevel::Medium.to_string(), "medium");
    }
}
