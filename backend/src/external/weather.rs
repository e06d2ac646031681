//! Weather API client for fetching current conditions
//!
//! Integrates with the WeatherAPI.com current-conditions endpoint. When no
//! API key is configured, or when the upstream call fails for any reason,
//! the client degrades to synthesized weather data so the originating
//! request still succeeds.

use chrono::Utc;
use rand::Rng;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use shared::WeatherObservation;

/// Weather API client
#[derive(Clone)]
pub struct WeatherClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

/// Full weather report, mirroring the provider's response shape
///
/// Returned verbatim to API callers as `weatherData`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherReport {
    pub location: ReportLocation,
    pub current: CurrentConditions,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportLocation {
    pub name: String,
    pub region: String,
    pub country: String,
    pub localtime: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub temp_c: f64,
    pub temp_f: f64,
    pub condition: WeatherCondition,
    pub wind_mph: f64,
    pub humidity: i32,
    pub feelslike_c: f64,
    pub feelslike_f: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherCondition {
    pub text: String,
    pub icon: String,
    pub code: i32,
}

impl WeatherReport {
    /// Project the report down to the fields the risk estimator consumes
    pub fn observation(&self) -> WeatherObservation {
        WeatherObservation {
            condition_text: self.current.condition.text.clone(),
            wind_mph: self.current.wind_mph,
            temp_f: self.current.temp_f,
        }
    }
}

/// Condition texts used for synthesized reports
const MOCK_CONDITIONS: [&str; 12] = [
    "Sunny",
    "Partly cloudy",
    "Cloudy",
    "Overcast",
    "Mist",
    "Light rain",
    "Moderate rain",
    "Heavy rain",
    "Light snow",
    "Moderate snow",
    "Heavy snow",
    "Thunderstorm",
];

impl WeatherClient {
    /// Create a new WeatherClient
    pub fn new(base_url: String, api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            base_url,
            api_key,
        }
    }

    /// Fetch current weather conditions for a place name
    ///
    /// This call never fails: a missing credential or any upstream error
    /// falls back to a synthesized report for the same location.
    pub async fn current(&self, location: &str) -> WeatherReport {
        let Some(api_key) = &self.api_key else {
            tracing::warn!("Weather API key is missing. Using mock data.");
            return mock_weather_report(location);
        };

        match self.fetch_current(location, api_key).await {
            Ok(report) => report,
            Err(e) => {
                tracing::error!("Error fetching weather data: {}", e);
                mock_weather_report(location)
            }
        }
    }

    async fn fetch_current(&self, location: &str, api_key: &str) -> reqwest::Result<WeatherReport> {
        let url = format!("{}/current.json", self.base_url);

        self.client
            .get(&url)
            .query(&[("key", api_key), ("q", location), ("aqi", "no")])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }
}

/// Synthesize a weather report with bounded random values
///
/// Temperature -5..30 degC, humidity 40..100 %, wind 0..30 mph.
fn mock_weather_report(location: &str) -> WeatherReport {
    let mut rng = rand::thread_rng();

    let condition = MOCK_CONDITIONS[rng.gen_range(0..MOCK_CONDITIONS.len())];
    let temp_c = rng.gen_range(-5..30) as f64;
    let temp_f = (temp_c * 9.0 / 5.0 + 32.0).round();
    let humidity = rng.gen_range(40..100);
    let wind_mph = rng.gen_range(0..30) as f64;

    WeatherReport {
        location: ReportLocation {
            name: location.to_string(),
            region: "Mock Region".to_string(),
            country: "Mock Country".to_string(),
            localtime: Utc::now().to_rfc3339(),
        },
        current: CurrentConditions {
            temp_c,
            temp_f,
            condition: WeatherCondition {
                text: condition.to_string(),
                icon: "//cdn.weatherapi.com/weather/64x64/day/116.png".to_string(),
                code: 1000,
            },
            wind_mph,
            humidity,
            feelslike_c: temp_c - 2.0,
            feelslike_f: temp_f - 3.0,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_report_stays_in_bounds() {
        for _ in 0..200 {
            let report = mock_weather_report("Chicago");
            let current = &report.current;
            assert!((-5.0..30.0).contains(&current.temp_c));
            assert!((40..100).contains(&current.humidity));
            assert!((0.0..30.0).contains(&current.wind_mph));
            assert!(MOCK_CONDITIONS.contains(&current.condition.text.as_str()));
            assert_eq!(report.location.name, "Chicago");
        }
    }

    #[test]
    fn test_observation_projection() {
        let report = mock_weather_report("Denver");
        let observation = report.observation();
        assert_eq!(observation.condition_text, report.current.condition.text);
        assert_eq!(observation.wind_mph, report.current.wind_mph);
        assert_eq!(observation.temp_f, report.current.temp_f);
    }
}
