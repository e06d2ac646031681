//! Shipment analysis service
//!
//! Fetches current weather for a shipment's location, estimates delay risk,
//! and produces the analysis narrative. With an OpenAI credential the
//! narration is delegated to the LLM and its first completion is returned
//! verbatim; without one, a fixed template keyed on the risk level is used.

use serde::Serialize;
use shared::{assess_delay_risk, RiskLevel, ShipmentRecord};

use crate::error::AppResult;
use crate::external::weather::WeatherReport;
use crate::external::{OpenAiClient, WeatherClient};

const SYSTEM_PROMPT: &str = "You are LogiBot, an AI assistant specialized in logistics. \
    Analyze shipping data and weather conditions to provide insights on potential delays \
    and recommendations.";

/// Result of analyzing a shipment against current weather
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentAnalysis {
    pub analysis: String,
    pub weather_data: WeatherReport,
    pub delay_info: String,
    pub delay_risk: RiskLevel,
}

/// Shipment analysis service
#[derive(Clone)]
pub struct AnalysisService {
    weather: WeatherClient,
    openai: Option<OpenAiClient>,
}

impl AnalysisService {
    pub fn new(weather: WeatherClient, openai: Option<OpenAiClient>) -> Self {
        Self { weather, openai }
    }

    /// Analyze a shipment using current weather conditions
    ///
    /// Weather failures degrade to synthesized data inside the client; LLM
    /// failures propagate as errors for the originating request.
    pub async fn analyze_shipment(&self, shipment: &ShipmentRecord) -> AppResult<ShipmentAnalysis> {
        let weather_data = self.weather.current(&shipment.location).await;

        let observation = weather_data.observation();
        let delay_risk = assess_delay_risk(&observation);
        let delay_info = format!(
            "Current weather: {}, Wind: {} mph, Temperature: {}°F",
            observation.condition_text, observation.wind_mph, observation.temp_f
        );

        let analysis = match &self.openai {
            Some(client) => {
                let prompt = analysis_prompt(shipment, &delay_info, delay_risk);
                client.chat_completion(SYSTEM_PROMPT, &prompt).await?
            }
            None => {
                tracing::warn!("OpenAI API key is not set. Using mock response.");
                mock_analysis(shipment, &delay_info, delay_risk)
            }
        };

        Ok(ShipmentAnalysis {
            analysis,
            weather_data,
            delay_info,
            delay_risk,
        })
    }
}

/// Build the single user-turn analysis prompt
fn analysis_prompt(shipment: &ShipmentRecord, delay_info: &str, delay_risk: RiskLevel) -> String {
    format!(
        "Analyze this shipment with current weather data:\n\
         Shipment ID: {}\n\
         Current Status: {}\n\
         Current Location: {}\n\
         Original ETA: {}\n\
         Weather Conditions: {}\n\
         Delay Risk: {}",
        shipment.id, shipment.status, shipment.location, shipment.eta, delay_info, delay_risk
    )
}

/// Templated analysis used when no OpenAI credential is configured
fn mock_analysis(shipment: &ShipmentRecord, delay_info: &str, delay_risk: RiskLevel) -> String {
    let summary = match delay_risk {
        RiskLevel::High => {
            "The current severe weather conditions are likely to cause significant delays. \
             Consider notifying the customer about potential delivery adjustments."
        }
        RiskLevel::Medium => {
            "There is a moderate risk of delay due to weather conditions. \
             Monitor shipment progress closely."
        }
        RiskLevel::Low => "Weather conditions are favorable. No weather-related delays expected.",
    };

    let (action_one, action_two, action_three) = match delay_risk {
        RiskLevel::High => (
            "Immediately contact the carrier to confirm new ETA",
            "Proactively notify the customer about potential delays",
            "Consider alternative routing options if available",
        ),
        _ => (
            "Continue monitoring shipment progress",
            "No additional actions required at this time",
            "Ensure delivery arrangements are in place",
        ),
    };

    let impact = match delay_risk {
        RiskLevel::High => "Potential delay of 1-2 business days.",
        RiskLevel::Medium => "Possible minor delays (less than 24 hours).",
        RiskLevel::Low => "No significant impact expected.",
    };

    format!(
        "## Shipment Analysis\n\
         \n\
         **Shipment ID:** {id}\n\
         **Current Status:** {status}\n\
         **Location:** {location}\n\
         **Original ETA:** {eta}\n\
         \n\
         **Weather Impact Analysis:**\n\
         {delay_info}\n\
         \n\
         **Delay Risk:** {risk}\n\
         \n\
         {summary}\n\
         \n\
         **Recommended Actions:**\n\
         1. {action_one}\n\
         2. {action_two}\n\
         3. {action_three}\n\
         \n\
         **Estimated Impact:**\n\
         {impact}",
        id = shipment.id,
        status = shipment.status,
        location = shipment.location,
        eta = shipment.eta,
        delay_info = delay_info,
        risk = delay_risk.to_string().to_uppercase(),
        summary = summary,
        action_one = action_one,
        action_two = action_two,
        action_three = action_three,
        impact = impact,
    )
}
