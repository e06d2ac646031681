//! HTTP handlers for AI shipment analysis

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use shared::{RiskLevel, ShipmentRecord};

use crate::error::{AppError, AppResult};
use crate::external::weather::WeatherReport;
use crate::services::AnalysisService;
use crate::AppState;

/// Analyze-shipment request body
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeShipmentRequest {
    pub shipment_data: Option<ShipmentPayload>,
}

/// Caller-supplied shipment data, validated field by field
#[derive(Debug, Deserialize)]
pub struct ShipmentPayload {
    pub id: Option<String>,
    pub status: Option<String>,
    pub location: Option<String>,
    pub eta: Option<String>,
}

/// Analyze-shipment response body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeShipmentResponse {
    pub success: bool,
    pub analysis: String,
    pub weather_data: WeatherReport,
    pub delay_info: String,
    pub delay_risk: RiskLevel,
}

/// Analyze a shipment using weather data and the configured LLM (or mock)
pub async fn analyze_shipment(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeShipmentRequest>,
) -> AppResult<Json<AnalyzeShipmentResponse>> {
    let payload = request
        .shipment_data
        .ok_or_else(|| AppError::bad_request("Shipment data is required"))?;

    let shipment = validate_payload(payload)?;

    let service = AnalysisService::new(state.weather.clone(), state.openai.clone());
    let result = service.analyze_shipment(&shipment).await?;

    Ok(Json(AnalyzeShipmentResponse {
        success: true,
        analysis: result.analysis,
        weather_data: result.weather_data,
        delay_info: result.delay_info,
        delay_risk: result.delay_risk,
    }))
}

/// Require all four shipment fields, naming the first one missing
fn validate_payload(payload: ShipmentPayload) -> AppResult<ShipmentRecord> {
    let fields = [
        ("id", &payload.id),
        ("status", &payload.status),
        ("location", &payload.location),
        ("eta", &payload.eta),
    ];

    for (name, value) in fields {
        if value.as_deref().map_or(true, |v| v.is_empty()) {
            return Err(AppError::missing_field(
                name,
                format!("Shipment data is missing required field: {}", name),
            ));
        }
    }

    // All fields checked above; unwraps cannot fire
    Ok(ShipmentRecord {
        id: payload.id.unwrap_or_default(),
        status: payload.status.unwrap_or_default(),
        location: payload.location.unwrap_or_default(),
        eta: payload.eta.unwrap_or_default(),
    })
}
