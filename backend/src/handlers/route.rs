//! HTTP handlers for route optimization

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use shared::{validate_non_blank, DeliveryStop};

use crate::error::{AppError, AppResult};
use crate::services::RouteService;
use crate::AppState;

/// Optimize-route request body
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizeRouteRequest {
    pub starting_location: Option<String>,
    pub delivery_locations: Option<Vec<DeliveryStop>>,
    pub constraints: Option<String>,
}

/// Optimize-route response body
#[derive(Debug, Serialize)]
pub struct OptimizeRouteResponse {
    pub success: bool,
    pub analysis: String,
}

/// Rank delivery stops and return a route narrative
pub async fn optimize_route(
    State(state): State<AppState>,
    Json(request): Json<OptimizeRouteRequest>,
) -> AppResult<Json<OptimizeRouteResponse>> {
    let starting_location = request.starting_location.unwrap_or_default();
    if validate_non_blank(&starting_location).is_err() {
        return Err(AppError::bad_request("Starting location is required"));
    }

    let delivery_locations = request.delivery_locations.unwrap_or_default();
    if delivery_locations.is_empty() {
        return Err(AppError::bad_request(
            "At least one delivery location is required",
        ));
    }

    let constraints = request.constraints.unwrap_or_default();

    let service = RouteService::new(state.anthropic.clone());
    let analysis = service
        .optimize_route(&starting_location, &delivery_locations, &constraints)
        .await?;

    Ok(Json(OptimizeRouteResponse {
        success: true,
        analysis,
    }))
}
