//! HTTP handlers for shipment queries

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use shared::QueryResult;

use crate::error::{AppError, AppResult};
use crate::services::ShipmentService;
use crate::AppState;

/// Free-text shipment query request
#[derive(Debug, Deserialize)]
pub struct ShipmentQueryRequest {
    pub query: Option<String>,
}

/// Shipment query response envelope
#[derive(Debug, Serialize)]
pub struct ShipmentQueryResponse {
    pub response: QueryResult,
}

/// Classify a free-text query and resolve any shipment reference
///
/// An unmatched shipment id is a semantic error inside the payload, not an
/// HTTP error; only a missing or blank query is rejected.
pub async fn query_shipment(
    State(state): State<AppState>,
    Json(request): Json<ShipmentQueryRequest>,
) -> AppResult<Json<ShipmentQueryResponse>> {
    let query = request.query.unwrap_or_default();
    if query.trim().is_empty() {
        return Err(AppError::bad_request("Query is required"));
    }

    let service = ShipmentService::new(state.shipments.clone());
    let response = service.process_query(&query);

    Ok(Json(ShipmentQueryResponse { response }))
}
