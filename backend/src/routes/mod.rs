//! Route definitions for the LogiBot backend

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Static greeting
        .route("/hello", get(handlers::hello))
        // Shipment query routes
        .nest("/shipment", shipment_routes())
        // AI analysis routes
        .nest("/ai", ai_routes())
        // Route optimization routes
        .nest("/route", route_routes())
}

/// Shipment query routes
fn shipment_routes() -> Router<AppState> {
    Router::new().route("/query", post(handlers::query_shipment))
}

/// AI analysis routes
fn ai_routes() -> Router<AppState> {
    Router::new().route("/analyze-shipment", post(handlers::analyze_shipment))
}

/// Route optimization routes
fn route_routes() -> Router<AppState> {
    Router::new().route("/optimize", post(handlers::optimize_route))
}
