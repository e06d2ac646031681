//! Health and greeting handlers

use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct HelloResponse {
    pub message: String,
}

/// Static greeting endpoint handler
pub async fn hello() -> Json<HelloResponse> {
    Json(HelloResponse {
        message: "Hello from the LogiBot API".to_string(),
    })
}
