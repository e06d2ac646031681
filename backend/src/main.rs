//! LogiBot - Logistics Assistant Backend Server
//!
//! Answers free-text shipment queries against an in-memory registry,
//! analyzes delay risk from current weather, and produces route narratives
//! via external LLM providers (with deterministic mock fallbacks).

use axum::{routing::get, Router};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod external;
mod handlers;
mod routes;
mod services;

pub use crate::config::Config;

use external::{AnthropicClient, OpenAiClient, WeatherClient};
use services::ShipmentRegistry;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub shipments: ShipmentRegistry,
    pub weather: WeatherClient,
    pub openai: Option<OpenAiClient>,
    pub anthropic: Option<AnthropicClient>,
}

impl AppState {
    /// Build application state from configuration
    ///
    /// LLM clients are only constructed when a credential is configured;
    /// an absent client switches narration to the templated mock path.
    pub fn from_config(config: Config) -> Self {
        let weather = WeatherClient::new(
            config.weather.api_endpoint.clone(),
            config.weather.api_key.clone(),
        );
        let openai = config
            .openai
            .api_key
            .clone()
            .map(|key| OpenAiClient::new(config.openai.api_endpoint.clone(), key, config.openai.model.clone()));
        let anthropic = config.anthropic.api_key.clone().map(|key| {
            AnthropicClient::new(
                config.anthropic.api_endpoint.clone(),
                key,
                config.anthropic.model.clone(),
            )
        });

        Self {
            config: Arc::new(config),
            shipments: ShipmentRegistry::with_fixture(),
            weather,
            openai,
            anthropic,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "logibot_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::load()?;

    tracing::info!("Starting LogiBot Server");
    tracing::info!("Environment: {}", config.environment);

    if config.openai.api_key.is_none() {
        tracing::warn!("OpenAI API key is not set. Shipment analysis will use mock responses.");
    }
    if config.anthropic.api_key.is_none() {
        tracing::warn!("Anthropic API key is not set. Route optimization will use mock responses.");
    }
    if config.weather.api_key.is_none() {
        tracing::warn!("Weather API key is not set. Weather data will be synthesized.");
    }

    let state = AppState::from_config(config);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], state.config.server.port));

    // Build application
    let app = create_app(state);
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes and middleware
fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .nest("/api", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "LogiBot Logistics Assistant API v1.0"
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
