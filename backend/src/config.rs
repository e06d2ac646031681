//! Configuration management for the LogiBot backend
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with LOGIBOT_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Weather API configuration
    pub weather: WeatherConfig,

    /// OpenAI configuration for shipment analysis
    pub openai: OpenAiConfig,

    /// Anthropic configuration for route narratives
    pub anthropic: AnthropicConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WeatherConfig {
    /// Weather API endpoint
    pub api_endpoint: String,

    /// Weather API key; when absent, weather data is synthesized
    pub api_key: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct OpenAiConfig {
    /// OpenAI API endpoint
    pub api_endpoint: String,

    /// OpenAI API key; when absent, analysis uses the templated mock
    pub api_key: Option<String>,

    /// Chat completion model
    pub model: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AnthropicConfig {
    /// Anthropic API endpoint
    pub api_endpoint: String,

    /// Anthropic API key; when absent, route narratives use the templated mock
    pub api_key: Option<String>,

    /// Messages API model
    pub model: String,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("LOGIBOT_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 3001)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("weather.api_endpoint", "https://api.weatherapi.com/v1")?
            .set_default("openai.api_endpoint", "https://api.openai.com")?
            .set_default("openai.model", "gpt-3.5-turbo")?
            .set_default("anthropic.api_endpoint", "https://api.anthropic.com")?
            .set_default("anthropic.model", "claude-3-opus-20240229")?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (LOGIBOT_ prefix)
            .add_source(
                Environment::with_prefix("LOGIBOT")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3001,
            host: "0.0.0.0".to_string(),
        }
    }
}
