//! Anthropic messages client
//!
//! Minimal non-streaming client used for route-optimization narratives.
//! The first `text` content block is returned verbatim; a response without
//! one is a fatal error for the originating request.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Client for the Anthropic messages API
#[derive(Clone)]
pub struct AnthropicClient {
    http_client: Client,
    api_endpoint: String,
    api_key: String,
    model: String,
}

/// Messages API request body
#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<Message<'a>>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

/// Messages API response body
#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    block_type: String,
    text: Option<String>,
}

impl AnthropicClient {
    /// Create a new Anthropic client
    pub fn new(api_endpoint: String, api_key: String, model: String) -> Self {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http_client,
            api_endpoint,
            api_key,
            model,
        }
    }

    /// Send a single user-turn message and return the first text block
    pub async fn create_message(&self, prompt: &str) -> AppResult<String> {
        let url = format!("{}/v1/messages", self.api_endpoint.trim_end_matches('/'));

        let request = MessagesRequest {
            model: &self.model,
            max_tokens: 1500,
            messages: vec![Message {
                role: "user",
                content: prompt,
            }],
            temperature: 0.2,
        };

        let response = self
            .http_client
            .post(&url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::LlmApiError(format!("Anthropic request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::LlmApiError(format!(
                "Anthropic API returned {}: {}",
                status, body
            )));
        }

        let result: MessagesResponse = response.json().await.map_err(|e| {
            AppError::LlmApiError(format!("Failed to parse Anthropic response: {}", e))
        })?;

        result
            .content
            .into_iter()
            .find(|block| block.block_type == "text")
            .and_then(|block| block.text)
            .ok_or_else(|| {
                AppError::LlmApiError(
                    "Unexpected response format from Anthropic API: no text content".to_string(),
                )
            })
    }
}
