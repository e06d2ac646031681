//! External API integrations

pub mod anthropic;
pub mod openai;
pub mod weather;

pub use anthropic::AnthropicClient;
pub use openai::OpenAiClient;
pub use weather::WeatherClient;
