use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// A chat-completion backend: one system message, one user message, one
/// text response. Implemented by [`OpenAiClient`] for production and by
/// stubs in tests.
#[async_trait]
pub trait CompletionService: Send + Sync {
    /// Request a single completion. May fail with a transport-level error.
    async fn complete(
        &self,
        model: &str,
        system: &str,
        user: &str,
        temperature: f64,
    ) -> Result<String>;
}

/// Configuration for the OpenAI-compatible completion client
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    /// API key (from ANALYSIS_OPENAI_API_KEY env var)
    pub api_key: String,
    /// Base URL of the completions API
    pub base_url: String,
}

impl OpenAiConfig {
    pub const DEFAULT_BASE_URL: &'static str = "https://api.openai.com/v1";

    /// Create config from environment variables
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("ANALYSIS_OPENAI_API_KEY")
            .context("ANALYSIS_OPENAI_API_KEY environment variable not set")?;
        let base_url = std::env::var("ANALYSIS_OPENAI_BASE_URL")
            .unwrap_or_else(|_| Self::DEFAULT_BASE_URL.to_string());

        Ok(Self { api_key, base_url })
    }

    /// Create with custom settings
    pub fn new(api_key: String, base_url: String) -> Self {
        Self { api_key, base_url }
    }
}

/// Client for an OpenAI-compatible chat completions API
pub struct OpenAiClient {
    client: Client,
    config: OpenAiConfig,
}

impl OpenAiClient {
    pub fn new(config: OpenAiConfig) -> Self {
        Self {
            client: Client::new(),
            config: OpenAiConfig {
                base_url: config.base_url.trim_end_matches('/').to_string(),
                ..config
            },
        }
    }
}

#[async_trait]
impl CompletionService for OpenAiClient {
    async fn complete(
        &self,
        model: &str,
        system: &str,
        user: &str,
        temperature: f64,
    ) -> Result<String> {
        let request = ChatRequest {
            model: model.to_string(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: system.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: user.to_string(),
                },
            ],
            temperature: Some(temperature),
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.config.base_url))
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await
            .context("Failed to send request to completions API")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Completions API error: {} - {}", status, body);
        }

        let response: ChatResponse = response
            .json()
            .await
            .context("Failed to parse completions API response")?;

        let choice = response
            .choices
            .into_iter()
            .next()
            .context("No choices in completions API response")?;

        Ok(choice.message.content.trim().to_string())
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f64>,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: String,
}
