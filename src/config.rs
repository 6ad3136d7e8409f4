use anyhow::{Context, Result};

use crate::llm::{OpenAiConfig, DEFAULT_ANALYSIS_MODEL};

/// Service configuration assembled from the environment at startup
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Redis URL for the provisioned call-config cache
    pub redis_url: String,
    /// Base URL of the transcript object store
    pub transcript_store_url: String,
    /// Base URL of the agent registry
    pub agent_registry_url: String,
    /// Completion API credentials
    pub llm: OpenAiConfig,
    /// Default model for analysis (ANALYSIS_OPENAI_MODEL)
    pub analysis_model: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let redis_url = std::env::var("REDIS_URL")
            .unwrap_or_else(|_| "redis://localhost:6379/0".to_string());
        let transcript_store_url = std::env::var("TRANSCRIPT_STORE_URL")
            .context("TRANSCRIPT_STORE_URL environment variable not set")?;
        let agent_registry_url = std::env::var("AGENT_REGISTRY_URL")
            .context("AGENT_REGISTRY_URL environment variable not set")?;
        let llm = OpenAiConfig::from_env()?;
        let analysis_model = std::env::var("ANALYSIS_OPENAI_MODEL")
            .unwrap_or_else(|_| DEFAULT_ANALYSIS_MODEL.to_string());

        Ok(Self {
            redis_url,
            transcript_store_url,
            agent_registry_url,
            llm,
            analysis_model,
        })
    }
}
