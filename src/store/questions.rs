use anyhow::{Context, Result};
use reqwest::StatusCode;
use uuid::Uuid;

use crate::models::Question;

/// Client for the agent registry, which serves each agent's configured
/// post-call questions
#[derive(Debug, Clone)]
pub struct QuestionRegistry {
    client: reqwest::Client,
    base_url: String,
}

impl QuestionRegistry {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch the post-call questions configured for an agent. Returns
    /// `None` when the registry does not know the agent; a known agent may
    /// legitimately have an empty question list.
    pub async fn fetch_post_call_questions(&self, agent_id: &Uuid) -> Result<Option<Vec<Question>>> {
        let url = format!("{}/agents/{}/post-call-questions", self.base_url, agent_id);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to reach agent registry")?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Agent registry error: {} - {}", status, body);
        }

        let questions = response
            .json()
            .await
            .context("Failed to parse post-call questions")?;

        Ok(Some(questions))
    }
}
