use anyhow::{Context, Result};
use reqwest::StatusCode;
use serde_json::Value;

/// Client for the object store holding recorded-call transcriptions.
/// Transcripts are written by the recording pipeline as
/// `transcriptions/{call_sid}.json` and read here once per analysis.
#[derive(Debug, Clone)]
pub struct TranscriptStore {
    client: reqwest::Client,
    base_url: String,
}

impl TranscriptStore {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch the transcription JSON for a call. Returns `None` when no
    /// transcription exists for the call sid.
    pub async fn fetch(&self, call_sid: &str) -> Result<Option<Value>> {
        let url = format!("{}/transcriptions/{}.json", self.base_url, call_sid);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to reach transcript store")?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Transcript store error: {} - {}", status, body);
        }

        let transcript = response
            .json()
            .await
            .context("Failed to parse stored transcription as JSON")?;

        Ok(Some(transcript))
    }
}
