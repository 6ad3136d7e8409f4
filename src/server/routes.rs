use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::analysis::analyze_transcript;
use crate::llm::resolve_model;
use crate::models::{AnalysisResult, Question};

use super::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: "callsight",
    })
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeCallParams {
    /// Telephony provider call SID identifying the recording
    pub call_sid: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct AnalyzeCallRequest {
    /// Explicit questions to answer; overrides agent configuration
    #[serde(default)]
    pub questions: Option<Vec<Question>>,
    /// Agent whose configured post-call questions should be used
    #[serde(default)]
    pub agent_id: Option<Uuid>,
    /// Model alias or identifier overriding the configured default
    #[serde(default)]
    pub model: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeCallResponse {
    pub analysis: AnalysisResult,
    pub analyzed_at: DateTime<Utc>,
}

type ApiError = (StatusCode, String);

fn internal(err: anyhow::Error) -> ApiError {
    warn!(error = %err, "Internal error handling analyze-call");
    (StatusCode::INTERNAL_SERVER_ERROR, "Analysis failed".to_string())
}

/// Analyze a completed call.
///
/// Questions are resolved in order: explicit list in the body, then the
/// agent named in the body, then the agent provisioned for the call in the
/// call-config cache. The analyzer itself cannot fail; every protocol
/// error is produced here before it runs.
pub async fn analyze_call(
    State(state): State<AppState>,
    Query(params): Query<AnalyzeCallParams>,
    Json(request): Json<AnalyzeCallRequest>,
) -> Result<Json<AnalyzeCallResponse>, ApiError> {
    let transcript = state
        .transcripts
        .fetch(&params.call_sid)
        .await
        .map_err(internal)?
        .ok_or_else(|| {
            (
                StatusCode::NOT_FOUND,
                "Transcription not found".to_string(),
            )
        })?;

    let (questions, agent_from_cache) = resolve_questions(&state, &params.call_sid, &request).await?;

    if questions.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            "No questions provided".to_string(),
        ));
    }

    let mut config = state.analyzer.clone();
    if let Some(model) = &request.model {
        config.model = resolve_model(model).to_string();
    }

    info!(
        call_sid = %params.call_sid,
        questions = questions.len(),
        model = %config.model,
        "Analyzing call"
    );

    let analysis = analyze_transcript(state.llm.as_ref(), &config, &transcript, &questions).await;

    // The provisioning entry has served its purpose once the call is
    // analyzed; leave it alone when the caller supplied the agent itself.
    if agent_from_cache {
        if let Err(e) = state.call_configs.delete(&params.call_sid).await {
            warn!(call_sid = %params.call_sid, error = %e, "Failed to clean up call config");
        }
    }

    Ok(Json(AnalyzeCallResponse {
        analysis,
        analyzed_at: Utc::now(),
    }))
}

/// Resolve the question set for a call, reporting whether the agent was
/// recovered from the call-config cache.
async fn resolve_questions(
    state: &AppState,
    call_sid: &str,
    request: &AnalyzeCallRequest,
) -> Result<(Vec<Question>, bool), ApiError> {
    if let Some(questions) = &request.questions {
        if !questions.is_empty() {
            return Ok((questions.clone(), false));
        }
    }

    let (agent_id, from_cache) = match request.agent_id {
        Some(agent_id) => (agent_id, false),
        None => {
            let config = state
                .call_configs
                .get(call_sid)
                .await
                .map_err(internal)?
                .ok_or_else(|| {
                    (
                        StatusCode::NOT_FOUND,
                        "No call configuration found for this call".to_string(),
                    )
                })?;
            (config.agent_id, true)
        }
    };

    let questions = state
        .questions
        .fetch_post_call_questions(&agent_id)
        .await
        .map_err(internal)?
        .ok_or_else(|| (StatusCode::NOT_FOUND, "Agent not found".to_string()))?;

    Ok((questions, from_cache))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_request_fields_are_optional() {
        let request: AnalyzeCallRequest = serde_json::from_str("{}").unwrap();

        assert!(request.questions.is_none());
        assert!(request.agent_id.is_none());
        assert!(request.model.is_none());
    }

    #[test]
    fn test_analyze_request_with_inline_questions() {
        let json = r#"{
            "questions": [
                {"id": 1, "type": "Boolean", "name": "Was a tour booked?", "options": []}
            ],
            "model": "OPENAI_Default"
        }"#;

        let request: AnalyzeCallRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.questions.as_ref().unwrap().len(), 1);
        assert_eq!(request.model.as_deref(), Some("OPENAI_Default"));
    }
}
