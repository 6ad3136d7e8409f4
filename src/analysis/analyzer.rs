use serde_json::Value;
use tracing::{debug, warn};

use super::keywords::{
    extract_keywords, normalize_boolean_value, topic_present, transcript_search_text,
};
use super::response::parse_analysis;
use super::AnalysisError;
use crate::llm::{
    build_analysis_prompt, CompletionService, ANALYSIS_SYSTEM_PROMPT, DEFAULT_ANALYSIS_MODEL,
};
use crate::models::{process_questions, AnalysisResult, Question, QuestionKind};

/// Configuration for one analysis run
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Model identifier sent to the completion service
    pub model: String,
    /// Sampling temperature; some response variability is accepted
    pub temperature: f64,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_ANALYSIS_MODEL.to_string(),
            temperature: 0.7,
        }
    }
}

/// Analyze a call transcript against a set of typed questions.
///
/// Never fails: any transport, parse, or validation error is logged and
/// collapsed into [`AnalysisResult::empty`], so callers handle exactly one
/// result shape. A genuine result carries one answer per processed
/// question; the empty result carries none.
pub async fn analyze_transcript(
    client: &impl CompletionService,
    config: &AnalyzerConfig,
    transcript: &Value,
    questions: &[Question],
) -> AnalysisResult {
    match run_analysis(client, config, transcript, questions).await {
        Ok(analysis) => analysis,
        Err(e) => {
            warn!(error = %e, "Transcript analysis failed, returning empty result");
            AnalysisResult::empty()
        }
    }
}

async fn run_analysis(
    client: &impl CompletionService,
    config: &AnalyzerConfig,
    transcript: &Value,
    questions: &[Question],
) -> Result<AnalysisResult, AnalysisError> {
    let processed = process_questions(questions);
    debug!(
        questions = questions.len(),
        processed = processed.len(),
        model = %config.model,
        "Running transcript analysis"
    );

    let prompt = build_analysis_prompt(transcript, &processed);
    let raw = client
        .complete(&config.model, ANALYSIS_SYSTEM_PROMPT, &prompt, config.temperature)
        .await
        .map_err(AnalysisError::Transport)?;

    let mut analysis = parse_analysis(&raw)?;
    correct_answers(&mut analysis, transcript);

    Ok(analysis)
}

/// Deterministic post-processing of the model's answers.
///
/// Boolean answers are corrected independently of what the model claimed:
/// if none of the question's keywords occur in the transcript the value is
/// forced to "unknown" (the topic was never raised), otherwise the raw
/// value is normalized into the yes/no/unknown vocabulary. Finally, empty
/// values of any type are rewritten to "unknown".
fn correct_answers(analysis: &mut AnalysisResult, transcript: &Value) {
    let transcript_text = transcript_search_text(transcript);

    for (name, answer) in analysis.answers.iter_mut() {
        if answer.kind == QuestionKind::Boolean.as_str() {
            let keywords = extract_keywords(name);
            answer.value = if !topic_present(&transcript_text, &keywords) {
                "unknown".to_string()
            } else {
                normalize_boolean_value(&answer.value).to_string()
            };
        }

        if answer.value.is_empty() {
            answer.value = "unknown".to_string();
        }
    }
}
