use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

use super::AnalysisError;
use crate::models::{AnalysisResult, AnswerValue};

/// Top-level keys every analysis response must carry
const REQUIRED_KEYS: &[&str] = &["summary", "key_points", "sentiment", "action_items", "answers"];

/// Remove markdown code-fence markers the model may wrap its JSON in
pub fn strip_code_fences(raw: &str) -> String {
    raw.replace("```json", "").replace("```", "").trim().to_string()
}

/// Parse a raw model response into an [`AnalysisResult`].
///
/// Policy: after fence stripping the text must be `{...}`-shaped, parse as
/// JSON, and contain all five required top-level keys. Answer values that
/// arrive as JSON booleans or numbers are stringified rather than rejected;
/// the correction pass later maps them into the closed vocabularies.
pub fn parse_analysis(raw: &str) -> Result<AnalysisResult, AnalysisError> {
    let stripped = strip_code_fences(raw);

    if !stripped.starts_with('{') || !stripped.ends_with('}') {
        return Err(AnalysisError::Malformed(format!(
            "response is not a JSON object: {}",
            truncate(&stripped, 120)
        )));
    }

    let value: Value = serde_json::from_str(&stripped)
        .map_err(|e| AnalysisError::Malformed(format!("invalid JSON: {e}")))?;

    let object = value
        .as_object()
        .ok_or_else(|| AnalysisError::Malformed("top-level value is not an object".to_string()))?;

    let missing: Vec<&str> = REQUIRED_KEYS
        .iter()
        .filter(|key| !object.contains_key(**key))
        .copied()
        .collect();
    if !missing.is_empty() {
        return Err(AnalysisError::Incomplete(missing.join(", ")));
    }

    let raw_analysis: RawAnalysis = serde_json::from_value(value)
        .map_err(|e| AnalysisError::Malformed(format!("unexpected response shape: {e}")))?;

    Ok(raw_analysis.into())
}

#[derive(Debug, Deserialize)]
struct RawAnalysis {
    summary: String,
    key_points: Vec<String>,
    sentiment: String,
    action_items: Vec<String>,
    answers: HashMap<String, RawAnswer>,
}

#[derive(Debug, Deserialize)]
struct RawAnswer {
    value: Value,
    #[serde(rename = "type")]
    kind: String,
}

impl From<RawAnalysis> for AnalysisResult {
    fn from(raw: RawAnalysis) -> Self {
        let answers = raw
            .answers
            .into_iter()
            .map(|(name, answer)| {
                (
                    name,
                    AnswerValue {
                        value: stringify(&answer.value),
                        kind: answer.kind,
                    },
                )
            })
            .collect();

        Self {
            summary: raw.summary,
            key_points: raw.key_points,
            sentiment: raw.sentiment,
            action_items: raw.action_items,
            answers,
        }
    }
}

/// Render a JSON scalar as the text the correction pass operates on.
/// Null becomes empty and is rewritten to "unknown" downstream.
fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn truncate(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_RESPONSE: &str = r#"{
        "summary": "Parent asked about weekend availability.",
        "key_points": ["weekend availability"],
        "sentiment": "positive",
        "action_items": [],
        "answers": {
            "Did the parent ask about weekend availability?": {
                "value": "yes",
                "type": "boolean"
            }
        }
    }"#;

    #[test]
    fn test_parse_valid_response() {
        let result = parse_analysis(VALID_RESPONSE).unwrap();

        assert_eq!(result.sentiment, "positive");
        assert_eq!(result.answers.len(), 1);
        let answer = &result.answers["Did the parent ask about weekend availability?"];
        assert_eq!(answer.value, "yes");
        assert_eq!(answer.kind, "boolean");
    }

    #[test]
    fn test_parse_fenced_response() {
        let fenced = format!("```json\n{VALID_RESPONSE}\n```");

        let result = parse_analysis(&fenced).unwrap();

        assert_eq!(result.key_points, vec!["weekend availability"]);
    }

    #[test]
    fn test_refusal_text_is_malformed() {
        let err = parse_analysis("Sorry, I cannot help with that.").unwrap_err();

        assert!(matches!(err, AnalysisError::Malformed(_)));
    }

    #[test]
    fn test_invalid_json_is_malformed() {
        let err = parse_analysis("{not json}").unwrap_err();

        assert!(matches!(err, AnalysisError::Malformed(_)));
    }

    #[test]
    fn test_missing_required_key_is_incomplete() {
        let json = r#"{
            "summary": "s",
            "key_points": [],
            "sentiment": "neutral",
            "answers": {}
        }"#;

        let err = parse_analysis(json).unwrap_err();

        match err {
            AnalysisError::Incomplete(missing) => assert_eq!(missing, "action_items"),
            other => panic!("expected Incomplete, got {other:?}"),
        }
    }

    #[test]
    fn test_scalar_answer_values_are_stringified() {
        let json = r#"{
            "summary": "s",
            "key_points": [],
            "sentiment": "neutral",
            "action_items": [],
            "answers": {
                "Was a price mentioned?": {"value": true, "type": "boolean"},
                "How many children?": {"value": 3, "type": "numerical"},
                "Preferred day?": {"value": null, "type": "text"}
            }
        }"#;

        let result = parse_analysis(json).unwrap();

        assert_eq!(result.answers["Was a price mentioned?"].value, "true");
        assert_eq!(result.answers["How many children?"].value, "3");
        assert_eq!(result.answers["Preferred day?"].value, "");
    }
}
