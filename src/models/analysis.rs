use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A single answer produced by the analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerValue {
    /// Answer text; booleans are constrained to "yes" / "no" / "unknown"
    pub value: String,
    /// Lowercase kind of the originating question
    #[serde(rename = "type")]
    pub kind: String,
}

/// Structured result of analyzing one call transcript
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Brief summary of the call
    pub summary: String,
    /// Main discussion points
    pub key_points: Vec<String>,
    /// Overall sentiment of the conversation
    pub sentiment: String,
    /// Follow-up tasks mentioned or implied in the call
    pub action_items: Vec<String>,
    /// Answers keyed by question name (never by numeric question id)
    pub answers: HashMap<String, AnswerValue>,
}

impl AnalysisResult {
    /// The canonical "analysis unavailable" value returned on any internal
    /// failure. Distinguishable from a genuine result by its empty answers
    /// map: a genuine result carries one entry per processed question.
    pub fn empty() -> Self {
        Self {
            summary: String::new(),
            key_points: vec![],
            sentiment: "unknown".to_string(),
            action_items: vec![],
            answers: HashMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_result_shape() {
        let result = AnalysisResult::empty();

        assert!(result.summary.is_empty());
        assert!(result.key_points.is_empty());
        assert_eq!(result.sentiment, "unknown");
        assert!(result.action_items.is_empty());
        assert!(result.answers.is_empty());
    }

    #[test]
    fn test_answer_value_serialization() {
        let answer = AnswerValue {
            value: "yes".to_string(),
            kind: "boolean".to_string(),
        };

        let json = serde_json::to_value(&answer).unwrap();
        assert_eq!(json, serde_json::json!({"value": "yes", "type": "boolean"}));
    }
}
