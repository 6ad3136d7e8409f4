use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// A post-call question as configured on an agent or supplied by the caller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    /// Numeric identifier assigned by the configuration UI - never used as
    /// an answer key
    #[serde(default)]
    pub id: Option<i64>,
    /// Raw question type as configured ("Boolean", "Text", "Number", ...)
    #[serde(rename = "type")]
    pub question_type: String,
    /// Display name of the question; the sole correlation key for answers
    pub name: String,
    /// Permitted answers, only meaningful for selector questions
    #[serde(default)]
    pub options: Vec<String>,
}

impl Question {
    /// Classify this question's raw type, if recognized
    pub fn kind(&self) -> Option<QuestionKind> {
        QuestionKind::parse(&self.question_type)
    }
}

/// Closed set of supported question kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKind {
    Boolean,
    Text,
    Numerical,
    Selector,
}

impl QuestionKind {
    /// Parse a raw type string, case-insensitively. The configuration UI
    /// spells numerical questions "number"; both spellings are accepted.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.to_ascii_lowercase().as_str() {
            "boolean" => Some(Self::Boolean),
            "text" => Some(Self::Text),
            "number" | "numerical" => Some(Self::Numerical),
            "selector" => Some(Self::Selector),
            _ => None,
        }
    }

    /// Canonical lowercase name used in prompts and answer entries
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Text => "text",
            Self::Numerical => "numerical",
            Self::Selector => "selector",
        }
    }
}

/// Prompt-side representation of a classified question
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ProcessedQuestion {
    Boolean,
    Text,
    Numerical,
    Selector { options: Vec<String> },
}

/// Classify questions into the map serialized into the analysis prompt,
/// keyed by question name.
///
/// Questions with an unrecognized type are dropped from the processed set;
/// the drop is logged so misconfigured agents are visible in the service
/// logs.
pub fn process_questions(questions: &[Question]) -> BTreeMap<String, ProcessedQuestion> {
    let mut processed = BTreeMap::new();

    for question in questions {
        let entry = match question.kind() {
            Some(QuestionKind::Boolean) => ProcessedQuestion::Boolean,
            Some(QuestionKind::Text) => ProcessedQuestion::Text,
            Some(QuestionKind::Numerical) => ProcessedQuestion::Numerical,
            Some(QuestionKind::Selector) => ProcessedQuestion::Selector {
                options: question.options.clone(),
            },
            None => {
                warn!(
                    question = %question.name,
                    question_type = %question.question_type,
                    "Dropping question with unsupported type"
                );
                continue;
            }
        };
        processed.insert(question.name.clone(), entry);
    }

    processed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_question_kind() {
        assert_eq!(QuestionKind::parse("Boolean"), Some(QuestionKind::Boolean));
        assert_eq!(QuestionKind::parse("text"), Some(QuestionKind::Text));
        assert_eq!(QuestionKind::parse("Number"), Some(QuestionKind::Numerical));
        assert_eq!(
            QuestionKind::parse("numerical"),
            Some(QuestionKind::Numerical)
        );
        assert_eq!(
            QuestionKind::parse("SELECTOR"),
            Some(QuestionKind::Selector)
        );
        assert_eq!(QuestionKind::parse("rating"), None);
    }

    #[test]
    fn test_question_from_json() {
        let json = r#"{
            "id": 1744791230220,
            "type": "Boolean",
            "name": "Did the parent ask about availability at another centre?",
            "options": []
        }"#;

        let question: Question = serde_json::from_str(json).unwrap();

        assert_eq!(question.id, Some(1744791230220));
        assert_eq!(question.kind(), Some(QuestionKind::Boolean));
        assert!(question.options.is_empty());
    }

    #[test]
    fn test_process_questions_drops_unrecognized() {
        let questions = vec![
            Question {
                id: Some(1),
                question_type: "Boolean".to_string(),
                name: "Did the caller book a tour?".to_string(),
                options: vec![],
            },
            Question {
                id: Some(2),
                question_type: "Rating".to_string(),
                name: "How was the call?".to_string(),
                options: vec![],
            },
        ];

        let processed = process_questions(&questions);

        assert_eq!(processed.len(), 1);
        assert_eq!(
            processed.get("Did the caller book a tour?"),
            Some(&ProcessedQuestion::Boolean)
        );
    }

    #[test]
    fn test_processed_question_serialization() {
        let boolean = serde_json::to_value(ProcessedQuestion::Boolean).unwrap();
        assert_eq!(boolean, serde_json::json!({"type": "boolean"}));

        let selector = serde_json::to_value(ProcessedQuestion::Selector {
            options: vec!["Interested".to_string(), "Not Interested".to_string()],
        })
        .unwrap();
        assert_eq!(
            selector,
            serde_json::json!({
                "type": "selector",
                "options": ["Interested", "Not Interested"]
            })
        );
    }
}
