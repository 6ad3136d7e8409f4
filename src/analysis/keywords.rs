use serde_json::Value;

/// Question words excluded from keyword extraction
const STOP_WORDS: &[&str] = &[
    "does", "did", "have", "has", "what", "when", "where", "which", "would", "will", "from",
    "that", "this", "there", "their",
];

/// Extract topic keywords from a question name: whitespace-separated words
/// longer than 3 characters, lowercased, minus the stop-word list.
pub fn extract_keywords(question_name: &str) -> Vec<String> {
    question_name
        .split_whitespace()
        .filter(|word| word.chars().count() > 3)
        .map(|word| word.to_lowercase())
        .filter(|word| !STOP_WORDS.contains(&word.as_str()))
        .collect()
}

/// Serialize the transcript to lowercase text for keyword scanning.
/// Computed once per analysis and shared across all boolean answers.
pub fn transcript_search_text(transcript: &Value) -> String {
    serde_json::to_string(transcript)
        .unwrap_or_default()
        .to_lowercase()
}

/// Whether any keyword appears as a substring of the transcript text.
/// An empty keyword set counts as absent: a question whose name carries no
/// usable keywords cannot be confirmed as discussed.
pub fn topic_present(transcript_text: &str, keywords: &[String]) -> bool {
    keywords.iter().any(|kw| transcript_text.contains(kw))
}

/// Normalize a model-provided boolean value into the closed vocabulary
/// "yes" / "no" / "unknown".
pub fn normalize_boolean_value(raw: &str) -> &'static str {
    match raw.trim().to_lowercase().as_str() {
        "yes" => "yes",
        "no" => "no",
        "unknown" => "unknown",
        "true" | "1" => "yes",
        "false" | "0" => "no",
        _ => "unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_keywords_filters_short_and_stop_words() {
        let keywords = extract_keywords("Did the customer request a refund");

        assert_eq!(keywords, vec!["customer", "request", "refund"]);
    }

    #[test]
    fn test_extract_keywords_lowercases() {
        let keywords = extract_keywords("Was a Callback Scheduled");

        assert_eq!(keywords, vec!["callback", "scheduled"]);
    }

    #[test]
    fn test_topic_present_in_transcript() {
        let transcript =
            serde_json::json!(["Parent asked about weekend availability at the downtown location."]);
        let text = transcript_search_text(&transcript);

        let present = extract_keywords("Did the parent ask about weekend availability");
        assert!(topic_present(&text, &present));

        let absent = extract_keywords("Did the customer request a refund");
        assert!(!topic_present(&text, &absent));
    }

    #[test]
    fn test_topic_absent_for_empty_keywords() {
        assert!(!topic_present("anything at all", &[]));
    }

    #[test]
    fn test_transcript_search_text_lowercases() {
        let transcript = serde_json::json!({"turns": ["Hello WORLD"]});

        assert!(transcript_search_text(&transcript).contains("hello world"));
    }

    #[test]
    fn test_normalize_boolean_vocabulary() {
        assert_eq!(normalize_boolean_value("yes"), "yes");
        assert_eq!(normalize_boolean_value("no"), "no");
        assert_eq!(normalize_boolean_value("unknown"), "unknown");
        assert_eq!(normalize_boolean_value("true"), "yes");
        assert_eq!(normalize_boolean_value("1"), "yes");
        assert_eq!(normalize_boolean_value("false"), "no");
        assert_eq!(normalize_boolean_value("0"), "no");
        assert_eq!(normalize_boolean_value(" YES "), "yes");
        assert_eq!(normalize_boolean_value("definitely"), "unknown");
        assert_eq!(normalize_boolean_value(""), "unknown");
    }
}
