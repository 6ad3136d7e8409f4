use std::collections::BTreeMap;

use serde_json::Value;

use crate::models::ProcessedQuestion;

/// System prompt for transcript analysis (answer vocabulary and output
/// shape are non-negotiable)
pub const ANALYSIS_SYSTEM_PROMPT: &str = r#"You are an expert call transcript analyzer. Your task is to analyze call transcripts and answer specific questions based on the conversation content.

You will receive:
1. A call transcript
2. A map of questions keyed by question name, each with a "type" and, for selector questions, an "options" array.

Question Types & Answer Requirements

Boolean
- Answer ONLY with "yes", "no", or "unknown"
- Answer "unknown" if the topic is not discussed in the transcript at all
- Answer "no" ONLY if there is explicit evidence of a negative response
- Answer "yes" ONLY if there is explicit evidence of a positive response
- DO NOT default to "no" just because you don't see evidence of "yes"

Text
- Provide a descriptive, informative answer
- Use information directly from the transcript
- Keep answers concise but complete
- Use "unknown" if the topic is not discussed

Numerical
- Provide only numbers (integers or decimals)
- Extract specific numerical values mentioned in the call
- Use "unknown" if no relevant numbers are mentioned

Selector
- Choose ONLY from the provided options array
- Select the option that best matches the transcript content
- Use exact option text as provided
- Use "unknown" if none of the options clearly match the discussion

Unknown Answers
- If a topic is not discussed in the transcript, ALWAYS respond with "unknown"
- Do not make assumptions or inferences about topics not explicitly discussed
- When in doubt, use "unknown" rather than guessing

Output Format
Always respond with valid JSON in exactly this structure:
{
    "summary": "<A brief, informative summary of the call>",
    "key_points": ["<Main discussion points>"],
    "sentiment": "<positive | neutral | negative>",
    "action_items": ["<Follow-up tasks if any>"],
    "answers": {
        "<question name>": {
            "value": "<answer formatted according to its type>",
            "type": "<boolean | text | numerical | selector>"
        }
    }
}
CRITICAL: Always use the question name as the key in the answers object, NEVER a numeric question id.

Guidelines:
- Base all answers strictly on transcript content
- Do not make assumptions or inferences beyond what's clearly stated
- For sentiment, consider the overall tone and outcome of the conversation
- Include specific action items only if explicitly mentioned or clearly implied
- Ensure JSON is properly formatted and valid
- Read the transcript carefully and match exact phrases or verbatim quotes or clear intent"#;

/// Build the user prompt embedding the transcript and the processed
/// question map
pub fn build_analysis_prompt(
    transcript: &Value,
    questions: &BTreeMap<String, ProcessedQuestion>,
) -> String {
    let transcript_json =
        serde_json::to_string_pretty(transcript).unwrap_or_else(|_| "null".to_string());
    let questions_json =
        serde_json::to_string_pretty(questions).unwrap_or_else(|_| "{}".to_string());

    let mut prompt = String::new();
    prompt.push_str("Analyze the following call transcription:\n\n");
    prompt.push_str(&transcript_json);
    prompt.push_str("\n\nPlease answer these questions according to the given data types:\n\n");
    prompt.push_str(&questions_json);
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Question, process_questions};

    #[test]
    fn test_build_analysis_prompt_embeds_inputs() {
        let transcript = serde_json::json!(["Agent: hello", "Caller: hi"]);
        let questions = vec![Question {
            id: Some(7),
            question_type: "Selector".to_string(),
            name: "Call outcome?".to_string(),
            options: vec!["Interested".to_string(), "Unclear".to_string()],
        }];
        let processed = process_questions(&questions);

        let prompt = build_analysis_prompt(&transcript, &processed);

        assert!(prompt.contains("Agent: hello"));
        assert!(prompt.contains("Call outcome?"));
        assert!(prompt.contains("\"selector\""));
        assert!(prompt.contains("Interested"));
        // The numeric id must never reach the model
        assert!(!prompt.contains("7"));
    }

    #[test]
    fn test_system_prompt_mandates_output_keys() {
        for key in [
            "summary",
            "key_points",
            "sentiment",
            "action_items",
            "answers",
        ] {
            assert!(ANALYSIS_SYSTEM_PROMPT.contains(key), "missing {key}");
        }
    }
}
