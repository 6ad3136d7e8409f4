/// Model used for post-call analysis when none is configured
pub const DEFAULT_ANALYSIS_MODEL: &str = "gpt-4o-mini";

/// Provider aliases as stored on agent configurations, mapped to concrete
/// model identifiers
const MODEL_ALIASES: &[(&str, &str)] = &[
    (
        "TOGETHER_AI_Default",
        "meta-llama/Meta-Llama-3.1-8B-Instruct-Turbo",
    ),
    (
        "TOGETHER_AI_Llama4",
        "meta-llama/Llama-4-Maverick-17B-128E-Instruct-FP8",
    ),
    (
        "TOGETHER_AI_Llama4_Scout",
        "meta-llama/Llama-4-Scout-17B-16E-Instruct",
    ),
    ("TOGETHER_AI_Gemma", "google/gemma-3-27b-it"),
    ("DEEPSEEK_Default", "deepseek-chat"),
    ("GROQ_Default", "llama-3.3-70b-versatile"),
    ("ANTHROPIC_Default", "claude-3-5-haiku-20241022"),
    ("ANTHROPIC_3_7_Sonnet", "claude-3-7-sonnet-20250219"),
    ("GEMINI_Default", "models/gemini-2.0-flash"),
    ("GEMINI_2_FLASH_LITE", "models/gemini-2.0-flash-lite"),
    ("OPENAI_Default", "gpt-4o"),
    ("OPENAI_GPT4o_Mini", "gpt-4o-mini-2024-07-18"),
    ("OPENAI_GPT4_1", "gpt-4.1-2025-04-14"),
    ("OPENAI_GPT4_1_Mini", "gpt-4.1-mini-2025-04-14"),
    ("OPENAI_GPT4_1_Nano", "gpt-4.1-nano-2025-04-14"),
];

/// Resolve a model alias to its concrete identifier. Strings that are not
/// aliases are assumed to already be model identifiers and pass through
/// unchanged.
pub fn resolve_model(name: &str) -> &str {
    MODEL_ALIASES
        .iter()
        .find(|(alias, _)| *alias == name)
        .map(|(_, model)| *model)
        .unwrap_or(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_alias() {
        assert_eq!(resolve_model("OPENAI_Default"), "gpt-4o");
        assert_eq!(resolve_model("GROQ_Default"), "llama-3.3-70b-versatile");
    }

    #[test]
    fn test_unknown_name_passes_through() {
        assert_eq!(resolve_model("gpt-4o-mini"), "gpt-4o-mini");
    }
}
