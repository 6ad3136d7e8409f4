use std::sync::Arc;

use crate::analysis::AnalyzerConfig;
use crate::llm::OpenAiClient;
use crate::store::{CallConfigCache, QuestionRegistry, TranscriptStore};

/// Shared handles for the HTTP layer. All clients are constructed once at
/// startup and injected here; handlers never build their own connections.
#[derive(Clone)]
pub struct AppState {
    pub llm: Arc<OpenAiClient>,
    pub transcripts: TranscriptStore,
    pub questions: QuestionRegistry,
    pub call_configs: CallConfigCache,
    pub analyzer: AnalyzerConfig,
}

impl AppState {
    pub fn new(
        llm: Arc<OpenAiClient>,
        transcripts: TranscriptStore,
        questions: QuestionRegistry,
        call_configs: CallConfigCache,
        analyzer: AnalyzerConfig,
    ) -> Self {
        Self {
            llm,
            transcripts,
            questions,
            call_configs,
            analyzer,
        }
    }
}
