pub mod analysis;
pub mod config;
pub mod llm;
pub mod models;
pub mod server;
pub mod store;

pub use analysis::{analyze_transcript, AnalysisError, AnalyzerConfig};
pub use config::AppConfig;
pub use llm::{
    resolve_model, CompletionService, OpenAiClient, OpenAiConfig, DEFAULT_ANALYSIS_MODEL,
};
pub use models::{
    process_questions, AnalysisResult, AnswerValue, ProcessedQuestion, Question, QuestionKind,
};
pub use server::{create_router, run_server, AppState};
pub use store::{CallConfig, CallConfigCache, QuestionRegistry, TranscriptStore};
