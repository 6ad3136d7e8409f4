use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use callsight::{
    analyze_transcript, resolve_model, AnalyzerConfig, AppConfig, AppState, CallConfigCache,
    OpenAiClient, OpenAiConfig, Question, QuestionRegistry, TranscriptStore,
};

#[derive(Parser)]
#[command(name = "callsight")]
#[command(author, version, about = "Post-call transcript analysis service", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP analysis service
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "8080")]
        port: u16,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Analyze a transcript file against a questions file and print the
    /// result
    Analyze {
        /// Transcript file (JSON, as stored by the recording pipeline)
        #[arg(short, long)]
        transcript: PathBuf,

        /// Questions file (JSON array of typed questions)
        #[arg(short, long)]
        questions: PathBuf,

        /// Model alias or identifier (defaults to ANALYSIS_OPENAI_MODEL)
        #[arg(short, long)]
        model: Option<String>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port, verbose } => {
            setup_logging(verbose);
            serve(port).await
        }
        Commands::Analyze {
            transcript,
            questions,
            model,
            verbose,
        } => {
            setup_logging(verbose);
            analyze_files(&transcript, &questions, model).await
        }
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

async fn serve(port: u16) -> Result<()> {
    let config = AppConfig::from_env()?;

    let call_configs = CallConfigCache::connect(&config.redis_url).await?;
    let llm = Arc::new(OpenAiClient::new(config.llm.clone()));
    let state = AppState::new(
        llm,
        TranscriptStore::new(&config.transcript_store_url),
        QuestionRegistry::new(&config.agent_registry_url),
        call_configs,
        AnalyzerConfig {
            model: config.analysis_model.clone(),
            ..Default::default()
        },
    );

    info!(model = %config.analysis_model, "Starting analysis service");
    callsight::run_server(state, port).await
}

async fn analyze_files(
    transcript_path: &Path,
    questions_path: &Path,
    model: Option<String>,
) -> Result<()> {
    let transcript = load_json(transcript_path).context("Failed to load transcript")?;
    let questions: Vec<Question> =
        serde_json::from_value(load_json(questions_path).context("Failed to load questions")?)
            .context("Questions file is not an array of typed questions")?;

    info!(
        "Loaded transcript from {:?}, {} questions",
        transcript_path,
        questions.len()
    );

    let client = OpenAiClient::new(OpenAiConfig::from_env()?);
    let mut config = AnalyzerConfig {
        model: std::env::var("ANALYSIS_OPENAI_MODEL")
            .unwrap_or_else(|_| AnalyzerConfig::default().model),
        ..Default::default()
    };
    if let Some(model) = model {
        config.model = resolve_model(&model).to_string();
    }

    let analysis = analyze_transcript(&client, &config, &transcript, &questions).await;

    println!("{}", serde_json::to_string_pretty(&analysis)?);
    Ok(())
}

fn load_json(path: &Path) -> Result<serde_json::Value> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {:?}", path))?;
    serde_json::from_str(&content).with_context(|| format!("Invalid JSON in {:?}", path))
}
