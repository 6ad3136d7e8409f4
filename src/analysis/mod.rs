pub mod analyzer;
pub mod keywords;
pub mod response;

pub use analyzer::*;
pub use keywords::*;
pub use response::*;

use thiserror::Error;

/// Internal failure modes of one analysis attempt. All of them collapse to
/// the canonical empty result at the analyzer boundary; the distinction
/// exists for logs and tests, not for callers.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The completion request itself failed (network, auth, rate limit)
    #[error("completion request failed: {0}")]
    Transport(anyhow::Error),
    /// The response was not parseable as the expected JSON object
    #[error("malformed model response: {0}")]
    Malformed(String),
    /// The response parsed but is missing required top-level keys
    #[error("model response missing required keys: {0}")]
    Incomplete(String),
}
