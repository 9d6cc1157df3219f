use thiserror::Error;

use newsift_core::ConfigError;
use newsift_fetch::FetchError;
use newsift_inference::InferenceError;

/// Stage-tagged pipeline failures.
///
/// The caller receives either a complete article list or one of these
/// identifying the stage that failed — never a silently truncated result.
/// Summarizer failures and partial fetch-chunk failures never appear here;
/// they are absorbed by their stages.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("company resolution failed: {0}")]
    Company(#[from] ConfigError),

    #[error("fetch stage failed: {0}")]
    Fetch(FetchError),

    /// Expected fields could not be located in the input. Always fatal;
    /// the pipeline never ranks on partial data.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The dedup stage could not embed its batch. Fatal to the request:
    /// falling back to identity-only dedup would change downstream
    /// article volumes unpredictably.
    #[error("dedup stage failed: {0}")]
    Dedup(InferenceError),

    /// Ranking produced nothing for the expansion step to work from.
    #[error("no ranked articles to expand from")]
    EmptyRanking,
}

impl From<FetchError> for PipelineError {
    fn from(err: FetchError) -> Self {
        match err {
            // Missing required fields is a configuration problem, not a
            // provider outage.
            FetchError::Normalization { .. } => PipelineError::Configuration(err.to_string()),
            other => PipelineError::Fetch(other),
        }
    }
}
