use thiserror::Error;

/// Errors from the embedding and summarization services.
#[derive(Debug, Error)]
pub enum InferenceError {
    /// Embedding service failure. Fatal to dedup; recoverable for the
    /// expansion step, which degrades to the plain ranked top set.
    #[error("embed error: {0}")]
    Embed(String),

    /// Summarization failure. Always recoverable via the extractive
    /// fallback.
    #[error("summarize error: {0}")]
    Summarize(String),
}
