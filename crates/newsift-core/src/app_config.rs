use std::path::PathBuf;

/// Application configuration, sourced from environment variables.
#[derive(Clone)]
pub struct AppConfig {
    /// Base URL of the news provider API.
    pub provider_url: String,
    /// API token for the news provider.
    pub provider_token: String,
    /// Base URL of the text-embeddings-inference service.
    pub tei_url: String,
    /// Base URL of the summarization service. `None` means summarization
    /// is unavailable and the extractive fallback is used directly.
    pub summarizer_url: Option<String>,
    pub companies_path: PathBuf,
    pub log_level: String,

    // Ranker tunables.
    pub decay_rate: f64,

    // Dedup tunables.
    /// Cosine-similarity cutoff above which two articles are considered
    /// near-duplicates.
    pub dedup_threshold: f64,

    // Expansion tunables.
    pub top_n: usize,
    pub select_k: usize,
    pub similarity_threshold: f64,
    /// Hard cap on above-threshold extras the expansion step may add
    /// beyond `select_k`.
    pub max_expansion_extras: usize,
    pub sentences_per_summary: usize,

    // Fetch tunables.
    pub fetch_window_days: i64,
    pub fetch_chunk_days: i64,
    pub request_timeout_secs: u64,
    pub max_retries: u32,
    pub retry_backoff_base_ms: u64,
    pub summarizer_timeout_secs: u64,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("provider_url", &self.provider_url)
            .field("provider_token", &"[redacted]")
            .field("tei_url", &self.tei_url)
            .field("summarizer_url", &self.summarizer_url)
            .field("companies_path", &self.companies_path)
            .field("log_level", &self.log_level)
            .field("decay_rate", &self.decay_rate)
            .field("dedup_threshold", &self.dedup_threshold)
            .field("top_n", &self.top_n)
            .field("select_k", &self.select_k)
            .field("similarity_threshold", &self.similarity_threshold)
            .field("max_expansion_extras", &self.max_expansion_extras)
            .field("sentences_per_summary", &self.sentences_per_summary)
            .field("fetch_window_days", &self.fetch_window_days)
            .field("fetch_chunk_days", &self.fetch_chunk_days)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("max_retries", &self.max_retries)
            .field("retry_backoff_base_ms", &self.retry_backoff_base_ms)
            .field("summarizer_timeout_secs", &self.summarizer_timeout_secs)
            .finish()
    }
}
