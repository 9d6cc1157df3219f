use thiserror::Error;

/// Errors returned by the news provider client.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// A raw record is missing fields the pipeline cannot rank without.
    #[error("normalization error for article {id}: {reason}")]
    Normalization { id: i64, reason: String },

    /// Every date chunk of a windowed fetch failed. Partial chunk failures
    /// are tolerated and logged; total failure aborts the request.
    #[error("all {chunks} date chunks failed for symbol {symbol}; last error: {last_error}")]
    AllChunksFailed {
        symbol: String,
        chunks: usize,
        last_error: String,
    },

    #[error("invalid fetch window: {0}")]
    InvalidWindow(String),
}
