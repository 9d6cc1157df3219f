//! HTTP client for the company-news provider.

use std::collections::HashSet;
use std::time::Duration;

use chrono::NaiveDate;
use futures::future::join_all;

use crate::chunk::split_window;
use crate::error::FetchError;
use crate::retry::retry_with_backoff;
use crate::types::ProviderArticle;

/// News provider API client.
///
/// One instance per pipeline; cheap to clone (the inner reqwest client is
/// reference-counted).
#[derive(Debug, Clone)]
pub struct NewsClient {
    client: reqwest::Client,
    base_url: String,
    token: String,
    max_retries: u32,
    retry_backoff_base_ms: u64,
}

impl NewsClient {
    /// Create a client against the given provider base URL.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Http`] if the underlying reqwest client
    /// cannot be constructed.
    pub fn new(
        base_url: &str,
        token: &str,
        request_timeout_secs: u64,
        max_retries: u32,
        retry_backoff_base_ms: u64,
    ) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(request_timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
            max_retries,
            retry_backoff_base_ms,
        })
    }

    /// Fetch raw news records for one symbol over one inclusive date range.
    ///
    /// This is a single provider request with no retry; use
    /// [`NewsClient::fetch_chunked`] for the windowed, retried path.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] on network failure, non-2xx status, or a
    /// response body that does not parse as a news array.
    pub async fn fetch_company_news(
        &self,
        symbol: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<ProviderArticle>, FetchError> {
        let url = format!("{}/company-news", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("symbol", symbol),
                ("from", &from.to_string()),
                ("to", &to.to_string()),
                ("token", &self.token),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::UnexpectedStatus {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| FetchError::Deserialize {
            context: format!("company-news for {symbol} {from}..{to}"),
            source: e,
        })
    }

    /// Fetch a date window split into chunks issued concurrently.
    ///
    /// Each chunk is retried on transient errors. Failed chunks are logged
    /// and skipped so the request can proceed on partial data; if every
    /// chunk fails the whole fetch fails. Results are merged with an
    /// order-preserving identity dedup on article id — chunk completion
    /// order is not deterministic and does not need to be, since dedup and
    /// ranking impose the final order downstream.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::InvalidWindow`] for a malformed window and
    /// [`FetchError::AllChunksFailed`] when no chunk succeeded.
    pub async fn fetch_chunked(
        &self,
        symbol: &str,
        from: NaiveDate,
        to: NaiveDate,
        chunk_days: i64,
    ) -> Result<Vec<ProviderArticle>, FetchError> {
        let chunks = split_window(from, to, chunk_days)?;
        let chunk_count = chunks.len();

        let fetches = chunks.into_iter().map(|(start, end)| async move {
            let result = retry_with_backoff(self.max_retries, self.retry_backoff_base_ms, || {
                self.fetch_company_news(symbol, start, end)
            })
            .await;
            (start, end, result)
        });

        let mut merged: Vec<ProviderArticle> = Vec::new();
        let mut seen_ids: HashSet<i64> = HashSet::new();
        let mut failed = 0usize;
        let mut last_error: Option<FetchError> = None;

        for (start, end, result) in join_all(fetches).await {
            match result {
                Ok(records) => {
                    tracing::debug!(
                        symbol,
                        from = %start,
                        to = %end,
                        count = records.len(),
                        "fetched news chunk"
                    );
                    merged.extend(records.into_iter().filter(|r| seen_ids.insert(r.id)));
                }
                Err(e) => {
                    tracing::warn!(
                        symbol,
                        from = %start,
                        to = %end,
                        error = %e,
                        "news chunk failed, continuing with partial data"
                    );
                    failed += 1;
                    last_error = Some(e);
                }
            }
        }

        if failed == chunk_count {
            let last_error = last_error
                .map_or_else(|| "no chunks issued".to_string(), |e| e.to_string());
            return Err(FetchError::AllChunksFailed {
                symbol: symbol.to_string(),
                chunks: chunk_count,
                last_error,
            });
        }

        if failed > 0 {
            tracing::warn!(
                symbol,
                failed,
                total = chunk_count,
                "proceeding with partial fetch results"
            );
        }

        Ok(merged)
    }
}
