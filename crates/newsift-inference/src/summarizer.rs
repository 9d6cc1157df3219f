//! Summarization capability, its HTTP implementation, and the extractive
//! fallback the expansion step uses when the service is absent or fails.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use newsift_core::Article;

use crate::error::InferenceError;

/// Multi-article summarization capability. Failable by design; callers
/// must be prepared to fall back to [`extractive_summary`].
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Produce one summary text representing the given articles.
    ///
    /// # Errors
    ///
    /// Returns [`InferenceError::Summarize`] on service failure or timeout.
    async fn summarize(&self, articles: &[Article]) -> Result<String, InferenceError>;
}

/// HTTP client for a JSON summarization endpoint.
pub struct LlmSummarizer {
    client: reqwest::Client,
    url: String,
}

#[derive(Serialize)]
struct SummarizeRequest<'a> {
    articles: Vec<SummarizeArticle<'a>>,
}

#[derive(Serialize)]
struct SummarizeArticle<'a> {
    headline: &'a str,
    body: &'a str,
    source: &'a str,
}

#[derive(Deserialize)]
struct SummarizeResponse {
    summary: String,
}

impl LlmSummarizer {
    /// Create a summarizer client with a hard per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`InferenceError::Summarize`] if the HTTP client cannot be
    /// constructed.
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self, InferenceError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| InferenceError::Summarize(format!("client build failed: {e}")))?;
        Ok(Self {
            client,
            url: format!("{}/summarize", base_url.trim_end_matches('/')),
        })
    }
}

#[async_trait]
impl Summarizer for LlmSummarizer {
    async fn summarize(&self, articles: &[Article]) -> Result<String, InferenceError> {
        let request = SummarizeRequest {
            articles: articles
                .iter()
                .map(|a| SummarizeArticle {
                    headline: &a.headline,
                    body: &a.body,
                    source: &a.source,
                })
                .collect(),
        };

        let response = self
            .client
            .post(&self.url)
            .json(&request)
            .send()
            .await
            .map_err(|e| InferenceError::Summarize(format!("summarize request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(InferenceError::Summarize(format!(
                "summarizer returned status {}",
                response.status()
            )));
        }

        let parsed: SummarizeResponse = response.json().await.map_err(|e| {
            InferenceError::Summarize(format!("summarizer response parse error: {e}"))
        })?;

        if parsed.summary.trim().is_empty() {
            return Err(InferenceError::Summarize(
                "summarizer returned an empty summary".to_string(),
            ));
        }

        Ok(parsed.summary)
    }
}

/// Extractive fallback summary: the first `sentences_per_article`
/// sentences of each article's body (or its headline when the body is
/// empty), concatenated.
///
/// Sentence splitting is deliberately naive — this text only seeds an
/// embedding, it is never shown to users.
#[must_use]
pub fn extractive_summary(articles: &[Article], sentences_per_article: usize) -> String {
    let mut parts = Vec::with_capacity(articles.len());

    for article in articles {
        let text = if article.body.trim().is_empty() {
            article.headline.clone()
        } else {
            leading_sentences(&article.body, sentences_per_article)
        };
        if !text.is_empty() {
            parts.push(text);
        }
    }

    parts.join(" ")
}

fn leading_sentences(text: &str, count: usize) -> String {
    let sentences: Vec<&str> = text
        .split('.')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .take(count)
        .collect();

    if sentences.is_empty() {
        return String::new();
    }
    let mut summary = sentences.join(". ");
    summary.push('.');
    summary
}
