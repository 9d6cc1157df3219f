use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A news article in canonical form.
///
/// Ingestion resolves provider field-name variants (headline vs title,
/// summary vs content) exactly once; every pipeline stage after that works
/// with these fields and nothing else.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    /// Provider-assigned identifier, unique within one fetch batch.
    pub id: i64,
    pub headline: String,
    /// Summary or body text. Empty string when the provider sent none.
    pub body: String,
    /// Publication time in UTC. `None` when the provider date could not be
    /// parsed; the ranker treats that as a neutral-recency article.
    pub published_at: Option<DateTime<Utc>>,
    pub source: String,
    pub url: Option<String>,
    /// Scores attached by pipeline stages, never by ingestion.
    #[serde(default)]
    pub scores: Scores,
}

/// Per-article scores, each `None` until the owning stage has run.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Scores {
    pub recency: Option<f64>,
    pub magnitude: Option<f64>,
    pub company_relevance: Option<f64>,
    pub rank: Option<f64>,
    /// Similarity against the top-set summary. Only set on articles the
    /// expansion engine considered; top-ranked articles never carry it.
    pub similarity: Option<f64>,
}

impl Article {
    /// Text representation used for embedding: `headline + " " + body`,
    /// trimmed. Empty fields contribute nothing.
    #[must_use]
    pub fn embed_text(&self) -> String {
        format!("{} {}", self.headline, self.body).trim().to_string()
    }

    /// Combined text used by the keyword and relevance scorers.
    #[must_use]
    pub fn scoring_text(&self) -> String {
        format!("{} {}", self.headline, self.body)
    }
}
