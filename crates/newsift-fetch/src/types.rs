//! Provider wire types and one-shot normalization into canonical articles.
//!
//! Field-name variants (`headline` vs `title`, `summary` vs `content`,
//! epoch vs ISO dates) are resolved here, once, at ingestion. Pipeline
//! stages never see the provider shape.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::Deserialize;

use newsift_core::{Article, Scores};

use crate::error::FetchError;

/// Publication date as the provider sends it: UNIX epoch seconds or an
/// ISO-8601 string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ProviderDate {
    Epoch(i64),
    Iso(String),
}

impl ProviderDate {
    /// Parse into a UTC timestamp. Returns `None` for out-of-range epochs
    /// and unrecognized strings; callers treat that as neutral recency,
    /// not a failure.
    #[must_use]
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        match self {
            ProviderDate::Epoch(secs) => DateTime::from_timestamp(*secs, 0),
            ProviderDate::Iso(raw) => parse_iso_date(raw),
        }
    }
}

fn parse_iso_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(naive.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc());
    }
    None
}

/// One raw news record as returned by the provider.
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderArticle {
    pub id: i64,
    #[serde(alias = "title", alias = "head")]
    pub headline: Option<String>,
    #[serde(alias = "content", alias = "description", alias = "desc")]
    pub summary: Option<String>,
    #[serde(alias = "date", alias = "published", alias = "timestamp", alias = "time")]
    pub datetime: Option<ProviderDate>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// Convert raw provider records into canonical [`Article`]s.
///
/// A record with neither headline nor summary text, or with no date field
/// at all, cannot be ranked and fails the whole batch; ranking on
/// partially-located fields is never done silently. A date that is present
/// but unparseable is tolerated (`published_at = None`).
///
/// # Errors
///
/// Returns [`FetchError::Normalization`] naming the offending article id.
pub fn normalize(records: Vec<ProviderArticle>) -> Result<Vec<Article>, FetchError> {
    let mut articles = Vec::with_capacity(records.len());

    for record in records {
        let headline = record.headline.unwrap_or_default();
        let body = record.summary.unwrap_or_default();

        if headline.trim().is_empty() && body.trim().is_empty() {
            return Err(FetchError::Normalization {
                id: record.id,
                reason: "record has neither headline nor summary text".to_string(),
            });
        }

        let Some(date) = record.datetime else {
            return Err(FetchError::Normalization {
                id: record.id,
                reason: "record has no date field".to_string(),
            });
        };

        let published_at = date.to_utc();
        if published_at.is_none() {
            tracing::debug!(
                id = record.id,
                "unparseable publication date, falling back to neutral recency"
            );
        }

        articles.push(Article {
            id: record.id,
            headline,
            body,
            published_at,
            source: record.source.unwrap_or_default(),
            url: record.url,
            scores: Scores::default(),
        });
    }

    Ok(articles)
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
