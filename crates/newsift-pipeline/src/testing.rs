//! Deterministic embedder/summarizer stubs shared by unit tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use newsift_core::{Article, Scores};
use newsift_inference::{Embedder, InferenceError, Summarizer};

/// Embedder returning a configured vector per known text, counting calls.
/// Unknown texts get a hash-derived one-hot vector so they never cluster
/// with anything known.
pub(crate) struct StubEmbedder {
    known: Vec<(String, Vec<f32>)>,
    calls: AtomicUsize,
}

impl StubEmbedder {
    pub(crate) fn new(known: Vec<(String, Vec<f32>)>) -> Self {
        Self {
            known,
            calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Embedder for StubEmbedder {
    async fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, InferenceError> {
        use std::hash::{DefaultHasher, Hash, Hasher};

        self.calls.fetch_add(1, Ordering::SeqCst);
        let dim = self.known.first().map_or(16, |(_, v)| v.len());
        Ok(texts
            .iter()
            .map(|text| {
                self.known.iter().find(|(t, _)| t == text).map_or_else(
                    || {
                        // Deterministic pseudo-one-hot so unrelated texts
                        // stay far apart and identical texts coincide.
                        let mut hasher = DefaultHasher::new();
                        text.hash(&mut hasher);
                        let mut v = vec![0.0f32; dim];
                        #[allow(clippy::cast_possible_truncation)]
                        let slot = (hasher.finish() as usize) % dim;
                        v[slot] = 1.0;
                        v
                    },
                    |(_, v)| v.clone(),
                )
            })
            .collect())
    }
}

/// Embedder that always fails.
pub(crate) struct FailingEmbedder;

#[async_trait]
impl Embedder for FailingEmbedder {
    async fn embed(&self, _texts: &[String]) -> Result<Vec<Vec<f32>>, InferenceError> {
        Err(InferenceError::Embed("stub embed failure".to_string()))
    }
}

/// Summarizer returning a fixed summary.
pub(crate) struct StubSummarizer(pub(crate) String);

#[async_trait]
impl Summarizer for StubSummarizer {
    async fn summarize(&self, _articles: &[Article]) -> Result<String, InferenceError> {
        Ok(self.0.clone())
    }
}

/// Summarizer that always fails.
pub(crate) struct FailingSummarizer;

#[async_trait]
impl Summarizer for FailingSummarizer {
    async fn summarize(&self, _articles: &[Article]) -> Result<String, InferenceError> {
        Err(InferenceError::Summarize("stub summarize failure".to_string()))
    }
}

pub(crate) fn article(id: i64, headline: &str, body: &str) -> Article {
    Article {
        id,
        headline: headline.to_string(),
        body: body.to_string(),
        published_at: None,
        source: "test".to_string(),
        url: None,
        scores: Scores::default(),
    }
}
