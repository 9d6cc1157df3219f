//! Process-lifetime result cache keyed by canonical company name.
//!
//! The key set is fixed at construction from the company registry; a save
//! replaces the whole entry for its key. There is no eviction and no TTL,
//! a restart is the only invalidation.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use newsift_core::Article;

/// One company's cached pipeline run.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// Normalized articles as fetched, before dedup and ranking.
    pub raw: Vec<Article>,
    /// Final pipeline output for the company.
    pub processed: Vec<Article>,
    pub inserted_at: DateTime<Utc>,
}

/// In-memory cache pre-seeded with every registered company key.
///
/// Saving under a key that was not seeded is a programming error upstream
/// (the pipeline resolves names first) and is stored anyway.
pub struct ResultCache {
    entries: RwLock<HashMap<String, Option<CacheEntry>>>,
}

impl ResultCache {
    #[must_use]
    pub fn new(keys: Vec<String>) -> Self {
        let entries = keys.into_iter().map(|k| (k, None)).collect();
        Self {
            entries: RwLock::new(entries),
        }
    }

    /// The cached processed articles for `key`, if a run has completed.
    pub async fn get(&self, key: &str) -> Option<CacheEntry> {
        self.entries.read().await.get(key).and_then(Clone::clone)
    }

    /// Replace the entry for `key` with a fresh run's results.
    pub async fn save(&self, key: &str, raw: Vec<Article>, processed: Vec<Article>) {
        let entry = CacheEntry {
            raw,
            processed,
            inserted_at: Utc::now(),
        };
        self.entries
            .write()
            .await
            .insert(key.to_string(), Some(entry));
    }

    /// Keys currently present, seeded or saved.
    pub async fn keys(&self) -> Vec<String> {
        self.entries.read().await.keys().cloned().collect()
    }
}
