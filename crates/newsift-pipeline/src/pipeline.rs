//! The end-to-end analysis pipeline.
//!
//! Stage order for one company request: cache check, chunked fetch,
//! normalization, dedup, ranking, expansion, cache save. A cache hit
//! short-circuits everything after the check.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};

use newsift_core::{AppConfig, Article, CompanyRegistry};
use newsift_fetch::{normalize, NewsClient};
use newsift_inference::{Embedder, Summarizer};

use crate::cache::ResultCache;
use crate::dedup::dedupe;
use crate::error::PipelineError;
use crate::expand::{expand, ExpansionParams};
use crate::rank::Ranker;

/// Pipeline tunables lifted out of the full application config.
#[derive(Debug, Clone, Copy)]
pub struct PipelineConfig {
    pub dedup_threshold: f64,
    pub fetch_window_days: i64,
    pub fetch_chunk_days: i64,
    pub expansion: ExpansionParams,
}

impl PipelineConfig {
    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            dedup_threshold: config.dedup_threshold,
            fetch_window_days: config.fetch_window_days,
            fetch_chunk_days: config.fetch_chunk_days,
            expansion: ExpansionParams {
                top_n: config.top_n,
                select_k: config.select_k,
                similarity_threshold: config.similarity_threshold,
                max_extras: config.max_expansion_extras,
                sentences_per_summary: config.sentences_per_summary,
            },
        }
    }
}

/// One pipeline instance serving analysis requests for the lifetime of the
/// process. The cache lives inside it; two requests for the same company
/// only hit the provider once per process (barring concurrent misses).
pub struct NewsPipeline {
    news: NewsClient,
    embedder: Arc<dyn Embedder>,
    summarizer: Option<Arc<dyn Summarizer>>,
    registry: CompanyRegistry,
    ranker: Ranker,
    cache: ResultCache,
    config: PipelineConfig,
}

impl NewsPipeline {
    #[must_use]
    pub fn new(
        news: NewsClient,
        embedder: Arc<dyn Embedder>,
        summarizer: Option<Arc<dyn Summarizer>>,
        registry: CompanyRegistry,
        decay_rate: f64,
        config: PipelineConfig,
    ) -> Self {
        let cache = ResultCache::new(registry.names());
        let ranker = Ranker::new(decay_rate, registry.clone());
        Self {
            news,
            embedder,
            summarizer,
            registry,
            ranker,
            cache,
            config,
        }
    }

    /// Analyze a company over the default window ending today.
    ///
    /// # Errors
    ///
    /// See [`NewsPipeline::analyze_window`].
    pub async fn analyze(&self, company: &str) -> Result<Vec<Article>, PipelineError> {
        let to = Utc::now().date_naive();
        let from = to - chrono::Duration::days(self.config.fetch_window_days);
        self.analyze_window(company, from, to).await
    }

    /// Analyze a company over an explicit inclusive date window.
    ///
    /// Returns the final ranked-and-expanded article list, from cache when
    /// a previous run for this company completed.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError`] naming the failed stage: unknown company,
    /// total fetch failure, unusable provider records, a dedup embedding
    /// failure, or a window with no articles at all
    /// ([`PipelineError::EmptyRanking`]). Nothing is cached on failure.
    /// Summarizer and expansion failures degrade inside their stages and
    /// never surface here.
    pub async fn analyze_window(
        &self,
        company: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<Article>, PipelineError> {
        let company = self.registry.resolve(company)?.clone();

        if let Some(entry) = self.cache.get(&company.name).await {
            tracing::info!(company = %company.name, articles = entry.processed.len(), "cache hit");
            return Ok(entry.processed);
        }

        tracing::info!(company = %company.name, %from, %to, "cache miss, running pipeline");

        let records = self
            .news
            .fetch_chunked(&company.symbol, from, to, self.config.fetch_chunk_days)
            .await?;
        let articles = normalize(records)?;
        let raw = articles.clone();

        let unique = dedupe(
            self.embedder.as_ref(),
            articles,
            self.config.dedup_threshold,
        )
        .await?;

        let ranked = self.ranker.rank(unique, Some(&company.name));

        let final_articles = expand(
            self.embedder.as_ref(),
            self.summarizer.as_deref(),
            ranked,
            self.config.expansion,
        )
        .await?;

        tracing::info!(
            company = %company.name,
            fetched = raw.len(),
            returned = final_articles.len(),
            "pipeline complete"
        );

        self.cache
            .save(&company.name, raw, final_articles.clone())
            .await;

        Ok(final_articles)
    }

    /// Canonical names of every company this pipeline can analyze.
    #[must_use]
    pub fn company_names(&self) -> Vec<String> {
        self.registry.names()
    }
}
