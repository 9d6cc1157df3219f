//! Expansion beyond the top-ranked set.
//!
//! The top articles are summarized into one text, the summary is embedded
//! alongside every remaining article, and the remainder is re-ordered by
//! semantic similarity to that summary. The output is the top set followed
//! by the best of the rest.
//!
//! Every inference failure in this stage degrades rather than fails: a
//! broken summarizer falls back to an extractive summary, a broken
//! embedder collapses the result to the top set alone.

use newsift_core::Article;
use newsift_inference::{extractive_summary, Embedder, Summarizer};

use crate::cluster::cosine_similarity;
use crate::error::PipelineError;

/// Knobs for one expansion run, taken from the application config.
#[derive(Debug, Clone, Copy)]
pub struct ExpansionParams {
    /// Size of the top set the summary is built from.
    pub top_n: usize,
    /// Remaining articles always carried over, most similar first.
    pub select_k: usize,
    /// Similarity floor for extras beyond `select_k`. Strictly above.
    pub similarity_threshold: f64,
    /// Hard cap on above-threshold extras.
    pub max_extras: usize,
    /// Sentences per article for the extractive fallback summary.
    pub sentences_per_summary: usize,
}

/// Expand a ranked article list: the first `top_n` articles stay in place,
/// the rest are re-ordered by similarity to a summary of the top set, and
/// `select_k` of them plus any above-threshold extras are appended.
///
/// Articles the expansion considered carry `scores.similarity`; the top
/// set never does.
///
/// # Errors
///
/// Returns [`PipelineError::EmptyRanking`] when `ranked` is empty. All
/// other failures degrade to returning the top set.
pub async fn expand(
    embedder: &dyn Embedder,
    summarizer: Option<&dyn Summarizer>,
    ranked: Vec<Article>,
    params: ExpansionParams,
) -> Result<Vec<Article>, PipelineError> {
    if ranked.is_empty() {
        return Err(PipelineError::EmptyRanking);
    }

    let split = params.top_n.min(ranked.len());
    let mut ranked = ranked;
    let remaining: Vec<Article> = ranked.split_off(split);
    let top = ranked;

    if remaining.is_empty() {
        return Ok(top);
    }

    let summary = summary_text(summarizer, &top, params.sentences_per_summary).await;
    if summary.trim().is_empty() {
        tracing::warn!("empty top-set summary, skipping expansion");
        return Ok(top);
    }

    let mut texts = Vec::with_capacity(remaining.len() + 1);
    texts.push(summary);
    texts.extend(remaining.iter().map(Article::embed_text));

    let embeddings = match embedder.embed(&texts).await {
        Ok(e) => e,
        Err(err) => {
            tracing::warn!(error = %err, "expansion embedding failed, returning top set only");
            return Ok(top);
        }
    };

    let (summary_embedding, rest) = match embeddings.split_first() {
        Some(parts) => parts,
        None => {
            tracing::warn!("embedding service returned no vectors, returning top set only");
            return Ok(top);
        }
    };

    let mut scored: Vec<Article> = remaining;
    for (article, embedding) in scored.iter_mut().zip(rest) {
        article.scores.similarity = Some(cosine_similarity(summary_embedding, embedding));
    }

    // Stable sort: equal similarities keep rank order.
    scored.sort_by(|a, b| {
        b.scores
            .similarity
            .partial_cmp(&a.scores.similarity)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut result = top;
    let mut extras_taken = 0usize;
    let mut extras_over_cap = 0usize;

    for (position, article) in scored.into_iter().enumerate() {
        if position < params.select_k {
            result.push(article);
            continue;
        }
        let similarity = article.scores.similarity.unwrap_or(0.0);
        if similarity > params.similarity_threshold {
            if extras_taken < params.max_extras {
                result.push(article);
                extras_taken += 1;
            } else {
                extras_over_cap += 1;
            }
        }
    }

    if extras_over_cap > 0 {
        tracing::warn!(
            dropped = extras_over_cap,
            cap = params.max_extras,
            threshold = params.similarity_threshold,
            "above-threshold extras exceeded the cap"
        );
    }

    Ok(dedupe_by_id(result))
}

async fn summary_text(
    summarizer: Option<&dyn Summarizer>,
    top: &[Article],
    sentences_per_summary: usize,
) -> String {
    if let Some(summarizer) = summarizer {
        match summarizer.summarize(top).await {
            Ok(summary) => return summary,
            Err(err) => {
                tracing::warn!(error = %err, "summarizer failed, using extractive fallback");
            }
        }
    }
    extractive_summary(top, sentences_per_summary)
}

fn dedupe_by_id(articles: Vec<Article>) -> Vec<Article> {
    let mut seen = std::collections::HashSet::new();
    articles.into_iter().filter(|a| seen.insert(a.id)).collect()
}

#[cfg(test)]
#[path = "expand_test.rs"]
mod tests;
