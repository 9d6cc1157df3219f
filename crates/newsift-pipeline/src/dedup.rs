//! Near-duplicate removal: identity pass, then semantic clustering.

use std::collections::HashSet;

use newsift_core::Article;
use newsift_inference::Embedder;

use crate::cluster::agglomerative_labels;
use crate::error::PipelineError;

/// Deduplicate a batch of articles.
///
/// Two passes:
/// 1. Identity: drop any article whose id has already been seen, first
///    occurrence wins, order preserved.
/// 2. Semantic: embed `headline + " " + body` for every survivor in one
///    batched call, cluster with average-linkage agglomerative clustering
///    over cosine distance (merge threshold `1 - threshold`), and keep
///    the first article of each cluster in input order.
///
/// Zero or one surviving articles are returned without touching the
/// embedding service.
///
/// # Errors
///
/// Returns [`PipelineError::Dedup`] if embedding fails. There is no
/// identity-only fallback: silently skipping the semantic pass would
/// change downstream article volumes unpredictably.
pub async fn dedupe(
    embedder: &dyn Embedder,
    articles: Vec<Article>,
    threshold: f64,
) -> Result<Vec<Article>, PipelineError> {
    let mut seen_ids: HashSet<i64> = HashSet::new();
    let mut unique: Vec<Article> = articles
        .into_iter()
        .filter(|a| seen_ids.insert(a.id))
        .collect();

    if unique.len() <= 1 {
        return Ok(unique);
    }

    let texts: Vec<String> = unique.iter().map(Article::embed_text).collect();
    let embeddings = embedder.embed(&texts).await.map_err(PipelineError::Dedup)?;

    let labels = agglomerative_labels(&embeddings, 1.0 - threshold);

    let before = unique.len();
    let mut seen_clusters: HashSet<usize> = HashSet::new();
    let mut idx = 0usize;
    unique.retain(|_| {
        let keep = seen_clusters.insert(labels[idx]);
        idx += 1;
        keep
    });

    tracing::debug!(
        before,
        after = unique.len(),
        threshold,
        "semantic dedup complete"
    );

    Ok(unique)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{article, FailingEmbedder, StubEmbedder};

    fn near_duplicate_embedder() -> StubEmbedder {
        StubEmbedder::new(vec![
            (
                "Acme beats earnings quarterly results".to_string(),
                vec![1.0, 0.0, 0.0, 0.01],
            ),
            (
                "Acme beats earnings!! quarterly results".to_string(),
                vec![0.999, 0.01, 0.0, 0.0],
            ),
            (
                "Weather report sunny all week".to_string(),
                vec![0.0, 1.0, 0.0, 0.0],
            ),
        ])
    }

    #[tokio::test]
    async fn empty_input_makes_no_embed_call() {
        let embedder = StubEmbedder::new(vec![]);
        let result = dedupe(&embedder, vec![], 0.76).await.unwrap();
        assert!(result.is_empty());
        assert_eq!(embedder.call_count(), 0, "embedding an empty batch is undefined behavior");
    }

    #[tokio::test]
    async fn singleton_input_returned_unchanged_without_embedding() {
        let embedder = StubEmbedder::new(vec![]);
        let input = vec![article(1, "Acme beats earnings", "quarterly results")];
        let result = dedupe(&embedder, input, 0.76).await.unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, 1);
        assert_eq!(embedder.call_count(), 0);
    }

    #[tokio::test]
    async fn identity_pass_keeps_first_occurrence() {
        let embedder = near_duplicate_embedder();
        let input = vec![
            article(1, "Acme beats earnings", "quarterly results"),
            article(1, "Acme beats earnings!!", "quarterly results"),
        ];
        let result = dedupe(&embedder, input, 0.76).await.unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].headline, "Acme beats earnings");
        assert_eq!(embedder.call_count(), 0, "one survivor needs no embedding");
    }

    #[tokio::test]
    async fn semantic_pass_collapses_near_duplicates() {
        let embedder = near_duplicate_embedder();
        let input = vec![
            article(1, "Acme beats earnings", "quarterly results"),
            article(2, "Acme beats earnings!!", "quarterly results"),
            article(3, "Weather report", "sunny all week"),
        ];
        let result = dedupe(&embedder, input, 0.76).await.unwrap();
        assert_eq!(result.len(), 2, "articles 1 and 2 must collapse");
        assert_eq!(result[0].id, 1, "first occurrence of the cluster survives");
        assert_eq!(result[1].id, 3);
    }

    #[tokio::test]
    async fn dedup_is_idempotent() {
        let embedder = near_duplicate_embedder();
        let input = vec![
            article(1, "Acme beats earnings", "quarterly results"),
            article(2, "Acme beats earnings!!", "quarterly results"),
            article(3, "Weather report", "sunny all week"),
        ];
        let once = dedupe(&embedder, input, 0.76).await.unwrap();
        let twice = dedupe(&embedder, once.clone(), 0.76).await.unwrap();
        let once_ids: Vec<i64> = once.iter().map(|a| a.id).collect();
        let twice_ids: Vec<i64> = twice.iter().map(|a| a.id).collect();
        assert_eq!(once_ids, twice_ids, "dedup of its own output must change nothing");
    }

    #[tokio::test]
    async fn output_never_repeats_an_id() {
        let embedder = near_duplicate_embedder();
        let input = vec![
            article(1, "Acme beats earnings", "quarterly results"),
            article(1, "Acme beats earnings", "quarterly results"),
            article(3, "Weather report", "sunny all week"),
            article(3, "Weather report", "sunny all week"),
        ];
        let result = dedupe(&embedder, input, 0.76).await.unwrap();
        let mut ids: Vec<i64> = result.iter().map(|a| a.id).collect();
        let before = ids.len();
        ids.dedup();
        assert_eq!(ids.len(), before);
    }

    #[tokio::test]
    async fn embed_failure_is_fatal() {
        let input = vec![
            article(1, "Acme beats earnings", "quarterly results"),
            article(2, "Weather report", "sunny all week"),
        ];
        let err = dedupe(&FailingEmbedder, input, 0.76).await.unwrap_err();
        assert!(matches!(err, PipelineError::Dedup(_)));
    }
}
