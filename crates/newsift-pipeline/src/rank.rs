//! Rule-based relevance ranking.
//!
//! Each article gets four scores: recency (exponential decay by age),
//! magnitude (keyword tiers gated by entity presence), company relevance
//! (target-vs-other mention table), and the composite rank. Output is
//! sorted by rank descending, ties kept in input order.

use chrono::{DateTime, Utc};

use newsift_core::{Article, CompanyRegistry};

use crate::entities::has_named_entity;
use crate::keywords::{
    best_tier_match, HIGH_IMPACT, HIGH_PROMOTION, LOW_IMPACT, MAGNITUDE_BASELINE, MEDIUM_IMPACT,
    MEDIUM_PROMOTION,
};

/// Fixed composite weights; configuration constants, not per-call knobs.
const RECENCY_WEIGHT: f64 = 0.40;
const MAGNITUDE_WEIGHT: f64 = 0.60;

/// Recency fallback for articles whose publication date never parsed.
const NEUTRAL_RECENCY: f64 = 0.5;

pub struct Ranker {
    decay_rate: f64,
    registry: CompanyRegistry,
}

impl Ranker {
    #[must_use]
    pub fn new(decay_rate: f64, registry: CompanyRegistry) -> Self {
        Self {
            decay_rate,
            registry,
        }
    }

    /// Score and sort articles, highest rank first.
    ///
    /// `target_company` must be a canonical registry name when given;
    /// without one, company relevance is 1.0 for every article and the
    /// rank is purely recency and magnitude.
    #[must_use]
    pub fn rank(&self, articles: Vec<Article>, target_company: Option<&str>) -> Vec<Article> {
        self.rank_at(articles, target_company, Utc::now())
    }

    /// [`Ranker::rank`] against an explicit reference time.
    #[must_use]
    pub fn rank_at(
        &self,
        mut articles: Vec<Article>,
        target_company: Option<&str>,
        now: DateTime<Utc>,
    ) -> Vec<Article> {
        let mention_terms = target_company.map(|target| {
            (
                self.registry
                    .resolve(target)
                    .map(|c| c.mention_terms())
                    .unwrap_or_else(|_| vec![target.to_lowercase()]),
                self.registry.other_mention_terms(target),
            )
        });

        for article in &mut articles {
            let text = article.scoring_text();
            let text_lower = text.to_lowercase();

            let recency = self.recency_score(article.published_at, now);

            let company_relevance = mention_terms.as_ref().map_or(1.0, |(target, other)| {
                let target_mentions = count_mentions(&text_lower, target);
                let other_mentions = count_mentions(&text_lower, other);
                relevance_multiplier(target_mentions, other_mentions)
            });

            // A known company mention is itself an organization entity;
            // the heuristic alone misses single-word headline subjects.
            let entity_present = has_named_entity(&text)
                || mention_terms.as_ref().is_some_and(|(target, other)| {
                    count_mentions(&text_lower, target) > 0
                        || count_mentions(&text_lower, other) > 0
                });

            let magnitude = magnitude_score(&text_lower, entity_present);

            let rank =
                (RECENCY_WEIGHT * recency + MAGNITUDE_WEIGHT * magnitude) * company_relevance;

            article.scores.recency = Some(recency);
            article.scores.magnitude = Some(magnitude);
            article.scores.company_relevance = Some(company_relevance);
            article.scores.rank = Some(rank);
        }

        // Stable sort: equal ranks keep input order.
        articles.sort_by(|a, b| {
            b.scores
                .rank
                .partial_cmp(&a.scores.rank)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        articles
    }

    /// `exp(-decay_rate * days_old)`, days floored at zero so future-dated
    /// articles score exactly 1.0.
    fn recency_score(&self, published_at: Option<DateTime<Utc>>, now: DateTime<Utc>) -> f64 {
        let Some(published) = published_at else {
            return NEUTRAL_RECENCY;
        };
        let days_old = (now - published).num_days().max(0);
        #[allow(clippy::cast_precision_loss)]
        let days_old = days_old as f64;
        (-self.decay_rate * days_old).exp()
    }
}

/// Evaluate keyword tiers high to low, short-circuiting once a tier's
/// best match reaches its promotion threshold.
fn magnitude_score(text_lower: &str, entity_present: bool) -> f64 {
    let mut best = 0.0f64;

    if entity_present {
        best = best_tier_match(text_lower, HIGH_IMPACT);
    }
    if best < HIGH_PROMOTION && entity_present {
        best = best.max(best_tier_match(text_lower, MEDIUM_IMPACT));
    }
    if best < MEDIUM_PROMOTION {
        best = best.max(best_tier_match(text_lower, LOW_IMPACT));
    }

    if best > 0.0 {
        best
    } else {
        MAGNITUDE_BASELINE
    }
}

/// Total non-overlapping occurrences of any term in the text. Longer terms
/// claim their span first, so "Acme Corp" counts one mention even when
/// "Acme" is also a term. Terms and text must already be lowercased.
fn count_mentions(text_lower: &str, terms: &[String]) -> usize {
    let mut terms: Vec<&str> = terms
        .iter()
        .filter(|t| !t.is_empty())
        .map(String::as_str)
        .collect();
    terms.sort_by_key(|t| std::cmp::Reverse(t.len()));

    let mut claimed: Vec<(usize, usize)> = Vec::new();
    for term in terms {
        // Stepping past the first char of a skipped match keeps the
        // offset on a UTF-8 boundary.
        let step = term.chars().next().map_or(1, char::len_utf8);
        let mut start = 0;
        while let Some(pos) = text_lower[start..].find(term) {
            let begin = start + pos;
            let end = begin + term.len();
            if claimed.iter().any(|&(s, e)| begin < e && s < end) {
                start = begin + step;
            } else {
                claimed.push((begin, end));
                start = end;
            }
        }
    }
    claimed.len()
}

/// The relevance multiplier table. First matching row wins, top to bottom.
fn relevance_multiplier(target_mentions: usize, other_mentions: usize) -> f64 {
    match (target_mentions, other_mentions) {
        (3.., _) => 2.0,
        (2, _) => 1.5,
        (1, 2..) => 0.6,
        (1, 1) => 0.8,
        (1, 0) => 1.2,
        (0, 1..) => 0.2,
        (0, 0) => 0.5,
    }
}

#[cfg(test)]
#[path = "rank_test.rs"]
mod tests;
