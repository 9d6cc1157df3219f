//! Event-magnitude keyword tiers.
//!
//! Keywords are matched as lowercase substrings of `headline + body`.
//! High- and medium-tier matches only count when a named entity co-occurs
//! in the text; low-tier matches need no entity.

/// High-impact events. Promotion threshold 0.8: if the best gated match
/// here reaches it, lower tiers are not consulted.
pub(crate) const HIGH_IMPACT: &[(&str, f64)] = &[
    ("earnings", 0.95),
    ("merger", 0.95),
    ("acquisition", 0.95),
    ("acquires", 0.95),
    ("bankruptcy", 0.90),
    ("bankrupt", 0.90),
    ("ceo", 0.85),
    ("chief executive", 0.85),
    ("lawsuit", 0.80),
    ("regulatory", 0.85),
    ("fda approval", 0.95),
    ("fda approves", 0.95),
    ("stock split", 0.85),
    ("dividend", 0.80),
    ("restructuring", 0.85),
    ("investigation", 0.80),
    ("fraud", 0.90),
    ("recall", 0.85),
    ("guidance", 0.85),
    ("forecast", 0.80),
    ("layoffs", 0.85),
    ("layoff", 0.85),
];

/// Medium-impact events. Promotion threshold 0.4.
pub(crate) const MEDIUM_IMPACT: &[(&str, f64)] = &[
    ("partnership", 0.60),
    ("contract", 0.55),
    ("product launch", 0.60),
    ("launches", 0.55),
    ("upgrade", 0.50),
    ("downgrade", 0.50),
    ("rating", 0.45),
    ("analyst", 0.40),
    ("expansion", 0.55),
    ("investment", 0.50),
    ("funding", 0.55),
    ("deal", 0.50),
    ("collaboration", 0.50),
    ("agreement", 0.50),
];

/// Low-impact commentary. No entity gate.
pub(crate) const LOW_IMPACT: &[(&str, f64)] = &[
    ("commentary", 0.30),
    ("outlook", 0.30),
    ("analysis", 0.25),
    ("opinion", 0.20),
    ("update", 0.25),
    ("report", 0.25),
    ("expects", 0.30),
    ("could", 0.20),
    ("may", 0.20),
];

/// Score for an article matching no keyword at all. Non-zero so generic
/// articles are dampened, not eliminated.
pub(crate) const MAGNITUDE_BASELINE: f64 = 0.15;

pub(crate) const HIGH_PROMOTION: f64 = 0.8;
pub(crate) const MEDIUM_PROMOTION: f64 = 0.4;

/// Best matching keyword weight within one tier, or 0.0 for no match.
pub(crate) fn best_tier_match(text_lower: &str, tier: &[(&str, f64)]) -> f64 {
    let mut best = 0.0f64;
    for &(keyword, weight) in tier {
        if text_lower.contains(keyword) {
            best = best.max(weight);
        }
    }
    best
}
