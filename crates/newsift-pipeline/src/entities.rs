//! Heuristic named-entity gate for magnitude scoring.
//!
//! A full NER model sits outside this pipeline; the gate only needs to
//! know whether the text mentions *some* organization, product, or person
//! at all. Three signals count:
//! - a capitalized token that is not the first word of its sentence,
//! - an all-caps acronym of 2 to 6 letters (ticker, agency, product line),
//! - a sentence-initial capitalized token immediately followed by another
//!   capitalized token (a "Proper Noun Pair" like a company name).

use std::sync::LazyLock;

use regex::Regex;

static TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z][A-Za-z0-9'&.-]*").expect("static regex is valid"));

fn is_capitalized(token: &str) -> bool {
    let mut chars = token.chars();
    chars.next().is_some_and(char::is_uppercase) && chars.any(char::is_lowercase)
}

fn is_acronym(token: &str) -> bool {
    (2..=6).contains(&token.len()) && token.chars().all(|c| c.is_ascii_uppercase())
}

/// Whether the text plausibly contains a named entity.
pub(crate) fn has_named_entity(text: &str) -> bool {
    for sentence in text.split(['.', '!', '?', '\n']) {
        let tokens: Vec<&str> = TOKEN.find_iter(sentence).map(|m| m.as_str()).collect();
        for (i, token) in tokens.iter().enumerate() {
            if is_acronym(token) {
                return true;
            }
            if is_capitalized(token) {
                if i > 0 {
                    return true;
                }
                // Sentence-initial: only a run of capitalized tokens counts.
                if tokens.get(1).is_some_and(|next| is_capitalized(next)) {
                    return true;
                }
            }
        }
    }
    false
}
