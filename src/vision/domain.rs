//! Domain classification by keyword lexicon.
//!
//! Scores are raw substring counts on the lower-cased text, with no word
//! boundaries: "learning" counts for "learn" and "network" for "net...".
//! That imprecision is accepted in exchange for a classifier that cannot fail.

use super::profile::Domain;

/// Domain lexicon. Declaration order is the tie-break order.
pub const DOMAIN_LEXICON: &[(Domain, &[&str])] = &[
    (Domain::Education, &["learn", "student", "course", "teach", "education"]),
    (Domain::Healthcare, &["health", "medical", "patient", "clinical", "hospital"]),
    (Domain::Finance, &["financial", "banking", "payment", "transaction", "trading"]),
    (Domain::Ecommerce, &["shop", "product", "cart", "checkout", "order"]),
    (Domain::Social, &["social", "community", "connect", "share", "network"]),
    (Domain::Iot, &["device", "sensor", "embedded", "hardware", "iot"]),
    (Domain::Enterprise, &["business", "enterprise", "organization", "workflow"]),
    (Domain::Gaming, &["game", "player", "level", "score", "gameplay"]),
    (Domain::Media, &["content", "video", "stream", "media", "publish"]),
];

/// Score of every lexicon domain, in declaration order.
pub fn domain_scores(content: &str) -> Vec<(Domain, usize)> {
    let lower = content.to_lowercase();
    DOMAIN_LEXICON
        .iter()
        .map(|(domain, keywords)| {
            let score = keywords.iter().map(|kw| lower.matches(kw).count()).sum();
            (*domain, score)
        })
        .collect()
}

/// Highest-scoring domain, earliest declared on ties, `General` when nothing scores.
pub fn classify_domain(content: &str) -> Domain {
    let mut best = (Domain::General, 0);
    for (domain, score) in domain_scores(content) {
        if score > best.1 {
            best = (domain, score);
        }
    }
    best.0
}
