//! Principle-to-check rules.
//!
//! The table is scanned in order and only the first matching row
//! contributes. A principle mentioning both "offline" and "secure" gets the
//! connectivity checks only.

/// Added to every principle before the table checks.
pub const GENERIC_CHECK: &str = "Implementation aligns with principle";

pub const MAX_CHECKS: usize = 4;

/// A keyword row of the check table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckRule {
    pub keywords: &'static [&'static str],
    pub checks: &'static [&'static str],
}

impl CheckRule {
    /// Case-insensitive substring test against any keyword.
    pub fn matches(&self, text: &str) -> bool {
        let lower = text.to_lowercase();
        self.keywords.iter().any(|kw| lower.contains(kw))
    }
}

pub const PRINCIPLE_CHECK_RULES: &[CheckRule] = &[
    CheckRule {
        keywords: &["offline", "connectivity", "network"],
        checks: &[
            "Feature works without network connectivity",
            "Graceful handling of network failures",
        ],
    },
    CheckRule {
        keywords: &["mobile", "phone", "device"],
        checks: &["Mobile-friendly implementation", "Works on target mobile devices"],
    },
    CheckRule {
        keywords: &["simple", "simplicity", "easy"],
        checks: &["Solution is as simple as possible", "No unnecessary complexity"],
    },
    CheckRule {
        keywords: &["secure", "security", "privacy", "protected"],
        checks: &["Security best practices followed", "No known vulnerabilities"],
    },
    CheckRule {
        keywords: &["performance", "fast", "speed", "quick"],
        checks: &["Performance targets met", "No performance regressions"],
    },
    CheckRule {
        keywords: &["reliable", "reliability", "consistent", "resilient"],
        checks: &["Error handling implemented", "Graceful degradation in edge cases"],
    },
    CheckRule {
        keywords: &["accessible", "accessibility", "anyone", "anywhere"],
        checks: &["Works in target environments", "No unnecessary barriers"],
    },
    CheckRule {
        keywords: &["open", "transparent", "interoperable"],
        checks: &["Uses open standards where applicable", "Documented interfaces"],
    },
];

/// Used when no row matches.
pub const FALLBACK_CHECKS: &[&str] = &["Principle considered in design", "No violations of principle"];

/// Checks verifying one principle, at most [`MAX_CHECKS`].
pub fn principle_checks(principle: &str) -> Vec<String> {
    let specific = PRINCIPLE_CHECK_RULES
        .iter()
        .find(|rule| rule.matches(principle))
        .map(|rule| rule.checks)
        .unwrap_or(FALLBACK_CHECKS);

    std::iter::once(GENERIC_CHECK)
        .chain(specific.iter().copied())
        .take(MAX_CHECKS)
        .map(String::from)
        .collect()
}

/// Checks verifying a bare value such as `secure`.
pub fn value_checks(value: &str) -> Vec<String> {
    vec![
        format!("Implementation maintains {}", value),
        format!("No compromise on {}", value),
        format!("{} validated in tests", capitalize(value)),
    ]
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
