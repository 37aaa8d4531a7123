//! Vision document analysis.
//!
//! Every extractor here is a pure function of the document text. Absent
//! sections yield empty lists and an unknown domain yields
//! [`Domain::General`](super::Domain::General); analysis never fails.

use super::domain::classify_domain;
use super::profile::{Goals, VisionProfile};
use crate::markdown::{HeadingMatcher, MarkdownDocument, extract_list_items};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

pub const MAX_MISSION_CHARS: usize = 500;
pub const MAX_PRINCIPLES: usize = 10;
pub const MAX_STAKEHOLDERS: usize = 5;
pub const MAX_VALUES: usize = 7;
pub const MAX_ARCHITECTURE_HINTS: usize = 5;

const MISSION_LABELS: &[&str] = &["Mission", "Purpose", "Overview"];
const PRINCIPLE_KEYWORDS: &[&str] = &["principle", "value", "philosophy", "approach"];

/// Values recognised anywhere in the document, in reporting order.
pub const VALUE_VOCABULARY: &[&str] = &[
    "simple",
    "secure",
    "reliable",
    "fast",
    "accessible",
    "private",
    "open",
    "transparent",
    "scalable",
    "resilient",
];

pub const ARCHITECTURE_KEYWORDS: &[&str] = &[
    "architecture",
    "platform",
    "infrastructure",
    "system",
    "offline",
    "cloud",
    "mobile",
    "web",
    "api",
    "microservice",
];

static SHORT_TERM_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)short.?term|6.?month|year.?1").expect("Invalid short-term heading regex")
});

static LONG_TERM_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)long.?term|year.?[23]|future").expect("Invalid long-term heading regex")
});

static STAKEHOLDER_PATTERNS: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        Regex::new(r"(?i)for\s+(\w+s)").expect("Invalid stakeholder regex"),
        Regex::new(r"(?i)(\w+)\s+can").expect("Invalid stakeholder regex"),
        Regex::new(r"(?i)target\s+(\w+)").expect("Invalid stakeholder regex"),
    ]
});

/// Analyze a vision document into a [`VisionProfile`].
pub fn analyze(content: &str) -> VisionProfile {
    let content = content.replace("\r\n", "\n");
    let content = content.as_str();
    let doc = MarkdownDocument::parse(content);

    let profile = VisionProfile {
        mission: extract_mission(&doc, content),
        principles: extract_principles(&doc),
        goals: extract_goals(&doc),
        constraints: list_under(&doc, &HeadingMatcher::contains("constraint")),
        success_criteria: list_under(&doc, &HeadingMatcher::contains("success")),
        domain: classify_domain(content),
        stakeholders: extract_stakeholders(content),
        values: extract_values(content),
        architecture_hints: extract_architecture_hints(content),
    };

    debug!(
        domain = %profile.domain,
        principles = profile.principles.len(),
        constraints = profile.constraints.len(),
        stakeholders = profile.stakeholders.len(),
        "analyzed vision document"
    );

    profile
}

/// First non-empty Mission, Purpose or Overview section, else the first paragraph.
fn extract_mission(doc: &MarkdownDocument<'_>, content: &str) -> String {
    let from_section = MISSION_LABELS
        .iter()
        .filter_map(|label| doc.section(&HeadingMatcher::prefix(*label)))
        .find(|body| !body.is_empty());

    let mission = from_section.unwrap_or_else(|| {
        content
            .split("\n\n")
            .map(str::trim)
            .find(|p| !p.is_empty())
            .unwrap_or_default()
            .to_string()
    });

    mission.chars().take(MAX_MISSION_CHARS).collect()
}

fn extract_principles(doc: &MarkdownDocument<'_>) -> Vec<String> {
    let mut principles = Vec::new();
    for keyword in PRINCIPLE_KEYWORDS {
        if let Some(body) = doc.section(&HeadingMatcher::contains(*keyword)) {
            principles.extend(extract_list_items(&body));
        }
    }
    let mut principles = dedup_preserving_order(principles);
    principles.truncate(MAX_PRINCIPLES);
    principles
}

fn extract_goals(doc: &MarkdownDocument<'_>) -> Goals {
    Goals {
        short_term: list_under(doc, &HeadingMatcher::Pattern(SHORT_TERM_HEADING.clone())),
        long_term: list_under(doc, &HeadingMatcher::Pattern(LONG_TERM_HEADING.clone())),
    }
}

fn list_under(doc: &MarkdownDocument<'_>, matcher: &HeadingMatcher) -> Vec<String> {
    doc.section(matcher)
        .map(|body| extract_list_items(&body))
        .unwrap_or_default()
}

/// Stakeholder words in pattern order, then document order, lower-cased.
fn extract_stakeholders(content: &str) -> Vec<String> {
    let found = STAKEHOLDER_PATTERNS.iter().flat_map(|pattern| {
        pattern
            .captures_iter(content)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str().to_lowercase())
            .collect::<Vec<_>>()
    });

    let mut stakeholders = dedup_preserving_order(found);
    stakeholders.truncate(MAX_STAKEHOLDERS);
    stakeholders
}

fn extract_values(content: &str) -> Vec<String> {
    let lower = content.to_lowercase();
    VALUE_VOCABULARY
        .iter()
        .filter(|value| lower.contains(*value))
        .take(MAX_VALUES)
        .map(|value| value.to_string())
        .collect()
}

/// For each architecture keyword present, the first sentence mentioning it.
///
/// Two keywords can pick the same sentence; both entries are kept.
fn extract_architecture_hints(content: &str) -> Vec<String> {
    let lower = content.to_lowercase();
    let sentences: Vec<&str> = content.split(['.', '!', '?']).collect();

    let mut hints = Vec::new();
    for keyword in ARCHITECTURE_KEYWORDS {
        if hints.len() == MAX_ARCHITECTURE_HINTS {
            break;
        }
        if !lower.contains(keyword) {
            continue;
        }
        if let Some(sentence) = sentences
            .iter()
            .find(|s| s.to_lowercase().contains(keyword))
        {
            hints.push(sentence.trim().to_string());
        }
    }
    hints
}

pub(crate) fn dedup_preserving_order<I>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = std::collections::HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}
