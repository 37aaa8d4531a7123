//! Section lookup by heading.

use regex::Regex;

/// Deepest heading level that delimits a section.
pub const MAX_SECTION_LEVEL: usize = 3;

/// A level 1–3 heading line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading<'a> {
    pub level: usize,
    pub text: &'a str,
    line: usize,
}

/// How a heading is selected.
#[derive(Debug, Clone)]
pub enum HeadingMatcher {
    /// Heading text starts with the label (case-insensitive).
    Prefix(String),
    /// Heading text contains the keyword anywhere (case-insensitive).
    Contains(String),
    /// Heading text matches the regex. Build it case-insensitive.
    Pattern(Regex),
}

impl HeadingMatcher {
    pub fn prefix(label: impl Into<String>) -> Self {
        HeadingMatcher::Prefix(label.into().to_lowercase())
    }

    pub fn contains(keyword: impl Into<String>) -> Self {
        HeadingMatcher::Contains(keyword.into().to_lowercase())
    }

    pub fn matches(&self, heading_text: &str) -> bool {
        match self {
            HeadingMatcher::Prefix(label) => {
                heading_text.to_lowercase().starts_with(label.as_str())
            }
            HeadingMatcher::Contains(keyword) => {
                heading_text.to_lowercase().contains(keyword.as_str())
            }
            HeadingMatcher::Pattern(re) => re.is_match(heading_text),
        }
    }
}

/// A document split into lines with its level 1–3 headings indexed.
#[derive(Debug, Clone)]
pub struct MarkdownDocument<'a> {
    lines: Vec<&'a str>,
    headings: Vec<Heading<'a>>,
}

impl<'a> MarkdownDocument<'a> {
    pub fn parse(content: &'a str) -> Self {
        let lines: Vec<&str> = content.lines().collect();
        let headings = lines
            .iter()
            .enumerate()
            .filter_map(|(line, raw)| parse_heading(raw).map(|(level, text)| Heading { level, text, line }))
            .collect();
        Self { lines, headings }
    }

    pub fn headings(&self) -> &[Heading<'a>] {
        &self.headings
    }

    /// Body of the first heading accepted by `matcher`, ending at the next
    /// heading of level 1–3. `None` when no heading matches.
    pub fn section(&self, matcher: &HeadingMatcher) -> Option<String> {
        self.section_bounded(matcher, MAX_SECTION_LEVEL)
    }

    /// Like [`section`](Self::section) but the body only ends at a heading of
    /// level `<= stop_level`, so deeper headings stay inside it.
    pub fn section_bounded(&self, matcher: &HeadingMatcher, stop_level: usize) -> Option<String> {
        let (index, heading) = self
            .headings
            .iter()
            .enumerate()
            .find(|(_, h)| matcher.matches(h.text))?;

        let start = heading.line + 1;
        let end = self.headings[index + 1..]
            .iter()
            .find(|h| h.level <= stop_level)
            .map(|h| h.line)
            .unwrap_or(self.lines.len());

        Some(self.lines[start..end].join("\n").trim().to_string())
    }

    /// First section found by trying each matcher in order. Sections are
    /// never merged.
    pub fn first_section(&self, matchers: &[HeadingMatcher]) -> Option<String> {
        matchers.iter().find_map(|m| self.section(m))
    }
}

/// `(level, text)` for a `#`–`###` heading line.
fn parse_heading(line: &str) -> Option<(usize, &str)> {
    let trimmed = line.trim_start();
    let level = trimmed.chars().take_while(|&c| c == '#').count();
    if level == 0 || level > MAX_SECTION_LEVEL {
        return None;
    }

    let rest = &trimmed[level..];
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }

    let text = rest.trim();
    if text.is_empty() { None } else { Some((level, text)) }
}

/// Body under the first heading whose text starts with `label`.
pub fn extract_section(content: &str, label: &str) -> Option<String> {
    MarkdownDocument::parse(content).section(&HeadingMatcher::prefix(label))
}

/// First section matched by any of `matchers`, tried in priority order.
pub fn find_first_section(content: &str, matchers: &[HeadingMatcher]) -> Option<String> {
    MarkdownDocument::parse(content).first_section(matchers)
}
