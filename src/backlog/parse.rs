//! Backlog markdown parsing.

use super::model::{Backlog, Epic, Priority, Story, StoryStatus};
use crate::error::{CharterError, DocumentKind, Result};
use crate::markdown::{HeadingMatcher, MarkdownDocument, extract_checkbox_items};
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;
use tracing::debug;

/// Epic heading, priority sub-heading and goal line, in that exact layout.
static EPIC_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"## (Epic \d+): ([^\n]+)\n\n### Priority: (\w+)\n\*\*Goal\*\*: ([^\n]+)")
        .expect("Invalid epic header regex")
});

/// `**1.2 Story title**`
static STORY_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\*\*(\d+\.\d+)\s+([^*]+)\*\*").expect("Invalid story header regex")
});

static STORY_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*\d+\.\d+").expect("Invalid story marker regex"));

/// Read and parse the backlog at `path`.
pub fn load_backlog(path: &Path) -> Result<Backlog> {
    if !path.is_file() {
        return Err(CharterError::not_found(DocumentKind::Backlog, [path]));
    }
    let content = std::fs::read_to_string(path).map_err(|e| {
        CharterError::UserError(format!("failed to read '{}': {}", path.display(), e))
    })?;
    Ok(parse_backlog(&content))
}

/// Parse every well-formed epic block. Malformed blocks are skipped.
pub fn parse_backlog(content: &str) -> Backlog {
    let content = content.replace("\r\n", "\n");
    let doc = MarkdownDocument::parse(&content);

    let epics: Vec<Epic> = EPIC_HEADER
        .captures_iter(&content)
        .map(|caps| {
            let id = caps[1].to_string();
            let title = caps[2].trim().to_string();
            let heading = format!("{}: {}", id, title);
            let body = doc
                .section_bounded(&HeadingMatcher::prefix(heading), 2)
                .unwrap_or_default();

            Epic {
                id,
                title,
                priority: Priority::parse(&caps[3]),
                goal: caps[4].trim().to_string(),
                stories: parse_stories(&body),
            }
        })
        .collect();

    debug!(epics = epics.len(), "parsed backlog");
    Backlog { epics }
}

/// Stories of one epic body; each story owns the checkbox lines up to the next story.
fn parse_stories(body: &str) -> Vec<Story> {
    STORY_HEADER
        .captures_iter(body)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let end = STORY_MARKER
                .find_at(body, whole.end())
                .map_or(body.len(), |m| m.start());

            Some(Story {
                id: caps[1].to_string(),
                title: caps[2].trim().to_string(),
                tasks: extract_checkbox_items(&body[whole.end()..end]),
                status: StoryStatus::Pending,
            })
        })
        .collect()
}
