//! Tests for section and list extraction.

use super::*;
use regex::Regex;

const DOC: &str = "\
# Project

Intro paragraph.

## Mission Statement

Help people learn.
Across two lines.

## Principles & Values

- Keep it simple
- Ship often

#### Detail heading
- Nested detail item

## Empty
## Next
Body of next.
";

#[test]
fn mission_section_is_text_until_next_heading() {
    let section = extract_section(DOC, "Mission").unwrap();
    assert_eq!(section, "Help people learn.\nAcross two lines.");
}

#[test]
fn section_lookup_is_idempotent() {
    let first = extract_section(DOC, "Mission");
    let second = extract_section(DOC, "Mission");
    assert_eq!(first, second);
}

#[test]
fn prefix_match_is_case_insensitive() {
    assert_eq!(
        extract_section(DOC, "mission statement").as_deref(),
        Some("Help people learn.\nAcross two lines.")
    );
}

#[test]
fn prefix_does_not_match_mid_heading() {
    assert_eq!(extract_section(DOC, "Values"), None);
}

#[test]
fn deeper_headings_stay_in_section() {
    let section = extract_section(DOC, "Principles").unwrap();
    assert!(section.contains("#### Detail heading"));
    assert!(section.contains("Nested detail item"));
}

#[test]
fn heading_followed_by_heading_has_empty_body() {
    assert_eq!(extract_section(DOC, "Empty").as_deref(), Some(""));
}

#[test]
fn last_section_runs_to_end_of_document() {
    assert_eq!(extract_section(DOC, "Next").as_deref(), Some("Body of next."));
}

#[test]
fn missing_heading_is_none() {
    assert_eq!(extract_section(DOC, "Constraints"), None);
    assert_eq!(extract_section("", "Mission"), None);
}

#[test]
fn contains_matcher_finds_keyword_anywhere() {
    let doc = MarkdownDocument::parse(DOC);
    let section = doc.section(&HeadingMatcher::contains("VALUE")).unwrap();
    assert!(section.starts_with("- Keep it simple"));
}

#[test]
fn pattern_matcher_uses_regex() {
    let doc = "## Goals for Year 1\n- Launch pilot\n## Later\n";
    let matcher = HeadingMatcher::Pattern(Regex::new(r"(?i)year.?1").unwrap());
    assert_eq!(
        MarkdownDocument::parse(doc).section(&matcher).as_deref(),
        Some("- Launch pilot")
    );
}

#[test]
fn first_section_returns_first_matching_priority_not_merge() {
    let doc = "## Overview\nOverview text\n## Purpose\nPurpose text\n";
    let matchers = [
        HeadingMatcher::prefix("Mission"),
        HeadingMatcher::prefix("Purpose"),
        HeadingMatcher::prefix("Overview"),
    ];
    assert_eq!(find_first_section(doc, &matchers).as_deref(), Some("Purpose text"));
}

#[test]
fn four_hashes_is_not_a_heading() {
    let doc = MarkdownDocument::parse("#### Deep\ntext\n# Top\n");
    let levels: Vec<usize> = doc.headings().iter().map(|h| h.level).collect();
    assert_eq!(levels, vec![1]);
}

#[test]
fn hash_without_space_is_not_a_heading() {
    let doc = MarkdownDocument::parse("#hashtag\n## Real\n");
    assert_eq!(doc.headings().len(), 1);
    assert_eq!(doc.headings()[0].text, "Real");
}

#[test]
fn bounded_section_skips_level_three_headings() {
    let doc = "## Epic 1: Reader\n\n### Priority: High\n**Goal**: Read\n## Epic 2: Other\n";
    let parsed = MarkdownDocument::parse(doc);
    let matcher = HeadingMatcher::prefix("Epic 1: Reader");

    assert_eq!(parsed.section(&matcher).as_deref(), Some(""));
    assert_eq!(
        parsed.section_bounded(&matcher, 2).as_deref(),
        Some("### Priority: High\n**Goal**: Read")
    );
}

#[test]
fn list_items_strip_markers_and_keep_order() {
    let text = "- First item\n* Second item\n• Third item\n12. Fourth item\nplain line\n";
    assert_eq!(
        extract_list_items(text),
        vec!["First item", "Second item", "Third item", "Fourth item"]
    );
}

#[test]
fn list_items_only_strip_the_leading_marker() {
    assert_eq!(
        extract_list_items("1. Release 2. phase one"),
        vec!["Release 2. phase one"]
    );
}

#[test]
fn short_list_items_are_noise() {
    let text = "- abcd\n- abcde\n-\n- ok\n";
    assert_eq!(extract_list_items(text), vec!["abcde"]);
}

#[test]
fn list_items_with_custom_minimum() {
    assert_eq!(extract_list_items_with_min("- ok\n- no\n", 1), vec!["ok", "no"]);
}

#[test]
fn indented_items_are_trimmed() {
    assert_eq!(extract_list_items("    -   spaced out item   "), vec!["spaced out item"]);
}

#[test]
fn list_extraction_is_pure() {
    let text = "- one thing\n- two things\n";
    assert_eq!(extract_list_items(text), extract_list_items(text));
}

#[test]
fn checkbox_items_are_extracted() {
    let text = "- [ ] Open task\n- [x] Done task\n  - [X] Nested done\n- plain bullet\n- [ ]\n";
    assert_eq!(
        extract_checkbox_items(text),
        vec!["Open task", "Done task", "Nested done"]
    );
}
