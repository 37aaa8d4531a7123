//! List item extraction.

use regex::Regex;
use std::sync::LazyLock;

/// Items shorter than this (in characters, after stripping) are noise.
pub const MIN_ITEM_LEN: usize = 5;

static LIST_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[-*•]|\d+\.)\s*").expect("Invalid list marker regex"));

static CHECKBOX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*-\s*\[[ xX]\]\s*").expect("Invalid checkbox regex"));

/// Bullet (`-`, `*`, `•`) and numbered (`1.`) items of `text`, in order,
/// markers stripped, shorter than [`MIN_ITEM_LEN`] dropped.
pub fn extract_list_items(text: &str) -> Vec<String> {
    extract_list_items_with_min(text, MIN_ITEM_LEN)
}

/// [`extract_list_items`] with a caller-chosen minimum length.
pub fn extract_list_items_with_min(text: &str, min_len: usize) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter_map(|line| LIST_MARKER.find(line).map(|m| line[m.end()..].trim()))
        .filter(|item| !item.is_empty() && item.chars().count() >= min_len)
        .map(str::to_string)
        .collect()
}

/// Text of `- [ ]` / `- [x]` lines, in order.
pub fn extract_checkbox_items(text: &str) -> Vec<String> {
    text.lines()
        .filter_map(|line| CHECKBOX.find(line).map(|m| line[m.end()..].trim()))
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
