//! Heuristic markdown extraction.
//!
//! Two leaf extractors feed the vision and backlog parsers:
//!
//! - [`section`]: the body under a heading picked by label, keyword or pattern
//! - [`list`]: bullet, numbered and checkbox items of a text block
//!
//! Neither attempts real markdown parsing. Headings are recognised by their
//! leading `#` run and nothing else, so a `#` line inside a fenced code block
//! is still a heading.

pub mod list;
pub mod section;

#[cfg(test)]
mod tests;

pub use list::{MIN_ITEM_LEN, extract_checkbox_items, extract_list_items, extract_list_items_with_min};
pub use section::{Heading, HeadingMatcher, MarkdownDocument, extract_section, find_first_section};
