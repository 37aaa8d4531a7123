//! Vision interpretation.
//!
//! Turns one free-form vision document into an immutable [`VisionProfile`]:
//!
//! ```text
//! discover -> read -> extract sections -> classify domain -> VisionProfile
//! ```
//!
//! Extraction is heading and keyword driven. Missing sections produce empty
//! fields, never errors; the only failure is not finding a document at all.

pub mod analyzer;
pub mod discover;
pub mod domain;
pub mod profile;


pub use analyzer::analyze;
pub use discover::{VisionDocument, discover_vision, load_vision};
pub use domain::{DOMAIN_LEXICON, classify_domain, domain_scores};
pub use profile::{Domain, Goals, VisionProfile};
