//! Markdown rendering.
//!
//! Derivation produces typed records only; this module turns them into the
//! human-facing markdown documents (agent definitions and the bootstrap
//! summary) through a small `{variable}` template engine.

pub mod agent;
pub mod summary;
pub mod template;

pub use agent::{
    DEFINITION_SOURCE, authority_description, definition_dir, definition_path,
    render_agent_definition,
};
pub use summary::render_bootstrap_summary;
pub use template::{TemplateError, Variables, render_template, variables};

use crate::error::CharterError;

fn render_failure(what: &str, err: TemplateError) -> CharterError {
    CharterError::UserError(format!("failed to render {}: {}", what, err))
}
