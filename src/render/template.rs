//! `{variable}` substitution for document templates.
//!
//! # Syntax
//!
//! - `{name}` substitutes the value of variable `name` (surrounding
//!   whitespace inside the braces is ignored)
//! - `{{` renders a literal `{`
//! - `}}` renders a literal `}`; a lone `}` is kept as is
//!
//! Undefined variables are an error rather than an empty substitution, so a
//! misspelled placeholder cannot silently drop a section of a document.

use std::collections::HashMap;
use thiserror::Error;

/// Template rendering failures. Positions are byte offsets of the opening `{`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    #[error("undefined variable '{name}' at position {position} in template")]
    UndefinedVariable { name: String, position: usize },

    #[error("unmatched '{{' at position {position} in template")]
    UnmatchedBrace { position: usize },

    #[error("empty variable name '{{}}' at position {position} in template")]
    EmptyVariableName { position: usize },
}

/// Variable bindings for one rendering.
pub type Variables = HashMap<String, String>;

/// Render `template`, substituting every `{name}` from `variables`.
///
/// ```
/// use charter::render::template::{render_template, variables};
///
/// let vars = variables([("title", "Test Agent"), ("role", "Run tests")]);
/// let out = render_template("# {title}\n\n{role} with {{braces}}", &vars).unwrap();
/// assert_eq!(out, "# Test Agent\n\nRun tests with {braces}");
/// ```
pub fn render_template(template: &str, variables: &Variables) -> Result<String, TemplateError> {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.char_indices().peekable();

    while let Some((pos, ch)) = chars.next() {
        match ch {
            '{' if matches!(chars.peek(), Some((_, '{'))) => {
                chars.next();
                out.push('{');
            }
            '{' => {
                let mut name = String::new();
                loop {
                    match chars.next() {
                        Some((_, '}')) => break,
                        Some((_, c)) => name.push(c),
                        None => return Err(TemplateError::UnmatchedBrace { position: pos }),
                    }
                }

                let name = name.trim();
                if name.is_empty() {
                    return Err(TemplateError::EmptyVariableName { position: pos });
                }

                let value = variables
                    .get(name)
                    .ok_or_else(|| TemplateError::UndefinedVariable {
                        name: name.to_string(),
                        position: pos,
                    })?;
                out.push_str(value);
            }
            '}' => {
                if matches!(chars.peek(), Some((_, '}'))) {
                    chars.next();
                }
                out.push('}');
            }
            _ => out.push(ch),
        }
    }

    Ok(out)
}

/// Build a [`Variables`] map from key-value pairs.
pub fn variables<I, K, V>(pairs: I) -> Variables
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}
