//! Agent specification files.
//!
//! A specification file is `agents: [...]` YAML. Records are validated one
//! at a time so a single malformed agent does not hide the others.

use super::model::{AgentSpec, RosterFile};
use crate::error::{CharterError, DocumentKind, Result};
use regex::Regex;
use serde_yaml::Value;
use std::path::Path;
use std::sync::LazyLock;

static AGENT_ID_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9][a-z0-9-]*$").expect("Invalid agent ID regex"));

/// Fields every record must carry as non-empty strings.
pub const REQUIRED_FIELDS: &[&str] = &["agent_id", "title", "role"];

/// Read and validate a specification file.
///
/// The outer `Result` fails when the file is missing or is not YAML; each
/// inner `Result` is one record.
pub fn load_specifications(path: &Path) -> Result<Vec<Result<AgentSpec>>> {
    if !path.is_file() {
        return Err(CharterError::not_found(DocumentKind::AgentSpecifications, [path]));
    }
    let content = std::fs::read_to_string(path).map_err(|e| {
        CharterError::UserError(format!("failed to read '{}': {}", path.display(), e))
    })?;
    parse_specifications(&content)
}

pub fn parse_specifications(yaml: &str) -> Result<Vec<Result<AgentSpec>>> {
    let document: Value = serde_yaml::from_str(yaml)
        .map_err(|e| CharterError::UserError(format!("invalid agent specifications: {}", e)))?;

    let records = match document.get("agents") {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Sequence(records)) => records,
        Some(_) => {
            return Err(CharterError::UserError(
                "invalid agent specifications: 'agents' must be a list".to_string(),
            ));
        }
    };

    Ok(records
        .iter()
        .enumerate()
        .map(|(i, record)| validate_record(i + 1, record))
        .collect())
}

fn validate_record(position: usize, record: &Value) -> Result<AgentSpec> {
    for field in REQUIRED_FIELDS {
        let present = matches!(record.get(*field), Some(Value::String(s)) if !s.trim().is_empty());
        if !present {
            return Err(CharterError::ValidationError(format!(
                "agent record {} is missing required field '{}'",
                position, field
            )));
        }
    }

    if let Some(Value::String(id)) = record.get("agent_id")
        && !AGENT_ID_REGEX.is_match(id)
    {
        return Err(CharterError::ValidationError(format!(
            "agent record {} has invalid 'agent_id' '{}' (expected lowercase letters, digits and hyphens)",
            position, id
        )));
    }

    serde_yaml::from_value(record.clone()).map_err(|e| {
        CharterError::ValidationError(format!("agent record {}: {}", position, e))
    })
}

/// Serialize a roster as a specification file.
pub fn roster_yaml(agents: &[AgentSpec]) -> Result<String> {
    let file = RosterFile {
        agents: agents.to_vec(),
    };
    serde_yaml::to_string(&file)
        .map_err(|e| CharterError::UserError(format!("failed to serialize roster: {}", e)))
}
