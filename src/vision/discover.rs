//! Vision document discovery.

use crate::error::{CharterError, DocumentKind, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// A located and read vision document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisionDocument {
    pub path: PathBuf,
    pub content: String,
}

/// First existing file among `candidates`.
pub fn discover_vision(candidates: &[PathBuf]) -> Result<PathBuf> {
    for candidate in candidates {
        debug!(candidate = %candidate.display(), "probing for vision document");
        if candidate.is_file() {
            return Ok(candidate.clone());
        }
    }
    Err(CharterError::not_found(DocumentKind::Vision, candidates.iter().cloned()))
}

/// Read the vision document at `explicit`, or the first existing candidate.
pub fn load_vision(explicit: Option<&Path>, candidates: &[PathBuf]) -> Result<VisionDocument> {
    let path = match explicit {
        Some(path) if path.is_file() => path.to_path_buf(),
        Some(path) => return Err(CharterError::not_found(DocumentKind::Vision, [path])),
        None => discover_vision(candidates)?,
    };

    let content = read_document(&path)?;
    Ok(VisionDocument { path, content })
}

/// Read a source document as UTF-8 text.
pub(crate) fn read_document(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| {
        CharterError::UserError(format!("failed to read '{}': {}", path.display(), e))
    })
}
