//! Error types for charter.
//!
//! Uses thiserror for derive macros. Every variant carries a user-readable
//! message and maps to a process exit code.

use crate::exit_codes;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// The kind of source document a lookup was searching for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Vision,
    Backlog,
    SprintPlan,
    AgentSpecifications,
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentKind::Vision => write!(f, "vision"),
            DocumentKind::Backlog => write!(f, "backlog"),
            DocumentKind::SprintPlan => write!(f, "sprint plan"),
            DocumentKind::AgentSpecifications => write!(f, "agent specifications"),
        }
    }
}

/// Main error type for charter operations.
#[derive(Error, Debug)]
pub enum CharterError {
    /// Invalid arguments, unreadable input or invalid configuration.
    #[error("{0}")]
    UserError(String),

    /// No source document exists at any of the searched locations.
    #[error("{kind} document not found (searched: {searched})")]
    DocumentNotFound { kind: DocumentKind, searched: String },

    /// A specification record is malformed (e.g. missing a required field).
    #[error("Validation failed: {0}")]
    ValidationError(String),

    /// A single artifact could not be written.
    #[error("failed to write '{}': {reason}", .path.display())]
    WriteFailure { path: PathBuf, reason: String },

    /// Some artifacts of a batch could not be written; the rest were.
    #[error("{failed} of {total} artifact(s) could not be written")]
    PartialWrite { failed: usize, total: usize },
}

impl CharterError {
    /// Build a `DocumentNotFound` error from the list of paths that were tried.
    pub fn not_found<I, P>(kind: DocumentKind, searched: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let searched = searched
            .into_iter()
            .map(|p| p.into().display().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        CharterError::DocumentNotFound { kind, searched }
    }

    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            CharterError::UserError(_) => exit_codes::USER_ERROR,
            CharterError::DocumentNotFound { .. } => exit_codes::DOCUMENT_NOT_FOUND,
            CharterError::ValidationError(_) => exit_codes::VALIDATION_FAILURE,
            CharterError::WriteFailure { .. } => exit_codes::WRITE_FAILURE,
            CharterError::PartialWrite { .. } => exit_codes::WRITE_FAILURE,
        }
    }
}

/// Result type alias for charter operations.
pub type Result<T> = std::result::Result<T, CharterError>;
