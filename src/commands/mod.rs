//! Command implementations for charter.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. Each handler splits into a `run_*` function that does
//! the work and returns what happened, and a `cmd_*` wrapper that prints
//! the outcome for the user.

mod bootstrap;
mod define;
mod inspect;
mod merge_constitution;
mod sprint;
mod suggest;

pub use bootstrap::{BootstrapOutcome, run_bootstrap};
pub use define::{DefineOutcome, run_define};
pub use inspect::{agents_yaml, constitution_yaml, interpret_yaml, protocol_yaml};
pub use merge_constitution::{MergeOutcome, run_merge_constitution};
pub use sprint::{SprintOutcome, run_sprint};
pub use suggest::{SuggestOutcome, run_suggest};

use crate::cli::{Cli, Command};
use crate::context::ProjectContext;
use crate::error::Result;
use crate::vision::{VisionDocument, load_vision};
use std::path::{Path, PathBuf};

/// Dispatch a parsed command line to its implementation.
pub fn dispatch(cli: Cli) -> Result<()> {
    let ctx = ProjectContext::resolve(cli.repo_root.as_deref())?;

    match cli.command {
        Command::Interpret(args) => inspect::cmd_interpret(&ctx, args),
        Command::Constitution(args) => inspect::cmd_constitution(&ctx, args),
        Command::Agents(args) => inspect::cmd_agents(&ctx, args),
        Command::Protocol => inspect::cmd_protocol(),
        Command::Bootstrap(args) => bootstrap::cmd_bootstrap(&ctx, args),
        Command::Sprint(args) => sprint::cmd_sprint(&ctx, args),
        Command::Suggest(args) => suggest::cmd_suggest(&ctx, args),
        Command::Define(args) => define::cmd_define(&ctx, args),
        Command::MergeConstitution(args) => merge_constitution::cmd_merge_constitution(&ctx, args),
    }
}

/// Load the vision document for a command.
///
/// The returned document's path is relative to the repository root so it
/// can be recorded in artifacts as-is.
fn load_vision_document(ctx: &ProjectContext, explicit: Option<&Path>) -> Result<VisionDocument> {
    let explicit = explicit.map(|p| ctx.resolve_path(p));
    let document = load_vision(explicit.as_deref(), &ctx.vision_candidates())?;
    Ok(VisionDocument {
        path: ctx.relative_path(&document.path),
        content: document.content,
    })
}

/// A command-line path override, or the configured default.
fn path_or(ctx: &ProjectContext, path: Option<&Path>, default: PathBuf) -> PathBuf {
    path.map(|p| ctx.resolve_path(p)).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CharterError;
    use crate::test_support::create_sample_project;

    #[test]
    fn vision_path_is_recorded_relative_to_root() {
        let temp_dir = create_sample_project();
        let ctx = ProjectContext::resolve_from(temp_dir.path()).unwrap();

        let document = load_vision_document(&ctx, None).unwrap();

        assert_eq!(document.path, PathBuf::from("docs/product/vision.md"));
        assert!(document.content.contains("Offline Classroom"));
    }

    #[test]
    fn explicit_vision_is_resolved_against_root() {
        let temp_dir = create_sample_project();
        std::fs::write(temp_dir.path().join("ALT.md"), "## Mission\nAlt mission\n").unwrap();
        let ctx = ProjectContext::resolve_from(temp_dir.path()).unwrap();

        let document = load_vision_document(&ctx, Some(Path::new("ALT.md"))).unwrap();

        assert_eq!(document.path, PathBuf::from("ALT.md"));
    }

    #[test]
    fn missing_explicit_vision_is_not_found() {
        let temp_dir = create_sample_project();
        let ctx = ProjectContext::resolve_from(temp_dir.path()).unwrap();

        let err = load_vision_document(&ctx, Some(Path::new("nope.md"))).unwrap_err();

        assert!(matches!(err, CharterError::DocumentNotFound { .. }));
    }
}
