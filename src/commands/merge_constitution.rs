//! Implementation of the `charter merge-constitution` command.

use super::{load_vision_document, path_or};
use crate::artifacts::merge_constitution_document;
use crate::cli::MergeConstitutionArgs;
use crate::constitution::derive_merge_constitution;
use crate::context::ProjectContext;
use crate::error::Result;
use crate::events::{Event, EventAction, record_event};
use crate::fs::atomic_write_file;
use crate::vision::analyze;
use chrono::{DateTime, Utc};
use serde_json::json;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, PartialEq, Eq)]
pub enum MergeOutcome {
    /// `--dry-run`: the rendered document, nothing written.
    Preview(String),
    Written { path: PathBuf, principles: usize },
}

pub fn run_merge_constitution(
    ctx: &ProjectContext,
    args: &MergeConstitutionArgs,
    now: DateTime<Utc>,
) -> Result<MergeOutcome> {
    let document = load_vision_document(ctx, args.vision.as_deref())?;
    let profile = analyze(&document.content);
    let constitution = derive_merge_constitution(&profile, &document.path, now.date_naive());
    let content = merge_constitution_document(&constitution, now)?;

    if args.dry_run {
        return Ok(MergeOutcome::Preview(content));
    }

    let path = path_or(ctx, args.output.as_deref(), ctx.merge_constitution_path());
    atomic_write_file(&path, &content)?;
    let principles = constitution.core_principles.len();
    info!(principles, path = %path.display(), "wrote merge constitution");

    record_event(
        ctx,
        &Event::at(EventAction::MergeConstitution, now).with_details(json!({
            "vision": document.path.display().to_string(),
            "path": ctx.relative_path(&path).display().to_string(),
            "principles": principles,
        })),
    );

    Ok(MergeOutcome::Written { path, principles })
}

pub(super) fn cmd_merge_constitution(
    ctx: &ProjectContext,
    args: MergeConstitutionArgs,
) -> Result<()> {
    match run_merge_constitution(ctx, &args, Utc::now())? {
        MergeOutcome::Preview(content) => print!("{}", content),
        MergeOutcome::Written { path, principles } => {
            println!(
                "Merge constitution with {} core principle(s) written to {}",
                principles,
                path.display()
            );
        }
    }
    Ok(())
}
