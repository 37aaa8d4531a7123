//! Implementation of the `charter define` command.
//!
//! Renders one markdown definition per agent of a specifications file.
//! Invalid records are skipped with a warning; the valid ones are still
//! rendered.

use super::path_or;
use crate::artifacts::{Artifact, write_artifacts};
use crate::cli::DefineArgs;
use crate::context::ProjectContext;
use crate::error::{CharterError, Result};
use crate::events::{Event, EventAction, record_event};
use crate::render::{definition_path, render_agent_definition};
use crate::roster::{AgentSpec, dedup_by_agent_id, load_specifications};
use chrono::{DateTime, Utc};
use serde_json::json;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Debug)]
pub struct DefineOutcome {
    pub written: Vec<PathBuf>,
    /// Records skipped because they failed validation.
    pub skipped: usize,
}

pub fn run_define(
    ctx: &ProjectContext,
    args: &DefineArgs,
    now: DateTime<Utc>,
) -> Result<DefineOutcome> {
    let spec_file = path_or(ctx, args.spec_file.as_deref(), ctx.agent_specifications_path());

    let mut specs: Vec<AgentSpec> = Vec::new();
    let mut skipped = 0;
    for record in load_specifications(&spec_file)? {
        match record {
            Ok(spec) => specs.push(spec),
            Err(err) => {
                warn!(spec_file = %spec_file.display(), "skipping agent: {}", err);
                skipped += 1;
            }
        }
    }

    let mut specs = dedup_by_agent_id(specs);

    if let Some(id) = &args.single {
        specs.retain(|spec| &spec.agent_id == id);
        if specs.is_empty() {
            return Err(CharterError::UserError(format!(
                "agent '{}' not found in '{}'",
                id,
                spec_file.display()
            )));
        }
    }

    let agents_dir = ctx.agents_dir();
    let generated = now.date_naive();
    let artifacts = specs
        .iter()
        .map(|spec| -> Result<Artifact> {
            Ok(Artifact::new(
                "agent_definition",
                definition_path(&agents_dir, spec),
                render_agent_definition(spec, generated)?,
            ))
        })
        .collect::<Result<Vec<_>>>()?;

    let report = write_artifacts(&artifacts);
    info!(
        written = report.written.len(),
        failed = report.failed.len(),
        skipped,
        "rendered agent definitions"
    );

    record_event(
        ctx,
        &Event::at(EventAction::Define, now).with_details(json!({
            "spec_file": ctx.relative_path(&spec_file).display().to_string(),
            "written": report.written.len(),
            "failed": report.failed.len(),
            "skipped": skipped,
        })),
    );

    let written = report.into_result()?;
    Ok(DefineOutcome { written, skipped })
}

pub(super) fn cmd_define(ctx: &ProjectContext, args: DefineArgs) -> Result<()> {
    let outcome = run_define(ctx, &args, Utc::now())?;

    println!("Rendered {} agent definition(s):", outcome.written.len());
    for path in &outcome.written {
        println!("  {}", ctx.relative_path(path).display());
    }
    if outcome.skipped > 0 {
        println!();
        println!("Skipped {} invalid record(s); see the warnings above.", outcome.skipped);
    }

    Ok(())
}
